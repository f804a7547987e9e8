use crate::common::*;

use crate::model::burnup::timeseries::*;

use crate::enums::trend_outcome::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render the burnup chart of the full series and save it as a PNG file
        # Arguments
        * `series` - Every persisted snapshot, drawn as the scope and done lines
        * `outcome` - Trend estimation result; a forecast adds the predicted line and finish date
        * `render_date` - Date shown in the title and encoded in the file name
        * `output_dir` - Directory receiving `burnup-<render_date>.png` (created if absent)
        # Returns
        * Path of the written image
    "]
    async fn render_burnup_chart(
        &self,
        series: &Timeseries,
        outcome: &TrendOutcome,
        render_date: NaiveDate,
        output_dir: &Path,
    ) -> anyhow::Result<PathBuf>;
}
