use crate::model::burnup::timeseries::*;

use crate::enums::trend_outcome::*;

pub trait TrendService: Send + Sync {
    #[doc = r#"
        Fits the completion trend over the trailing `regression_window` snapshots.

        # Errors
        * `ReportError::InsufficientData` - the series is empty
        * `ReportError::Config` - `regression_window` is zero
        * `ReportError::Projection` - the projected date is outside the calendar range
    "#]
    fn estimate(
        &self,
        series: &Timeseries,
        regression_window: usize,
    ) -> anyhow::Result<TrendOutcome>;
}
