use crate::common::*;

use crate::dto::{report_query::*, toggl::summary_report::*};
use crate::enums::toggl_report_kind::*;

#[async_trait]
pub trait TimeTrackingRepository: Send + Sync {
    #[doc = "Downloads a PDF report for the query and writes it to `destination`"]
    async fn download_report_pdf(
        &self,
        kind: TogglReportKind,
        query: &ReportQuery,
        destination: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "Fetches the aggregated summary report as JSON"]
    async fn get_summary_report(&self, query: &ReportQuery) -> anyhow::Result<SummaryReport>;
}
