use crate::common::*;

#[async_trait]
pub trait TimeReportService: Send + Sync {
    #[doc = r#"
        Downloads the detail and summary PDFs of every configured user into
        `<directory>/<user name>/`. A failing user is logged and skipped.
        Returns the number of users whose reports were fully downloaded.
    "#]
    async fn user_weekly_reports(
        &self,
        directory: &Path,
        since: NaiveDate,
        until: NaiveDate,
    ) -> anyhow::Result<usize>;

    #[doc = "Fetches the team-wide summary and appends a section to the team log"]
    async fn team_weekly_report(
        &self,
        team_log_path: &Path,
        since: NaiveDate,
        until: NaiveDate,
    ) -> anyhow::Result<()>;
}
