use crate::common::*;

use crate::dto::{report_query::*, team_report_section::*, toggl::summary_report::*};

use crate::enums::toggl_report_kind::*;

use crate::traits::repository_traits::time_tracking_repository::*;
use crate::traits::service_traits::time_report_service::*;

use crate::utils_modules::{io_utils::*, time_utils::*};

#[doc = "Personal and team weekly reports on top of a time-tracking repository"]
#[derive(Debug, new)]
pub struct TimeReportServiceImpl<T: TimeTrackingRepository> {
    time_tracking_repository: T,
    /* user id -> display name (also the folder name) */
    users: BTreeMap<String, String>,
}

impl<T> TimeReportServiceImpl<T>
where
    T: TimeTrackingRepository,
{
    #[doc = "Downloads both PDFs of one user into `<directory>/<name>/`"]
    async fn download_user_reports(
        &self,
        directory: &Path,
        user_id: &str,
        name: &str,
        since: NaiveDate,
        until: NaiveDate,
    ) -> anyhow::Result<()> {
        let folder: PathBuf = directory.join(name);

        if !tokio::fs::try_exists(&folder).await? {
            info!("Creating the folder {:?}", folder);
            tokio::fs::create_dir_all(&folder).await.with_context(|| {
                format!(
                    "[TimeReportServiceImpl->download_user_reports] cannot create {:?}",
                    folder
                )
            })?;
        }

        let query: ReportQuery = ReportQuery::new(since, until, Some(user_id.to_string()));
        let until_str: String = convert_date_to_str(until);

        for kind in [TogglReportKind::Detailed, TogglReportKind::Summary] {
            let destination: PathBuf = folder.join(kind.file_name(&until_str));

            self.time_tracking_repository
                .download_report_pdf(kind, &query, &destination)
                .await?;

            info!("Downloaded {:?}", destination);
        }

        Ok(())
    }
}

#[async_trait]
impl<T> TimeReportService for TimeReportServiceImpl<T>
where
    T: TimeTrackingRepository,
{
    async fn user_weekly_reports(
        &self,
        directory: &Path,
        since: NaiveDate,
        until: NaiveDate,
    ) -> anyhow::Result<usize> {
        info!(
            "Downloading user weekly reports from {} until {} into {:?}",
            since, until, directory
        );

        let mut downloaded: usize = 0;

        for (user_id, name) in &self.users {
            info!("Downloading reports for {}", name);

            match self
                .download_user_reports(directory, user_id, name, since, until)
                .await
            {
                Ok(()) => downloaded += 1,
                Err(e) => {
                    error!(
                        "[TimeReportServiceImpl->user_weekly_reports] Reports for {} ({}) failed: {:?}",
                        name, user_id, e
                    );
                    continue;
                }
            }
        }

        Ok(downloaded)
    }

    async fn team_weekly_report(
        &self,
        team_log_path: &Path,
        since: NaiveDate,
        until: NaiveDate,
    ) -> anyhow::Result<()> {
        info!(
            "Downloading the team weekly report from {} until {} into {:?}",
            since, until, team_log_path
        );

        let summary: SummaryReport = self
            .time_tracking_repository
            .get_summary_report(&ReportQuery::new(since, until, None))
            .await
            .context("[TimeReportServiceImpl->team_weekly_report] Unable to download the team weekly data")?;

        let section: TeamReportSection =
            TeamReportSection::new(since, summary.work_items(), summary.total_grand);
        let formatted_team_report: String = section.render();

        info!("Created team report:{}", formatted_team_report);
        info!("Adding to team log file {:?}", team_log_path);

        append_to_file(team_log_path, &formatted_team_report)?;

        info!("Done team report");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeTimeTracking {
        failing_user: Option<String>,
        summary_total: Option<u64>,
        summary_fails: bool,
        queries: Mutex<Vec<ReportQuery>>,
    }

    #[async_trait]
    impl TimeTrackingRepository for FakeTimeTracking {
        async fn download_report_pdf(
            &self,
            kind: TogglReportKind,
            query: &ReportQuery,
            destination: &Path,
        ) -> anyhow::Result<()> {
            self.queries.lock().unwrap().push(query.clone());

            if query.user_id == self.failing_user {
                return Err(anyhow!("toggl refused {:?}", kind));
            }

            fs::write(destination, kind.endpoint())?;
            Ok(())
        }

        async fn get_summary_report(&self, query: &ReportQuery) -> anyhow::Result<SummaryReport> {
            self.queries.lock().unwrap().push(query.clone());

            if self.summary_fails {
                return Err(anyhow!("toggl unavailable"));
            }

            Ok(serde_json::from_value(json!({
                "total_grand": self.summary_total,
                "data": [
                    {"items": [{"title": {"time_entry": "Standup"}}, {"title": {"time_entry": "Chart"}}]},
                    {"items": [{"title": {"time_entry": "Standup"}}]}
                ]
            }))?)
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn users() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("1001".to_string(), "Ada".to_string()),
            ("1002".to_string(), "Alan".to_string()),
        ])
    }

    #[tokio::test]
    async fn downloads_both_pdfs_per_user() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = TimeReportServiceImpl::new(FakeTimeTracking::default(), users());

        let downloaded: usize = service
            .user_weekly_reports(dir.path(), ymd(2018, 10, 9), ymd(2018, 10, 16))
            .await
            .unwrap();

        assert_eq!(downloaded, 2);
        for name in ["Ada", "Alan"] {
            assert!(dir.path().join(name).join("2018-10-16-details.pdf").exists());
            assert!(dir.path().join(name).join("2018-10-16-summary.pdf").exists());
        }
    }

    #[tokio::test]
    async fn failing_user_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fake: FakeTimeTracking = FakeTimeTracking {
            failing_user: Some("1001".to_string()),
            ..FakeTimeTracking::default()
        };
        let service = TimeReportServiceImpl::new(fake, users());

        let downloaded: usize = service
            .user_weekly_reports(dir.path(), ymd(2018, 10, 9), ymd(2018, 10, 16))
            .await
            .unwrap();

        assert_eq!(downloaded, 1);
        assert!(!dir.path().join("Ada").join("2018-10-16-details.pdf").exists());
        assert!(dir.path().join("Alan").join("2018-10-16-summary.pdf").exists());
    }

    #[tokio::test]
    async fn team_sections_are_appended() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log_path: PathBuf = dir.path().join("team-logs.md");
        let fake: FakeTimeTracking = FakeTimeTracking {
            summary_total: Some(5_400_000),
            ..FakeTimeTracking::default()
        };
        let service = TimeReportServiceImpl::new(fake, users());

        service
            .team_weekly_report(&log_path, ymd(2018, 10, 9), ymd(2018, 10, 16))
            .await
            .unwrap();
        service
            .team_weekly_report(&log_path, ymd(2018, 10, 16), ymd(2018, 10, 23))
            .await
            .unwrap();

        let content: String = fs::read_to_string(&log_path).unwrap();
        assert!(content.starts_with(
            "\n\n---\n### Week of October 09\n\n- Standup\n- Chart\n\n#### Total team hours: 1h 30m"
        ));
        assert!(content.contains("### Week of October 16"));
        assert_eq!(content.matches("---").count(), 2);

        let queries = service.time_tracking_repository.queries.lock().unwrap();
        assert!(queries.iter().all(|query| query.user_id.is_none()));
    }

    #[tokio::test]
    async fn team_failure_leaves_log_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log_path: PathBuf = dir.path().join("team-logs.md");
        let fake: FakeTimeTracking = FakeTimeTracking {
            summary_fails: true,
            ..FakeTimeTracking::default()
        };
        let service = TimeReportServiceImpl::new(fake, users());

        assert!(
            service
                .team_weekly_report(&log_path, ymd(2018, 10, 9), ymd(2018, 10, 16))
                .await
                .is_err()
        );
        assert!(!log_path.exists());
    }
}
