use crate::common::*;

use crate::dto::{board_snapshot::*, run_options::*, run_outcome::*};

use crate::enums::trend_outcome::*;

use crate::errors::report_error::*;

use crate::model::burnup::timeseries::*;

use crate::traits::repository_traits::timeseries_repository::*;
use crate::traits::service_traits::{
    chart_service::*, snapshot_service::*, time_report_service::*, trend_service::*,
};

#[derive(Debug, new)]
pub struct MainController<
    S: SnapshotService,
    E: TrendService,
    C: ChartService,
    R: TimeReportService,
    TS: TimeseriesRepository,
> {
    snapshot_service: S,
    trend_service: E,
    chart_service: C,
    time_report_service: R,
    timeseries_repository: TS,
}

impl<S, E, C, R, TS> MainController<S, E, C, R, TS>
where
    S: SnapshotService,
    E: TrendService,
    C: ChartService,
    R: TimeReportService,
    TS: TimeseriesRepository,
{
    #[doc = r#"
        Runs one reporting cycle.

        1. `burnup_task`: fetch today's board counts, persist them, estimate the trend and render the chart
        2. personal reports: download the detail/summary PDFs of every configured user
        3. team report: append this period's section to the team log

        The three pipelines are independent: a failure in one is logged and the next one still runs.
        The exception is a configuration error such as a corrupt burnup store, which aborts the run.

        # Returns
        * `RunOutcome` - what each pipeline produced
    "#]
    pub async fn main_task(&self, run: &RunOptions) -> RunOutcome {
        info!(
            "Starting reports for {} (range {} ~ {}) into {:?}",
            run.today, run.since, run.until, run.output_dir
        );

        let mut outcome: RunOutcome = RunOutcome::default();

        /* 1. Burnup chart */
        match self.burnup_task(run).await {
            Ok(chart_path) => {
                info!("Burnup chart saved to {:?}", chart_path);
                outcome.burnup_chart = Some(chart_path);
            }
            Err(e) if Self::is_fatal(&e) => {
                error!(
                    "[MainController->main_task] Configuration error, aborting the run: {:?}",
                    e
                );
                outcome.aborted = true;
                return outcome;
            }
            Err(e) => {
                error!(
                    "[MainController->main_task] Error while trying to generate the burnup chart: {:?}",
                    e
                );
            }
        }

        /* 2. Personal reports */
        match self
            .time_report_service
            .user_weekly_reports(&run.output_dir, run.since, run.until)
            .await
        {
            Ok(downloaded) => {
                info!("Personal reports downloaded for {} user(s)", downloaded);
                outcome.personal_reports_ok = true;
            }
            Err(e) => {
                error!(
                    "[MainController->main_task] Error while trying to download personal reports: {:?}",
                    e
                );
            }
        }

        /* 3. Team report */
        match self
            .time_report_service
            .team_weekly_report(&run.team_log_path(), run.since, run.until)
            .await
        {
            Ok(()) => {
                outcome.team_report_ok = true;
            }
            Err(e) => {
                error!(
                    "[MainController->main_task] Error while trying to create the team report: {:?}",
                    e
                );
            }
        }

        info!("Reports run finished: {:?}", outcome);

        outcome
    }

    #[doc = "Configuration errors (corrupt store included) stop the whole run"]
    fn is_fatal(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Config(_) | ReportError::CorruptStore { .. })
        )
    }

    #[doc = "fetch -> persist -> load -> estimate -> render"]
    async fn burnup_task(&self, run: &RunOptions) -> anyhow::Result<PathBuf> {
        let snapshot: BoardSnapshot = self
            .snapshot_service
            .fetch_snapshot(&run.done_list_name)
            .await?;

        info!(
            "Today's counts: {} done out of {}",
            snapshot.done, snapshot.scope
        );

        self.timeseries_repository
            .upsert(run.today, snapshot.done, snapshot.scope)
            .await
            .context("[MainController->burnup_task] failed to save today's snapshot")?;

        let series: Timeseries = self.timeseries_repository.load().await?;

        let trend: TrendOutcome = self
            .trend_service
            .estimate(&series, run.regression_window)?;

        match trend.estimate() {
            Some(estimate) => info!(
                "Estimated finish date: {} (window of {} point(s))",
                estimate.projected_finish_date,
                estimate.window.len()
            ),
            None => warn!("Only one snapshot stored, the chart is drawn without a forecast"),
        }

        self.chart_service
            .render_burnup_chart(&series, &trend, run.today, &run.chart_dir())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::burnup::snapshot::*;
    use crate::repository::timeseries_repository_impl::*;
    use crate::service::trend_service_impl::*;

    use std::sync::Mutex;

    struct FakeSnapshot {
        snapshot: Option<BoardSnapshot>,
    }

    #[async_trait]
    impl SnapshotService for FakeSnapshot {
        async fn fetch_snapshot(&self, _done_list_name: &str) -> anyhow::Result<BoardSnapshot> {
            self.snapshot
                .ok_or_else(|| anyhow!(ReportError::ExternalService("board offline".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingChart {
        rendered: Mutex<Vec<(usize, TrendOutcome, NaiveDate, PathBuf)>>,
    }

    #[async_trait]
    impl ChartService for RecordingChart {
        async fn render_burnup_chart(
            &self,
            series: &Timeseries,
            outcome: &TrendOutcome,
            render_date: NaiveDate,
            output_dir: &Path,
        ) -> anyhow::Result<PathBuf> {
            self.rendered.lock().unwrap().push((
                series.len(),
                outcome.clone(),
                render_date,
                output_dir.to_path_buf(),
            ));
            Ok(output_dir.join(format!("burnup-{}.png", render_date)))
        }
    }

    #[derive(Default)]
    struct FakeTimeReport {
        personal_fails: bool,
        team_fails: bool,
        personal_calls: Mutex<Vec<PathBuf>>,
        team_calls: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl TimeReportService for FakeTimeReport {
        async fn user_weekly_reports(
            &self,
            directory: &Path,
            _since: NaiveDate,
            _until: NaiveDate,
        ) -> anyhow::Result<usize> {
            self.personal_calls
                .lock()
                .unwrap()
                .push(directory.to_path_buf());
            if self.personal_fails {
                return Err(anyhow!("toggl unavailable"));
            }
            Ok(2)
        }

        async fn team_weekly_report(
            &self,
            team_log_path: &Path,
            _since: NaiveDate,
            _until: NaiveDate,
        ) -> anyhow::Result<()> {
            self.team_calls
                .lock()
                .unwrap()
                .push(team_log_path.to_path_buf());
            if self.team_fails {
                return Err(anyhow!("toggl unavailable"));
            }
            Ok(())
        }
    }

    type TestController =
        MainController<FakeSnapshot, TrendServiceImpl, RecordingChart, FakeTimeReport, JsonTimeseriesRepositoryImpl>;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller(
        data_path: &Path,
        snapshot: Option<BoardSnapshot>,
        time_report: FakeTimeReport,
    ) -> TestController {
        MainController::new(
            FakeSnapshot { snapshot },
            TrendServiceImpl::new(),
            RecordingChart::default(),
            time_report,
            JsonTimeseriesRepositoryImpl::new(data_path.to_path_buf()),
        )
    }

    fn run_options(output_dir: &Path, today: NaiveDate) -> RunOptions {
        RunOptions::new(
            today,
            today - ChronoDuration::days(7),
            today,
            output_dir.to_path_buf(),
            "Burnup Charts".to_string(),
            "team-logs.md".to_string(),
            "Done".to_string(),
            4,
        )
    }

    #[tokio::test]
    async fn two_weekly_runs_produce_a_forecast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data_path: PathBuf = dir.path().join("burnup_data.json");
        let output_dir: PathBuf = dir.path().join("reports");

        let first: TestController = controller(
            &data_path,
            Some(BoardSnapshot::new(2, 10)),
            FakeTimeReport::default(),
        );
        let outcome: RunOutcome = first
            .main_task(&run_options(&output_dir, ymd(2024, 1, 1)))
            .await;

        assert_eq!(
            outcome.burnup_chart,
            Some(output_dir.join("Burnup Charts").join("burnup-2024-01-01.png"))
        );
        {
            let rendered = first.chart_service.rendered.lock().unwrap();
            assert_eq!(rendered.len(), 1);
            assert_eq!(rendered[0].0, 1);
            assert!(matches!(rendered[0].1, TrendOutcome::NoForecast { .. }));
        }

        let second: TestController = controller(
            &data_path,
            Some(BoardSnapshot::new(5, 12)),
            FakeTimeReport::default(),
        );
        let outcome: RunOutcome = second
            .main_task(&run_options(&output_dir, ymd(2024, 1, 8)))
            .await;

        assert!(outcome.burnup_chart.is_some());
        assert!(outcome.personal_reports_ok);
        assert!(outcome.team_report_ok);

        let rendered = second.chart_service.rendered.lock().unwrap();
        let (point_count, trend, render_date, chart_dir) = &rendered[0];
        assert_eq!(*point_count, 2);
        assert_eq!(*render_date, ymd(2024, 1, 8));
        assert_eq!(chart_dir, &output_dir.join("Burnup Charts"));

        let estimate = trend.estimate().expect("forecast with two snapshots");
        assert_eq!(estimate.window.len(), 2);
        assert_eq!(estimate.projected_finish_date, ymd(2024, 1, 24));

        let persisted: String = fs::read_to_string(&data_path).unwrap();
        assert!(persisted.contains("\"2024-01-01\""));
        assert!(persisted.contains("\"2024-01-08\""));
    }

    #[tokio::test]
    async fn same_day_rerun_overwrites_the_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data_path: PathBuf = dir.path().join("burnup_data.json");
        let run: RunOptions = run_options(dir.path(), ymd(2024, 1, 8));

        for done in [3, 4] {
            controller(
                &data_path,
                Some(BoardSnapshot::new(done, 10)),
                FakeTimeReport::default(),
            )
            .main_task(&run)
            .await;
        }

        let series: Timeseries = JsonTimeseriesRepositoryImpl::new(data_path)
            .load()
            .await
            .unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.latest(), Some(Snapshot::new(ymd(2024, 1, 8), 4, 10)));
    }

    #[tokio::test]
    async fn burnup_failure_does_not_stop_time_reports() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data_path: PathBuf = dir.path().join("burnup_data.json");
        let run: RunOptions = run_options(dir.path(), ymd(2024, 1, 8));

        let offline: TestController = controller(&data_path, None, FakeTimeReport::default());
        let outcome: RunOutcome = offline.main_task(&run).await;

        assert_eq!(outcome.burnup_chart, None);
        assert!(outcome.personal_reports_ok);
        assert!(outcome.team_report_ok);
        assert!(offline.chart_service.rendered.lock().unwrap().is_empty());
        assert!(!data_path.exists());
        assert_eq!(
            *offline.time_report_service.team_calls.lock().unwrap(),
            vec![dir.path().join("team-logs.md")]
        );
    }

    #[tokio::test]
    async fn corrupt_store_aborts_the_whole_run() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data_path: PathBuf = dir.path().join("burnup_data.json");
        fs::write(&data_path, "{ not json").unwrap();

        let run: RunOptions = run_options(dir.path(), ymd(2024, 1, 8));
        let corrupt: TestController = controller(
            &data_path,
            Some(BoardSnapshot::new(1, 2)),
            FakeTimeReport::default(),
        );
        let outcome: RunOutcome = corrupt.main_task(&run).await;

        assert!(outcome.aborted);
        assert_eq!(outcome.burnup_chart, None);
        assert!(!outcome.personal_reports_ok);
        assert!(!outcome.team_report_ok);
        assert_eq!(corrupt.time_report_service.personal_calls.lock().unwrap().len(), 0);
        assert_eq!(corrupt.time_report_service.team_calls.lock().unwrap().len(), 0);
        assert_eq!(fs::read_to_string(&data_path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn time_report_failures_are_isolated() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data_path: PathBuf = dir.path().join("burnup_data.json");
        let run: RunOptions = run_options(dir.path(), ymd(2024, 1, 8));

        let failing: TestController = controller(
            &data_path,
            Some(BoardSnapshot::new(1, 2)),
            FakeTimeReport {
                personal_fails: true,
                team_fails: true,
                ..FakeTimeReport::default()
            },
        );
        let outcome: RunOutcome = failing.main_task(&run).await;

        assert!(outcome.burnup_chart.is_some());
        assert!(!outcome.personal_reports_ok);
        assert!(!outcome.team_report_ok);
        assert_eq!(failing.time_report_service.team_calls.lock().unwrap().len(), 1);
    }
}
