/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Weekly scrum reports. Records the Trello burnup counts, draws the burnup chart
              with its estimated finish date, downloads the Toggl reports of every member
              and appends the team summary to the team log.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod errors;

mod env_configuration;
use env_configuration::{cli_args::*, env_config::*};

mod model;
use model::configs::total_config::*;

mod dto;
use dto::{run_options::*, run_outcome::*};

mod enums;

mod traits;

mod repository;
use repository::{
    timeseries_repository_impl::*, toggl_repository_impl::*, trello_repository_impl::*,
};

mod service;
use service::{
    chart_service_impl::*, snapshot_service_impl::*, time_report_service_impl::*,
    trend_service_impl::*,
};

mod controller;
use controller::main_controller::*;

mod utils_modules;
use utils_modules::{logger_utils::*, time_utils::*};

#[tokio::main]
async fn main() {
    let args: CliArgs = CliArgs::parse();

    /* Logger setup; the handle has to live until the end of the run */
    dotenv().ok();
    let _logger: LoggerHandle = init_logger(Path::new(LOG_DIR_PATH.as_str())).unwrap_or_else(|e| {
        eprintln!("[main] Failed to initialize the logger: {:?}", e);
        std::process::exit(1)
    });

    info!("Scrum report automation start!");

    let total_config: TotalConfig = TotalConfig::load(Path::new(SERVER_CONFIG_PATH.as_str()))
        .unwrap_or_else(|e| {
            error!("[main] {:?}", e);
            std::process::exit(1)
        });

    let client: Client = Client::builder()
        .timeout(Duration::from_secs(*total_config.system().http_timeout_secs()))
        .build()
        .unwrap_or_else(|e| {
            error!("[main] An issue occurred while building the HTTP client. {:?}", e);
            std::process::exit(1)
        });

    /* Dependency injection */
    let trello_repository: TrelloRepositoryImpl =
        TrelloRepositoryImpl::new(client.clone(), total_config.trello().clone());
    let toggl_repository: TogglRepositoryImpl =
        TogglRepositoryImpl::new(client, total_config.toggl().clone());
    let timeseries_repository: JsonTimeseriesRepositoryImpl =
        JsonTimeseriesRepositoryImpl::new(total_config.burnup().data_path().clone());

    let snapshot_service: SnapshotServiceImpl<TrelloRepositoryImpl> =
        SnapshotServiceImpl::new(trello_repository);
    let trend_service: TrendServiceImpl = TrendServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();
    let time_report_service: TimeReportServiceImpl<TogglRepositoryImpl> =
        TimeReportServiceImpl::new(toggl_repository, total_config.toggl().users().clone());

    let main_controller: MainController<
        SnapshotServiceImpl<TrelloRepositoryImpl>,
        TrendServiceImpl,
        ChartServiceImpl,
        TimeReportServiceImpl<TogglRepositoryImpl>,
        JsonTimeseriesRepositoryImpl,
    > = MainController::new(
        snapshot_service,
        trend_service,
        chart_service,
        time_report_service,
        timeseries_repository,
    );

    let today: NaiveDate = get_today_local();
    let (since, until) = args.date_range(today);

    let run_options: RunOptions = RunOptions::new(
        today,
        since,
        until,
        args.path,
        total_config.burnup().chart_dir_name().clone(),
        total_config.system().team_log_file_name().clone(),
        args.board,
        usize::from(args.regression),
    );

    let outcome: RunOutcome = main_controller.main_task(&run_options).await;

    if outcome.aborted {
        error!("[main] The run was aborted by a configuration error");
        std::process::exit(1);
    }

    if outcome.burnup_chart.is_none() || !outcome.personal_reports_ok || !outcome.team_report_ok {
        warn!("Finished with errors, see the log above for details");
    } else {
        info!("All reports generated");
    }
}
