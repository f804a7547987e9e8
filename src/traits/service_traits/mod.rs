pub mod chart_service;
pub mod snapshot_service;
pub mod time_report_service;
pub mod trend_service;
