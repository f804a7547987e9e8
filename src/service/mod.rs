pub mod chart_service_impl;
pub mod snapshot_service_impl;
pub mod time_report_service_impl;
pub mod trend_service_impl;
