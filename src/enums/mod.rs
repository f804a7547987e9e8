pub mod toggl_report_kind;
pub mod trend_outcome;
