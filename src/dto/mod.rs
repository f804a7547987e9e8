pub mod board_snapshot;
pub mod burnup_record;
pub mod report_query;
pub mod run_options;
pub mod run_outcome;
pub mod team_report_section;
pub mod toggl;
pub mod trello;
pub mod trend_estimate;
