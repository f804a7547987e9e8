pub mod summary_report;
