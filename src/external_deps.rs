pub use chrono::{Duration as ChronoDuration, Local, NaiveDate};
pub use clap::Parser;
pub use flexi_logger::{
    Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming, Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{Client, Response, StatusCode};
pub use urlencoding::encode;
