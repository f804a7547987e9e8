pub mod burnup;
pub mod configs;
