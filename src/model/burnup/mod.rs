pub mod linear_fit;
pub mod snapshot;
pub mod timeseries;
