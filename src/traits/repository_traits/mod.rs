pub mod board_repository;
pub mod time_tracking_repository;
pub mod timeseries_repository;
