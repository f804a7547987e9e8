pub mod timeseries_repository_impl;
pub mod toggl_repository_impl;
pub mod trello_repository_impl;
