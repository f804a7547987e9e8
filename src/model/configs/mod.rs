pub mod burnup_config;
pub mod system_config;
pub mod toggl_config;
pub mod total_config;
pub mod trello_config;
