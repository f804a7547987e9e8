use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_team_log_file_name")]
    pub team_log_file_name: String,
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_team_log_file_name() -> String {
    String::from("team-logs.md")
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout_secs(),
            team_log_file_name: default_team_log_file_name(),
        }
    }
}
