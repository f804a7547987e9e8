use crate::common::*;

#[doc = r#"
    Toggl reports API settings.

    `users` maps a Toggl user id to the display name used for that user's report folder.
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct TogglConfig {
    pub api_key: String,
    pub workspace: String,
    #[serde(default)]
    pub users: BTreeMap<String, String>,
    #[serde(default = "default_toggl_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_toggl_base_url")]
    pub base_url: String,
}

fn default_toggl_user_agent() -> String {
    String::from("scrum_report_automation")
}

fn default_toggl_base_url() -> String {
    String::from("https://api.track.toggl.com")
}
