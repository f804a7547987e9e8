use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct TrelloConfig {
    pub board_id: String,
    pub app_key: String,
    pub bot_token: String,
    #[serde(default = "default_trello_base_url")]
    pub base_url: String,
}

fn default_trello_base_url() -> String {
    String::from("https://api.trello.com")
}
