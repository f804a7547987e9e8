use crate::common::*;

#[doc = "A board list as returned by `GET /1/boards/{id}/lists?cards=all`"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TrelloList {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Value>,
}
