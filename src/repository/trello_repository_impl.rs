use crate::common::*;

use crate::errors::report_error::*;

use crate::model::configs::trello_config::*;

use crate::dto::trello::trello_list::*;

use crate::traits::repository_traits::board_repository::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct TrelloRepositoryImpl {
    client: Client,
    trello_config: TrelloConfig,
}

impl TrelloRepositoryImpl {
    #[doc = "`{base_url}/1/boards/{board_id}/{resource}`"]
    fn board_url(&self, resource: &str) -> String {
        format!(
            "{}/1/boards/{}/{}",
            self.trello_config.base_url.trim_end_matches('/'),
            encode(&self.trello_config.board_id),
            resource
        )
    }

    #[doc = "Common logic: authenticated GET, status check and JSON decoding"]
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        extra_query: &[(&str, &str)],
    ) -> anyhow::Result<T> {
        let response: Response = self
            .client
            .get(url)
            .query(extra_query)
            .query(&[
                ("key", self.trello_config.app_key.as_str()),
                ("token", self.trello_config.bot_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                ReportError::ExternalService(format!(
                    "[TrelloRepositoryImpl->get_json] request to {} failed: {}",
                    url, e
                ))
            })?;

        let status: StatusCode = response.status();

        if !status.is_success() {
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(anyhow!(ReportError::ExternalService(format!(
                "[TrelloRepositoryImpl->get_json] {} responded {}: {}",
                url, status, error_body
            ))));
        }

        response.json::<T>().await.map_err(|e| {
            anyhow!(ReportError::ExternalService(format!(
                "[TrelloRepositoryImpl->get_json] malformed response from {}: {}",
                url, e
            )))
        })
    }
}

#[async_trait]
impl BoardRepository for TrelloRepositoryImpl {
    async fn count_cards_in_list(&self, list_name: &str) -> anyhow::Result<u64> {
        let url: String = self.board_url("lists");
        let lists: Vec<TrelloList> = self.get_json(&url, &[("cards", "all")]).await?;

        /* with duplicate names the last list wins */
        let done_list: &TrelloList = lists
            .iter()
            .rev()
            .find(|list| list.name == list_name)
            .ok_or_else(|| {
                ReportError::ExternalService(format!(
                    "[TrelloRepositoryImpl->count_cards_in_list] no list named '{}' on board {}",
                    list_name, self.trello_config.board_id
                ))
            })?;

        Ok(done_list.cards.len() as u64)
    }

    async fn count_board_cards(&self) -> anyhow::Result<u64> {
        let url: String = self.board_url("cards");
        let cards: Vec<Value> = self.get_json(&url, &[]).await?;

        Ok(cards.len() as u64)
    }
}
