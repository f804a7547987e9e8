use crate::common::*;

#[async_trait]
pub trait BoardRepository: Send + Sync {
    #[doc = "Number of cards in the list named `list_name`; a missing list is an error"]
    async fn count_cards_in_list(&self, list_name: &str) -> anyhow::Result<u64>;

    #[doc = "Number of cards on the whole board"]
    async fn count_board_cards(&self) -> anyhow::Result<u64>;
}
