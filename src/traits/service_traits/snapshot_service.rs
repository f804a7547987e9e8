use crate::common::*;

use crate::dto::board_snapshot::*;

#[async_trait]
pub trait SnapshotService: Send + Sync {
    #[doc = "Current done/scope counts of the board, `done` taken from the list named `done_list_name`"]
    async fn fetch_snapshot(&self, done_list_name: &str) -> anyhow::Result<BoardSnapshot>;
}
