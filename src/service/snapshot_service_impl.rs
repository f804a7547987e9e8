use crate::common::*;

use crate::dto::board_snapshot::*;

use crate::traits::repository_traits::board_repository::*;
use crate::traits::service_traits::snapshot_service::*;

#[derive(Debug, new)]
pub struct SnapshotServiceImpl<B: BoardRepository> {
    board_repository: B,
}

#[async_trait]
impl<B> SnapshotService for SnapshotServiceImpl<B>
where
    B: BoardRepository,
{
    #[doc = "Reads the done list and the whole board once each"]
    async fn fetch_snapshot(&self, done_list_name: &str) -> anyhow::Result<BoardSnapshot> {
        info!("Getting tasks done/scope");

        let done: u64 = self
            .board_repository
            .count_cards_in_list(done_list_name)
            .await
            .context("[SnapshotServiceImpl->fetch_snapshot] failed to count done cards")?;

        let scope: u64 = self
            .board_repository
            .count_board_cards()
            .await
            .context("[SnapshotServiceImpl->fetch_snapshot] failed to count board cards")?;

        if done > scope {
            warn!(
                "Done count ({}) exceeds board total ({}); storing the counts as fetched",
                done, scope
            );
        }

        Ok(BoardSnapshot::new(done, scope))
    }
}
