use crate::common::*;

#[doc = "Persisted counts for one date in the burnup document"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, CopyGetters, new)]
#[getset(get_copy = "pub")]
pub struct BurnupRecord {
    pub cards_done: u64,
    pub cards_total: u64,
}
