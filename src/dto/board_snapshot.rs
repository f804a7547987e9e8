use crate::common::*;

#[doc = "Counts fetched from the project board for the current run"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters, new)]
#[getset(get_copy = "pub")]
pub struct BoardSnapshot {
    pub done: u64,
    pub scope: u64,
}
