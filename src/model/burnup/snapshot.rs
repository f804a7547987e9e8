use crate::common::*;

#[doc = "One day's recorded (done, scope) task counts"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters, new)]
#[getset(get_copy = "pub")]
pub struct Snapshot {
    pub date: NaiveDate,
    pub done: u64,
    pub scope: u64,
}
