use crate::common::*;

use crate::model::burnup::snapshot::*;

use crate::dto::burnup_record::*;

#[doc = r#"
    Date-ordered collection of daily snapshots.

    Serialized as a JSON object keyed by `YYYY-MM-DD`, so the on-disk document keeps
    its keys sorted. Inserting an existing date replaces that day's counts.
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeseries {
    entries: BTreeMap<NaiveDate, BurnupRecord>,
}

impl Timeseries {
    pub fn new() -> Self {
        Self::default()
    }

    #[doc = "Inserts or replaces the snapshot for `date`"]
    pub fn upsert(&mut self, date: NaiveDate, done: u64, scope: u64) {
        self.entries.insert(date, BurnupRecord::new(done, scope));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[doc = "Snapshots sorted by date"]
    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.entries
            .iter()
            .map(|(date, record)| Snapshot::new(*date, record.cards_done, record.cards_total))
            .collect()
    }

    pub fn latest(&self) -> Option<Snapshot> {
        self.entries
            .iter()
            .next_back()
            .map(|(date, record)| Snapshot::new(*date, record.cards_done, record.cards_total))
    }
}
