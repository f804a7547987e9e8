use crate::common::*;

use crate::model::burnup::timeseries::*;

#[async_trait]
pub trait TimeseriesRepository: Send + Sync {
    #[doc = "Reads the persisted series; a store that does not exist yet loads as empty"]
    async fn load(&self) -> anyhow::Result<Timeseries>;

    #[doc = r#"
        Inserts or replaces the snapshot for `date` and persists the whole series
        atomically. Returns the series as written.
    "#]
    async fn upsert(&self, date: NaiveDate, done: u64, scope: u64) -> anyhow::Result<Timeseries>;
}
