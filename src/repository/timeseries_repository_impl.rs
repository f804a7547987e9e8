use crate::common::*;

use crate::errors::report_error::*;

use crate::model::burnup::timeseries::*;

use crate::traits::repository_traits::timeseries_repository::*;

use crate::utils_modules::io_utils::*;

#[doc = r#"
    Burnup series persisted as one JSON document (`{"YYYY-MM-DD": {"cards_done", "cards_total"}}`).

    The document is read whole and rewritten whole on every upsert. No locking is done:
    two processes writing the same file race with last-writer-wins semantics.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct JsonTimeseriesRepositoryImpl {
    data_path: PathBuf,
}

#[async_trait]
impl TimeseriesRepository for JsonTimeseriesRepositoryImpl {
    async fn load(&self) -> anyhow::Result<Timeseries> {
        if !tokio::fs::try_exists(&self.data_path).await? {
            info!(
                "No burnup data at {:?} yet, starting from an empty series",
                self.data_path
            );
            return Ok(Timeseries::new());
        }

        let content: String = tokio::fs::read_to_string(&self.data_path)
            .await
            .with_context(|| {
                format!(
                    "[JsonTimeseriesRepositoryImpl->load] cannot read {:?}",
                    self.data_path
                )
            })?;

        let series: Timeseries =
            serde_json::from_str(&content).map_err(|source| ReportError::CorruptStore {
                path: self.data_path.clone(),
                source,
            })?;

        Ok(series)
    }

    async fn upsert(&self, date: NaiveDate, done: u64, scope: u64) -> anyhow::Result<Timeseries> {
        let mut series: Timeseries = self.load().await?;
        series.upsert(date, done, scope);

        /* the atomic write syncs to disk, keep it off the async workers */
        let data_path: PathBuf = self.data_path.clone();
        let document: Timeseries = series.clone();

        tokio::task::spawn_blocking(move || write_json_atomic(&data_path, &document))
            .await
            .context("[JsonTimeseriesRepositoryImpl->upsert] blocking write task failed")?
            .context("[JsonTimeseriesRepositoryImpl->upsert] failed to persist burnup data")?;

        Ok(series)
    }
}
