use crate::common::*;

#[doc = r#"
    Failure kinds the orchestrator needs to tell apart.

    Services still return `anyhow::Result`; these variants are raised at the points
    where the burnup pipeline has a defined policy (corrupt store, insufficient data,
    unusable projection) and can be recovered with `downcast_ref` by callers and tests.
"#]
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("burnup store at {path:?} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("burnup data has length {actual}. Expected length of at least {required}.")]
    InsufficientData { required: usize, actual: usize },

    #[error("external service error: {0}")]
    ExternalService(String),

    #[error("projected finish date is not representable: {0} days since epoch")]
    Projection(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
