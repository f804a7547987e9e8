pub use std::{
    collections::{BTreeMap, HashSet},
    env,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

pub use tokio::time::Duration;

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{CopyGetters, Getters};
pub use log::{debug, error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::{Value, json};
