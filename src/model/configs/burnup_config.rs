use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct BurnupConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default = "default_chart_dir_name")]
    pub chart_dir_name: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./burnup_data.json")
}

fn default_chart_dir_name() -> String {
    String::from("Burnup Charts")
}

impl Default for BurnupConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            chart_dir_name: default_chart_dir_name(),
        }
    }
}
