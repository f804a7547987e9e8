use crate::common::*;

use crate::model::configs::{
    burnup_config::*, system_config::*, toggl_config::*, trello_config::*,
};

use crate::errors::report_error::*;

use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub trello: TrelloConfig,
    pub toggl: TogglConfig,
    #[serde(default)]
    pub burnup: BurnupConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl TotalConfig {
    #[doc = r#"
        Loads the whole configuration from a TOML file.

        A missing or malformed file is a configuration error: the run cannot proceed
        without credentials, so the caller is expected to abort.
    "#]
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        info!("Loading configuration from {:?}", config_path);

        read_toml_from_file::<TotalConfig>(config_path).map_err(|e| {
            let err_msg: String = format!(
                "Failed to convert {:?} into the TotalConfig structure. Please make sure to copy the example and fill it out: {:#}",
                config_path, e
            );
            anyhow!(ReportError::Config(err_msg))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_applies_section_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path: PathBuf = dir.path().join("server_config.toml");
        fs::write(
            &path,
            r#"
[trello]
board_id = "board"
app_key = "key"
bot_token = "token"

[toggl]
api_key = "toggl-key"
workspace = "123"

[toggl.users]
"1001" = "Ada Lovelace"
"1002" = "Alan Turing"
"#,
        )
        .unwrap();

        let config: TotalConfig = TotalConfig::load(&path).unwrap();

        assert_eq!(config.trello().base_url(), "https://api.trello.com");
        assert_eq!(config.toggl().users().len(), 2);
        assert_eq!(config.toggl().users()["1001"], "Ada Lovelace");
        assert_eq!(config.burnup().data_path(), &PathBuf::from("./burnup_data.json"));
        assert_eq!(config.burnup().chart_dir_name(), "Burnup Charts");
        assert_eq!(*config.system().http_timeout_secs(), 30);
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err: anyhow::Error = TotalConfig::load(&dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::Config(_))
        ));
    }
}
