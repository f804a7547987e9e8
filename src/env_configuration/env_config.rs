use crate::common::*;

#[doc = r#"
    Reads an environment variable, falling back to `default` when it is not set.

    # Arguments
    * `key` - environment variable name
    * `default` - value used when the variable is absent or not valid unicode
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => default.to_string(),
    }
}

#[doc = r#"
    Path of the TOML file holding the Trello/Toggl credentials and the burnup settings.

    Read from `SERVER_CONFIG_PATH` (after `.env` has been loaded), defaulting to
    `./config/server_config.toml`. Initialized on first access.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("SERVER_CONFIG_PATH", "./config/server_config.toml"));

#[doc = "Directory receiving the rotated log files (`LOG_DIR`, default `./logs`)."]
pub static LOG_DIR_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("LOG_DIR", "./logs"));
