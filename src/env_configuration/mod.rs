pub mod cli_args;
pub mod env_config;
