//! Configuration module for breakdown
//!
//! Configuration hierarchy (highest priority first):
//! 1. Environment variables (BREAKDOWN_*)
//! 2. Profile user config (`user.yml` / `<profile>-user.yml`)
//! 3. Profile app config (`app.yml` / `<profile>-app.yml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    app_config_file_name, default_config_dir, load_profile, load_with_warnings,
    user_config_file_name, with_env_overrides, ConfigError, ConfigWarning, LoadedConfig,
    CONFIG_SUBDIR, ENV_PROMPT_BASE_DIR, ENV_SCHEMA_BASE_DIR,
};
pub use types::{
    BaseDirConfig, Config, ParamsConfig, PatternConfig, TwoParamsConfig, DEFAULT_PROMPT_BASE_DIR,
    DEFAULT_RESOURCE_DIR, DEFAULT_SCHEMA_BASE_DIR, DEFAULT_WORKING_DIR,
};
