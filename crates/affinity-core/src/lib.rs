pub mod app_config;
pub mod category;
pub mod config;
pub mod languages;
pub mod record;

pub use app_config::{AppConfig, PipelineMode};
pub use category::{categorize, Category};
pub use config::{load_app_config, load_app_config_from_env};
pub use languages::{country_of_location, language_for_country, DEFAULT_LANGUAGE};
pub use record::{BusinessRecord, Column, OverrideError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
