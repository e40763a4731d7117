pub mod app_config;
pub mod config;
pub mod query;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use query::QueryParams;
pub use types::{BoundingBox, Candidate, Coordinate, FireballRecord, DEFAULT_BUFFER_DEGREES};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid coordinate \"{input}\": {reason}")]
    InvalidCoordinate { input: String, reason: String },
}
