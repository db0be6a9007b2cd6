//! Error types for GridScout.

use thiserror::Error;

/// GridScout error type.
///
/// The exploration core itself never fails: unreachable goals and
/// exhausted frontiers terminate the run through the stop signal. Errors
/// only arise from configuration and I/O before a run starts.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ScoutError {
    fn from(e: toml::de::Error) -> Self {
        ScoutError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
