use sp_core::{ConfigError, DataError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DurationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("duration sample parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DurationResult<T> = Result<T, DurationError>;
