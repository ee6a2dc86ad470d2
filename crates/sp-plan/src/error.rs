use sp_catalog::CatalogError;
use sp_core::{ConfigError, DataError};
use sp_coverage::CoverageError;
use sp_duration::DurationError;
use sp_output::OutputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("input data error: {0}")]
    Data(#[from] DataError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error(transparent)]
    Coverage(#[from] CoverageError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("no duration samples or duration model supplied")]
    MissingDurationModel,

    #[error("{got} call volumes supplied for {expected} periods")]
    VolumeCountMismatch { expected: usize, got: usize },
}

pub type PlanResult<T> = Result<T, PlanError>;
