use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("brand name must not be empty")]
    EmptyBrandName,
    #[error("product type must not be empty")]
    EmptyProductType,
    #[error("top_n must be a positive integer")]
    ZeroTopN,
    #[error("score weights must be non-negative and sum to 1.0 (sum is {total})")]
    InvalidWeights { total: f64 },
    #[error("unknown output form '{0}' (expected text, json or records)")]
    UnknownOutputForm(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
