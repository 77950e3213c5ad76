//! Error type for the I/O surrounding the calculator
//!
//! The calculation itself never fails: invalid input simply produces no
//! result. Only loading configuration/scenarios and writing exports can error.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalculatorError>;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown deal parameter: {0}")]
    UnknownParameter(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },
}
