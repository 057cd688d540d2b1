use thiserror::Error;

/// Errors that can occur while fitting the estimator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    // Input validation errors
    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Dimension mismatch: x has {x_len} elements, y has {y_len} elements")]
    DimensionMismatch { x_len: usize, y_len: usize },

    #[error("All rows filtered due to NaN or infinite values")]
    NoValidData,

    #[error("Non-finite value in {field} at index {index}")]
    NonFiniteValue { field: &'static str, index: usize },

    // Numerical errors
    #[error("Design matrix is singular: x values have zero variance")]
    SingularMatrix,
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
