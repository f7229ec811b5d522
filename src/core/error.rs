//! Error types for capalloc.

use thiserror::Error;

/// Result type alias for capalloc operations.
pub type Result<T> = std::result::Result<T, AllocError>;

/// Error types for the allocation solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocError {
    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// An item failed validation.
    #[error("Invalid item at index {index}: {message}")]
    InvalidItem { index: usize, message: String },

    /// DP table would exceed the cell ceiling.
    #[error("DP table of {cells} cells exceeds the limit of {limit}")]
    TableTooLarge { cells: u128, limit: u128 },

    /// Computation was cancelled through an external flag.
    #[error("Computation cancelled during {context}")]
    Cancelled { context: String },
}

impl AllocError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an invalid item error.
    pub fn invalid_item(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidItem {
            index,
            message: message.into(),
        }
    }

    /// Create a table size error.
    pub fn table_too_large(cells: u128, limit: u128) -> Self {
        Self::TableTooLarge { cells, limit }
    }

    /// Create a cancellation error.
    pub fn cancelled(context: impl Into<String>) -> Self {
        Self::Cancelled {
            context: context.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<AllocError> for pyo3::PyErr {
    fn from(err: AllocError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
