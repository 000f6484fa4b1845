//! Error handling module for the directory
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The engine, the form and the terminal loop report through
//! [`DirectoryError`]; seed files are loaded with `anyhow` context instead.

use crate::employee::EmployeeId;
use crate::form::FormTransitionError;
use thiserror::Error;

/// Main error type for the directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// IO errors (terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (missing required form fields)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Two employees share the same id
    #[error("Duplicate employee id {0}")]
    DuplicateId(EmployeeId),

    /// Illegal add/edit form transition
    #[error("Form error: {0}")]
    Form(#[from] FormTransitionError),

    /// No further ids can be assigned
    #[error("Employee id space exhausted (highest id is {0})")]
    IdExhausted(EmployeeId),
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;

impl DirectoryError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
