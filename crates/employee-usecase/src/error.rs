//! Error types for the employee use cases

use employee_domain::{EmployeeId, RepositoryError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmployeeError {
    /// No record exists for the requested id
    #[error("Employee not exist with id: {id}")]
    NotFound { id: EmployeeId },

    /// Payload lacks a required field
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl EmployeeError {
    pub fn not_found(id: EmployeeId) -> Self {
        EmployeeError::NotFound { id }
    }
}

pub type Result<T> = std::result::Result<T, EmployeeError>;
