//! Employee Repository - Abstract persistence for Employees
//!
//! This trait defines what operations the directory needs.
//! How they're implemented (memory, file, database) is not our concern here.

use core::future::Future;

use crate::model::employee::{Employee, EmployeeId};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record that had to exist was missing
    NotFound { id: i64 },
    /// The backing store failed to read or write
    PersistenceError { message: String },
}

impl RepositoryError {
    pub fn persistence(message: impl Into<String>) -> Self {
        RepositoryError::PersistenceError {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Employee not found: {}", id)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Employee Repository Trait
///
/// This is a PORT in hexagonal architecture. Implementations must be
/// safe to share between request tasks; any per-record atomicity is
/// theirs to provide.
pub trait EmployeeRepository: Send + Sync {
    /// All records, ordered by id
    fn find_all(&self) -> impl Future<Output = Result<Vec<Employee>, RepositoryError>> + Send;

    /// Find a record by id
    fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, RepositoryError>> + Send;

    /// Insert or replace a record.
    ///
    /// A transient record (no id) is assigned a fresh id. The returned
    /// record is always persisted.
    fn save(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, RepositoryError>> + Send;

    /// Remove a record. Removing a missing id is not an error.
    fn delete_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RepositoryError::NotFound { id: 5 }.to_string(),
            "Employee not found: 5"
        );
        assert_eq!(
            RepositoryError::persistence("disk full").to_string(),
            "Persistence error: disk full"
        );
    }
}
