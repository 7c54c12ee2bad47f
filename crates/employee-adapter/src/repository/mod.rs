//! Persistence Adapters - Repository implementations
//!
//! These implement `EmployeeRepository` from employee-domain.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryEmployeeRepository;
pub use json_file::JsonFileEmployeeRepository;

use employee_domain::{EmployeeId, RepositoryError};

/// Next free id once `id` is taken: the larger of `next_id` and `id + 1`.
///
/// Every stored id stays below the sequence, so an id of `i64::MAX`
/// can never be stored.
pub(crate) fn advance_sequence(next_id: i64, id: EmployeeId) -> Result<i64, RepositoryError> {
    let after = id
        .value()
        .checked_add(1)
        .ok_or_else(|| RepositoryError::persistence("employee id sequence exhausted"))?;
    Ok(next_id.max(after))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_sequence() {
        assert_eq!(advance_sequence(1, EmployeeId::new(1)), Ok(2));
        assert_eq!(advance_sequence(10, EmployeeId::new(3)), Ok(10));
        assert_eq!(
            advance_sequence(i64::MAX, EmployeeId::new(i64::MAX)),
            Err(RepositoryError::persistence("employee id sequence exhausted"))
        );
    }
}
