//! In-Memory Repository Implementation
//!
//! Records live in a `BTreeMap` so listing comes back ordered by id.
//! Useful for testing and development.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use employee_domain::{Employee, EmployeeId, EmployeeRepository, RepositoryError};

use super::advance_sequence;

#[derive(Debug)]
struct Store {
    employees: BTreeMap<i64, Employee>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            employees: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory Employee Repository
///
/// Thread-safe implementation using RwLock. Records and the id sequence
/// share one lock, so id assignment is atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, RepositoryError> {
        self.store
            .read()
            .map_err(|_| RepositoryError::persistence("Failed to acquire read lock"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, RepositoryError> {
        self.store
            .write()
            .map_err(|_| RepositoryError::persistence("Failed to acquire write lock"))
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.read()?.employees.get(&id.value()).cloned())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        let mut store = self.write()?;

        let id = match employee.id() {
            Some(id) => id,
            None => EmployeeId::new(store.next_id),
        };
        store.next_id = advance_sequence(store.next_id, id)?;

        employee.assign_id(id);
        store.employees.insert(id.value(), employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        self.write()?.employees.remove(&id.value());
        Ok(())
    }
}
