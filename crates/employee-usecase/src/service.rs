//! EmployeeService - The five directory operations
//!
//! Each operation is a stateless mapping from input to repository calls.
//! The only failure modeled here is a missing record; storage faults pass
//! through untouched as [`EmployeeError::Repository`].

use employee_domain::{Employee, EmployeeId, EmployeeRepository};
use tracing::{debug, info, warn};

use crate::error::{EmployeeError, Result};
use crate::input::EmployeeInput;

/// Directory operations over any [`EmployeeRepository`]
#[derive(Debug, Clone)]
pub struct EmployeeService<R> {
    repository: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// All employees, ordered by id. Empty storage yields an empty list.
    pub async fn list(&self) -> Result<Vec<Employee>> {
        let employees = self.repository.find_all().await?;
        debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    /// Store a new employee. Any id on the input is ignored; storage
    /// assigns one.
    pub async fn create(&self, input: EmployeeInput) -> Result<Employee> {
        let draft = input.validate()?;
        let saved = self.repository.save(Employee::new(draft)).await?;
        info!(id = ?saved.id(), "Created employee");
        Ok(saved)
    }

    pub async fn get(&self, id: EmployeeId) -> Result<Employee> {
        match self.repository.find_by_id(id).await? {
            Some(employee) => {
                debug!(%id, "Found employee");
                Ok(employee)
            }
            None => {
                warn!(%id, "Employee not found");
                Err(EmployeeError::not_found(id))
            }
        }
    }

    /// Replace first name, last name and email of an existing employee.
    ///
    /// Existence is checked before the payload, so a missing id reports
    /// not-found even for an empty payload.
    pub async fn update(&self, id: EmployeeId, input: EmployeeInput) -> Result<Employee> {
        let mut employee = self.get(id).await?;
        employee.apply(input.validate()?);

        let saved = self.repository.save(employee).await?;
        info!(%id, "Updated employee");
        Ok(saved)
    }

    pub async fn delete(&self, id: EmployeeId) -> Result<()> {
        self.get(id).await?;
        self.repository.delete_by_id(id).await?;
        info!(%id, "Deleted employee");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_domain::{EmployeeDraft, RepositoryError};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory implementation for testing
    #[derive(Default)]
    struct InMemoryEmployeeRepo {
        employees: Mutex<BTreeMap<i64, Employee>>,
    }

    impl EmployeeRepository for InMemoryEmployeeRepo {
        async fn find_all(&self) -> std::result::Result<Vec<Employee>, RepositoryError> {
            Ok(self.employees.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(
            &self,
            id: EmployeeId,
        ) -> std::result::Result<Option<Employee>, RepositoryError> {
            Ok(self.employees.lock().unwrap().get(&id.value()).cloned())
        }

        async fn save(&self, mut employee: Employee) -> std::result::Result<Employee, RepositoryError> {
            let mut employees = self.employees.lock().unwrap();
            let id = match employee.id() {
                Some(id) => id,
                None => {
                    let next = employees.keys().next_back().copied().unwrap_or(0) + 1;
                    EmployeeId::new(next)
                }
            };
            employee.assign_id(id);
            employees.insert(id.value(), employee.clone());
            Ok(employee)
        }

        async fn delete_by_id(&self, id: EmployeeId) -> std::result::Result<(), RepositoryError> {
            self.employees.lock().unwrap().remove(&id.value());
            Ok(())
        }
    }

    /// Repository whose every call fails
    struct BrokenRepo;

    impl EmployeeRepository for BrokenRepo {
        async fn find_all(&self) -> std::result::Result<Vec<Employee>, RepositoryError> {
            Err(RepositoryError::persistence("offline"))
        }

        async fn find_by_id(
            &self,
            _id: EmployeeId,
        ) -> std::result::Result<Option<Employee>, RepositoryError> {
            Err(RepositoryError::persistence("offline"))
        }

        async fn save(&self, _employee: Employee) -> std::result::Result<Employee, RepositoryError> {
            Err(RepositoryError::persistence("offline"))
        }

        async fn delete_by_id(&self, _id: EmployeeId) -> std::result::Result<(), RepositoryError> {
            Err(RepositoryError::persistence("offline"))
        }
    }

    fn service() -> EmployeeService<InMemoryEmployeeRepo> {
        EmployeeService::new(InMemoryEmployeeRepo::default())
    }

    fn john() -> EmployeeInput {
        EmployeeInput::new("John", "Doe", "john.doe@example.com")
    }

    #[tokio::test]
    async fn test_list_empty() {
        assert!(service().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();

        let created = service.create(john()).await.unwrap();
        assert_eq!(created.id(), Some(EmployeeId::new(1)));

        let found = service.get(EmployeeId::new(1)).await.unwrap();
        assert_eq!(found.first_name(), "John");
        assert_eq!(found.last_name(), "Doe");
        assert_eq!(found.email_id(), "john.doe@example.com");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_field() {
        let service = service();
        let input = EmployeeInput {
            last_name: None,
            ..john()
        };

        assert_eq!(
            service.create(input).await,
            Err(EmployeeError::MissingField("lastName"))
        );
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing() {
        assert_eq!(
            service().get(EmployeeId::new(9)).await,
            Err(EmployeeError::not_found(EmployeeId::new(9)))
        );
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let service = service();
        let created = service.create(john()).await.unwrap();
        let id = created.id().unwrap();

        let updated = service
            .update(
                id,
                EmployeeInput::new("UpdatedFirstName", "UpdatedLastName", "updated.email@example.com"),
            )
            .await
            .unwrap();

        assert_eq!(updated.id(), Some(id));
        assert_eq!(
            service.get(id).await.unwrap().to_draft(),
            EmployeeDraft::new("UpdatedFirstName", "UpdatedLastName", "updated.email@example.com")
        );
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_checks_existence_first() {
        // Empty payload on a missing id is still not-found
        assert_eq!(
            service()
                .update(EmployeeId::new(1), EmployeeInput::default())
                .await,
            Err(EmployeeError::not_found(EmployeeId::new(1)))
        );
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = service();
        let id = service.create(john()).await.unwrap().id().unwrap();

        service.delete(id).await.unwrap();

        assert_eq!(service.get(id).await, Err(EmployeeError::not_found(id)));
        assert_eq!(service.delete(id).await, Err(EmployeeError::not_found(id)));
    }

    #[tokio::test]
    async fn test_storage_errors_pass_through() {
        let service = EmployeeService::new(BrokenRepo);

        assert!(matches!(
            service.list().await,
            Err(EmployeeError::Repository(RepositoryError::PersistenceError { .. }))
        ));
        assert!(matches!(
            service.get(EmployeeId::new(1)).await,
            Err(EmployeeError::Repository(_))
        ));
    }
}
