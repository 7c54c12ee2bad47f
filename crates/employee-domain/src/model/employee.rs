//! Employee - A single record in the directory
//!
//! Employee is an Entity (has identity).
//! The id is assigned by storage the first time a record is saved and
//! never changes afterwards; updates only replace the name and email fields.

/// Storage-assigned identifier for an Employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// The mutable part of an Employee: everything except the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
}

impl EmployeeDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_id: email_id.into(),
        }
    }
}

/// Employee - The record managed by the directory
///
/// A record without an id is transient: it has not been saved yet.
/// Every record handed out by a repository carries its id.
#[derive(Debug, Clone)]
pub struct Employee {
    /// Entity identity (None until first saved)
    id: Option<EmployeeId>,
    first_name: String,
    last_name: String,
    email_id: String,
}

impl Employee {
    /// Create a transient Employee, ready to be saved
    pub fn new(draft: EmployeeDraft) -> Self {
        Self {
            id: None,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email_id: draft.email_id,
        }
    }

    /// Rebuild a persisted Employee (used by repositories)
    pub fn with_id(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id: Some(id),
            ..Self::new(draft)
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email_id(&self) -> &str {
        &self.email_id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    // ========== Mutations ==========

    /// Overwrite first name, last name and email; the id is untouched.
    pub fn apply(&mut self, draft: EmployeeDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.email_id = draft.email_id;
    }

    /// Assign the storage identity. Only repositories should call this.
    pub fn assign_id(&mut self, id: EmployeeId) {
        self.id = Some(id);
    }

    /// Copy of the mutable fields
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email_id: self.email_id.clone(),
        }
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            // Entity equality: same ID = same entity
            (Some(a), Some(b)) => a == b,
            // Transient records have no identity yet; compare by value
            (None, None) => self.to_draft() == other.to_draft(),
            _ => false,
        }
    }
}

impl Eq for Employee {}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> EmployeeDraft {
        EmployeeDraft::new("John", "Doe", "john.doe@example.com")
    }

    #[test]
    fn test_new_employee_is_transient() {
        let employee = Employee::new(john());

        assert!(!employee.is_persisted());
        assert_eq!(employee.first_name(), "John");
        assert_eq!(employee.last_name(), "Doe");
        assert_eq!(employee.email_id(), "john.doe@example.com");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut employee = Employee::with_id(EmployeeId::new(7), john());

        employee.apply(EmployeeDraft::new("Jane", "Roe", "jane.roe@example.com"));

        assert_eq!(employee.id(), Some(EmployeeId::new(7)));
        assert_eq!(employee.first_name(), "Jane");
        assert_eq!(employee.last_name(), "Roe");
        assert_eq!(employee.email_id(), "jane.roe@example.com");
    }

    #[test]
    fn test_entity_equality() {
        let a = Employee::with_id(EmployeeId::new(1), john());
        let b = Employee::with_id(
            EmployeeId::new(1),
            EmployeeDraft::new("Someone", "Else", "else@example.com"),
        );

        // Same ID = same entity (even if other fields differ)
        assert_eq!(a, b);
        assert_ne!(a, Employee::new(john()));
        assert_eq!(Employee::new(john()), Employee::new(john()));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(EmployeeId::new(42).to_string(), "42");
        assert_eq!(EmployeeId::from(3).value(), 3);
    }
}
