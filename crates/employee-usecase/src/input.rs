//! Inbound payload for create and update

use employee_domain::EmployeeDraft;

use crate::error::{EmployeeError, Result};

/// Employee fields as received from a client.
///
/// Any field may be absent; [`EmployeeInput::validate`] decides whether the
/// payload is usable. Presence is the only rule: empty strings pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_id: Option<String>,
}

impl EmployeeInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email_id: Some(email_id.into()),
        }
    }

    /// Check field presence and produce a draft.
    ///
    /// Fields are checked in wire order, so the error names the first one
    /// missing.
    pub fn validate(self) -> Result<EmployeeDraft> {
        let first_name = self
            .first_name
            .ok_or(EmployeeError::MissingField("firstName"))?;
        let last_name = self
            .last_name
            .ok_or(EmployeeError::MissingField("lastName"))?;
        let email_id = self
            .email_id
            .ok_or(EmployeeError::MissingField("emailId"))?;

        Ok(EmployeeDraft {
            first_name,
            last_name,
            email_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_input() {
        let draft = EmployeeInput::new("John", "Doe", "john.doe@example.com")
            .validate()
            .unwrap();

        assert_eq!(draft, EmployeeDraft::new("John", "Doe", "john.doe@example.com"));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(
            EmployeeInput::default().validate(),
            Err(EmployeeError::MissingField("firstName"))
        );

        let input = EmployeeInput {
            first_name: Some("John".into()),
            last_name: None,
            email_id: None,
        };
        assert_eq!(input.validate(), Err(EmployeeError::MissingField("lastName")));

        let input = EmployeeInput {
            email_id: None,
            ..EmployeeInput::new("John", "Doe", "x")
        };
        assert_eq!(input.validate(), Err(EmployeeError::MissingField("emailId")));
    }

    #[test]
    fn test_empty_strings_are_present() {
        assert!(EmployeeInput::new("", "", "").validate().is_ok());
    }
}
