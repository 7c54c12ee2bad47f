//! Wire format for employee requests and responses

use employee_domain::Employee;
use employee_usecase::EmployeeInput;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Employee as it appears on the wire
///
/// ```json
/// {"id": 1, "firstName": "John", "lastName": "Doe", "emailId": "john.doe@example.com"}
/// ```
///
/// Every field is optional when decoding; presence is checked by the use
/// case so that an update against a missing id can report not-found first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBody {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
}

impl From<&Employee> for EmployeeBody {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id().map(|id| id.value()),
            first_name: Some(employee.first_name().to_string()),
            last_name: Some(employee.last_name().to_string()),
            email_id: Some(employee.email_id().to_string()),
        }
    }
}

impl From<EmployeeBody> for EmployeeInput {
    fn from(body: EmployeeBody) -> Self {
        // Client-supplied ids are ignored
        EmployeeInput {
            first_name: body.first_name,
            last_name: body.last_name,
            email_id: body.email_id,
        }
    }
}

/// Body returned by a successful delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Decode a request body into use case input.
///
/// Fails only on malformed JSON or wrongly-typed fields.
pub fn decode_employee(bytes: &[u8]) -> Result<EmployeeInput, ApiError> {
    let body: EmployeeBody =
        serde_json::from_slice(bytes).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    Ok(body.into())
}

/// Encode a list of employees in repository order
pub fn encode_employees(employees: &[Employee]) -> Vec<EmployeeBody> {
    employees.iter().map(EmployeeBody::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_domain::{EmployeeDraft, EmployeeId};

    #[test]
    fn test_encode_uses_camel_case() {
        let employee = Employee::with_id(
            EmployeeId::new(1),
            EmployeeDraft::new("John", "Doe", "john.doe@example.com"),
        );

        let json = serde_json::to_value(EmployeeBody::from(&employee)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "firstName": "John",
                "lastName": "Doe",
                "emailId": "john.doe@example.com"
            })
        );
    }

    #[test]
    fn test_decode_ignores_id() {
        let input = decode_employee(
            br#"{"id": 99, "firstName": "John", "lastName": "Doe", "emailId": "john.doe@example.com"}"#,
        )
        .unwrap();

        assert_eq!(input, EmployeeInput::new("John", "Doe", "john.doe@example.com"));
    }

    #[test]
    fn test_decode_tolerates_null_and_missing_fields() {
        let input = decode_employee(br#"{"id": null, "firstName": null, "lastName": "Doe"}"#).unwrap();

        assert_eq!(input.first_name, None);
        assert_eq!(input.last_name.as_deref(), Some("Doe"));
        assert_eq!(input.email_id, None);
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(matches!(
            decode_employee(b"{\"firstName\": "),
            Err(ApiError::InvalidBody(_))
        ));
        assert!(matches!(
            decode_employee(br#"{"firstName": 5}"#),
            Err(ApiError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_delete_response_shape() {
        assert_eq!(
            serde_json::to_value(DeleteResponse { deleted: true }).unwrap(),
            serde_json::json!({"deleted": true})
        );
    }
}
