//! JSON File Repository Implementation
//!
//! Keeps the whole directory in memory and rewrites a single JSON snapshot
//! after every mutation:
//!
//! ```json
//! {
//!   "nextId": 3,
//!   "employees": [
//!     {"id": 1, "firstName": "John", "lastName": "Doe", "emailId": "john.doe@example.com"}
//!   ]
//! }
//! ```
//!
//! Snapshots are written to a sibling `.tmp` file and renamed into place.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use employee_domain::{Employee, EmployeeDraft, EmployeeId, EmployeeRepository, RepositoryError};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::advance_sequence;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEmployee {
    id: i64,
    first_name: String,
    last_name: String,
    email_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    next_id: i64,
    #[serde(default)]
    employees: Vec<StoredEmployee>,
}

#[derive(Debug, Clone)]
struct State {
    employees: BTreeMap<i64, Employee>,
    next_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            employees: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl State {
    /// Rebuild state from a snapshot, rejecting duplicate ids and ids the
    /// sequence can never move past.
    fn from_snapshot(snapshot: Snapshot) -> Result<Self, RepositoryError> {
        let mut employees = BTreeMap::new();
        // A hand-edited file may carry a stale counter
        let mut next_id = snapshot.next_id.max(1);

        for e in snapshot.employees {
            let id = EmployeeId::new(e.id);
            if employees.contains_key(&e.id) {
                return Err(RepositoryError::persistence(format!(
                    "duplicate employee id {} in snapshot",
                    id
                )));
            }
            next_id = advance_sequence(next_id, id)?;

            let draft = EmployeeDraft::new(e.first_name, e.last_name, e.email_id);
            employees.insert(e.id, Employee::with_id(id, draft));
        }

        Ok(Self { employees, next_id })
    }

    fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            next_id: self.next_id,
            employees: self
                .employees
                .iter()
                .map(|(id, e)| StoredEmployee {
                    id: *id,
                    first_name: e.first_name().to_string(),
                    last_name: e.last_name().to_string(),
                    email_id: e.email_id().to_string(),
                })
                .collect(),
        }
    }
}

/// File-backed Employee Repository
///
/// Mutations are serialised through an async mutex, so every write lands
/// one complete snapshot. In-memory state only changes after the
/// snapshot is on disk.
#[derive(Debug)]
pub struct JsonFileEmployeeRepository {
    path: PathBuf,
    state: Mutex<State>,
}

impl JsonFileEmployeeRepository {
    /// Open a store at `path`. A missing file is an empty directory; it is
    /// created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();

        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes).map_err(|e| {
                    RepositoryError::persistence(format!(
                        "Failed to parse {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                State::from_snapshot(snapshot)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => State::default(),
            Err(e) => {
                return Err(RepositoryError::persistence(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        info!(
            path = %path.display(),
            records = state.employees.len(),
            "Opened employee store"
        );

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, state: &State) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(&state.to_snapshot())
            .map_err(|e| RepositoryError::persistence(format!("Failed to encode snapshot: {}", e)))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &bytes).await.map_err(|e| {
            RepositoryError::persistence(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            RepositoryError::persistence(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Wrote employee snapshot");
        Ok(())
    }
}

impl EmployeeRepository for JsonFileEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.state.lock().await.employees.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.state.lock().await.employees.get(&id.value()).cloned())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();

        let id = match employee.id() {
            Some(id) => id,
            None => EmployeeId::new(next.next_id),
        };
        next.next_id = advance_sequence(next.next_id, id)?;
        employee.assign_id(id);
        next.employees.insert(id.value(), employee.clone());

        self.persist(&next).await?;
        *state = next;
        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().await;
        if !state.employees.contains_key(&id.value()) {
            return Ok(());
        }

        let mut next = state.clone();
        next.employees.remove(&id.value());

        self.persist(&next).await?;
        *state = next;
        Ok(())
    }
}
