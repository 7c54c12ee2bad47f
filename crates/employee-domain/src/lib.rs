//! # Employee Directory Domain Layer
//!
//! Pure business types with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Employee entity & value objects               ││
//! │  │  repository/- EmployeeRepository port (not implementations) ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Swapping the in-memory store for a database never touches this crate.

pub mod model;
pub mod repository;

pub use model::employee::{Employee, EmployeeDraft, EmployeeId};
pub use repository::employee_repository::{EmployeeRepository, RepositoryError};
