//! # Employee Directory Use Case Layer
//!
//! Application rules for the directory: list, get, create, update and
//! delete, each a single pass over the `EmployeeRepository` port.
//! This crate knows nothing about HTTP or JSON.

pub mod error;
pub mod input;
pub mod service;

pub use employee_domain;

pub use error::EmployeeError;
pub use input::EmployeeInput;
pub use service::EmployeeService;
