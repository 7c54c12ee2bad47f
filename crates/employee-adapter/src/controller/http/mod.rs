//! HTTP Controller - axum adapter for the employee directory
//!
//! ```text
//! HTTP request ─▶ router (routes.rs) ─▶ handler (handlers.rs)
//!                                          │  decode (dto.rs)
//!                                          ▼
//!                                   EmployeeService ─▶ EmployeeRepository
//!                                          │
//! HTTP response ◀─ ApiError (error.rs) ◀───┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use employee_usecase::EmployeeService;

pub use dto::{decode_employee, DeleteResponse, EmployeeBody};
pub use error::ApiError;
pub use routes::{employee_router, Operation, Route, EMPLOYEES_PATH, EMPLOYEE_PATH, EMPLOYEE_ROUTES};

/// Router state: one service shared by every request task
pub type SharedService<R> = Arc<EmployeeService<R>>;
