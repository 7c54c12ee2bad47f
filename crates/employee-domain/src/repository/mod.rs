//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼──────────────────────────────
//! trait EmployeeRepository│  InMemoryEmployeeRepository
//!   fn find_all()         │  JsonFileEmployeeRepository
//!   fn find_by_id()       │
//!   fn save()             │
//!   fn delete_by_id()     │
//! ```

pub mod employee_repository;
