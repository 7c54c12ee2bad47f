//! Domain Models
//!
//! The directory has exactly one entity: the employee record.

pub mod employee;
