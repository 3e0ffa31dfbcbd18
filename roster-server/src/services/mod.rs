//! Business services
//!
//! - [`reference`] - department / country lookups used by the writers
//! - [`EmployeeService`] - employee aggregate writes, reads and deletion

pub mod employee;
pub mod reference;

pub use employee::EmployeeService;
