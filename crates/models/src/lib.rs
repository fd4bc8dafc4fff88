//! Wire types shared by the upstream adapter and the HTTP surface.

pub mod errors;
pub mod employee;
pub mod envelope;

pub use employee::{CreateEmployeeInput, Employee};
pub use envelope::Envelope;
