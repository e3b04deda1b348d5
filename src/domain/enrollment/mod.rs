//! Enrollment domain module.
//!
//! An enrollment links one user to the event and records where they live.
//! Enrollments are created by a separate registration workflow; this service
//! only reads them.

mod address;
mod enrollment;

pub use address::Address;
pub use enrollment::Enrollment;
