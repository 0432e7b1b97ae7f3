//! Class session readiness and approval workflow.
//!
//! Pure computation over a class snapshot (readiness, teacher and resource
//! rollups, day/slot normalization, week grouping) plus the approval state
//! machine. All I/O goes through [`schedule::SchedulingService`].

pub mod approval;
pub mod config;
pub mod error;
pub mod normalize;
pub mod readiness;
pub mod resource;
pub mod review;
pub mod schedule;
pub mod teacher;
pub mod week;

// Re-export common error type
pub use error::{ClassgateError, Result};
pub use review::ClassReview;
