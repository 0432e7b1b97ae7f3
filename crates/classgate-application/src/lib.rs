//! Application layer for Classgate.
//!
//! This crate provides the use case that coordinates the scheduling
//! collaborator with the pure review computations and the approval workflow.

pub mod in_flight;
pub mod review_usecase;

pub use in_flight::{DecisionPermit, InFlightDecisions};
pub use review_usecase::ClassReviewUseCase;
