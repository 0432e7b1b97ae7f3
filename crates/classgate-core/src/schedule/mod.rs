//! Class schedule domain module.
//!
//! # Module Structure
//!
//! - `model`: `ClassSchedule`, `Session`, `Week` and the raw input shapes
//!   the scheduling collaborator emits
//! - `service`: the `SchedulingService` collaborator contract
//!
//! # Usage
//!
//! ```ignore
//! use classgate_core::schedule::{ClassSchedule, Session, SchedulingService};
//! ```

mod model;
pub mod service;

// Re-export public API
pub use model::{
    ApprovalStatus, ClassSchedule, DecisionReceipt, DecisionRecord, RawId, RosterEntry,
    SchedulingStatus, Session, SessionListing, SessionTeachers, TeacherRef, TimeSlotInfo,
    TimeSlotRef, Week,
};
pub(crate) use model::non_blank;

pub use service::SchedulingService;
