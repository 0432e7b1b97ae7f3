pub mod config_service;
pub mod fixture;
pub mod in_memory_scheduling_service;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::fixture::{ClassFixture, FixtureFile};
pub use crate::in_memory_scheduling_service::InMemorySchedulingService;
pub use crate::paths::ClassgatePaths;
