//! Recovery pipeline: eligibility filter, proportional allocator,
//! recovery projector, and report assembler.

mod allocator;
mod eligibility;
mod projector;
mod recovery_model;
mod recovery_service;


pub use allocator::allocate_proportional;
pub use eligibility::filter_eligible;
pub use projector::{project_recovery, Projection};
pub use recovery_model::{AllocationRow, PercentValue, RecoveryConfig, RecoveryReport};
pub use recovery_service::{assemble_report, RecoveryService, RecoveryServiceTrait};
