//! Study plan entities.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! normalized output can be round-tripped and validated against its schema.

mod plan;
mod task;

pub use plan::{StudyPlan, StudyPlanDraft};
pub use task::StudyTask;
