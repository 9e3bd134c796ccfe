//! # sio-plan
//!
//! Normalization of study-plan responses from the SoundItOut AI coach.
//!
//! The backend's wire format changed across versions (raw array, JSON-encoded
//! array, wrapped `{ tasks: [...] }` object) and several deployments may be
//! live at once. [`normalize_tasks`] accepts every historical shape and
//! always returns a concrete task list; it never fails.

mod normalize;
mod payload;

pub use normalize::{normalize_body, normalize_plan, normalize_tasks};
pub use payload::{RawStudyPlanPayload, TaskField};
