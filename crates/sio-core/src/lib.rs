//! # sio-core
//!
//! Core domain types for the SoundItOut client crates.
//!
//! This crate holds the plain data shared between the session, plan, API and
//! CLI crates:
//! - Study plan entities (`StudyTask`, `StudyPlanDraft`, `StudyPlan`)
//! - The derived session `Role`
//! - Request/response bodies of the REST backend
//! - A lightweight `SessionIdentity` for cross-crate passing

pub mod entities;
pub mod enums;
pub mod identity;
pub mod responses;

pub use entities::{StudyPlan, StudyPlanDraft, StudyTask};
pub use enums::Role;
pub use identity::SessionIdentity;
