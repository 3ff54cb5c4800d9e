//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate planner and repository calls into use-case level APIs.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod planning_service;
pub mod progress_service;
