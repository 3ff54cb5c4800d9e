//! Domain model for plannings and the course library.
//!
//! # Responsibility
//! - Define canonical data structures shared by planner, storage and services.
//!
//! # Invariants
//! - Every planning holds exactly seven days (see `planning::Planning::validate`).

pub mod library;
pub mod planning;
