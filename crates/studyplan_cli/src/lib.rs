//! Command-line front end for the study planner core.
//!
//! # Responsibility
//! - Parse `studyplan` flags and subcommands.
//! - Run each subcommand against a caller-provided connection and output sink.
//!
//! # Invariants
//! - stdout output stays machine-readable (JSON or tab-separated rows).

pub mod cli;
pub mod commands;
