//! Course library helpers feeding the planner.
//!
//! # Responsibility
//! - Look up courses and folders in the library tree.
//! - Assemble planner input text and linked images from selected courses.
//! - Render a bucketed digest of course content.

pub mod digest;
pub mod linker;
