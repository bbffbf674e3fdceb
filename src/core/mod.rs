//! Core domain layer
//!
//! The profile record and the page rendering seam used by the server and
//! the command line.

pub mod data;
pub mod render;
pub mod traits;
