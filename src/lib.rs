//! aboutme - a personal profile page served over HTTP
//!
//! This library provides the profile record, template-backed page rendering,
//! the axum router that serves it, and the command line front end.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{data::Profile, render::TemplateRenderer, traits::PageRenderer};
pub use server::{AppState, create_router};
pub use utils::error::{AppError, AppResult};
