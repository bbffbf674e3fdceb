//! Core trait definitions for page rendering
//!
//! The HTTP layer only depends on these traits, so handlers can be driven
//! by any renderer implementation.

use crate::core::data::Profile;
use crate::utils::error::AppResult;

/// Rendering of profile pages into HTML
///
/// Implementations must be safe to share across request handlers.
pub trait PageRenderer: Send + Sync {
    /// Render the home page for the given profile
    ///
    /// Fails with `AppError::TemplateNotFound` when the home template cannot
    /// be located and `AppError::Template` when it cannot be rendered.
    fn render_home(&self, profile: &Profile) -> AppResult<String>;
}
