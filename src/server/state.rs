//! Application State
//!
//! Arc-wrapped state shared across handlers. Nothing in it is mutated after
//! construction, so handlers never lock.

use std::sync::Arc;

use crate::config::Config;
use crate::core::{data::Profile, render::TemplateRenderer, traits::PageRenderer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    profile: Profile,
    renderer: Box<dyn PageRenderer>,
}

impl AppState {
    /// Create state for the home profile with the given renderer.
    pub fn new(renderer: impl PageRenderer + 'static) -> Self {
        Self::with_profile(Profile::home(), renderer)
    }

    /// Create state rendering an arbitrary profile.
    pub fn with_profile(profile: Profile, renderer: impl PageRenderer + 'static) -> Self {
        Self {
            inner: Arc::new(InnerState {
                profile,
                renderer: Box::new(renderer),
            }),
        }
    }

    /// Create state backed by the configured template directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(TemplateRenderer::from_config(config))
    }

    /// Get the profile record.
    pub fn profile(&self) -> &Profile {
        &self.inner.profile
    }

    /// Get the page renderer.
    pub fn renderer(&self) -> &dyn PageRenderer {
        self.inner.renderer.as_ref()
    }
}
