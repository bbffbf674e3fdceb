//! Template-backed page rendering
//!
//! Templates are read from disk on every render, so edits (and removals)
//! take effect on the next request without a restart.

use crate::config::Config;
use crate::core::{data::Profile, traits::PageRenderer};
use crate::utils::error::{AppError, AppResult};
use minijinja::{Environment, path_loader};
use std::path::PathBuf;

/// Renders pages from a template directory with minijinja
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template_dir: PathBuf,
    home_template: String,
}

impl TemplateRenderer {
    pub fn new(template_dir: impl Into<PathBuf>, home_template: impl Into<String>) -> Self {
        Self {
            template_dir: template_dir.into(),
            home_template: home_template.into(),
        }
    }

    /// Create a renderer from the `[templates]` section of the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.templates.dir, &config.templates.home)
    }

    /// Full path of the home template on disk
    pub fn home_template_path(&self) -> PathBuf {
        self.template_dir.join(&self.home_template)
    }

    fn environment(&self) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_loader(path_loader(self.template_dir.clone()));
        env
    }
}

impl PageRenderer for TemplateRenderer {
    fn render_home(&self, profile: &Profile) -> AppResult<String> {
        let env = self.environment();
        let template = env
            .get_template(&self.home_template)
            .map_err(|e| AppError::from_template(e, &self.home_template))?;

        template
            .render(profile)
            .map_err(|e| AppError::from_template(e, &self.home_template))
    }
}
