use crate::cli::RenderArgs;
use crate::config::Config;
use crate::core::{data::Profile, render::TemplateRenderer, traits::PageRenderer};
use crate::utils::print_success;
use anyhow::{Context, Result};

pub fn handle_render_command(mut config: Config, args: &RenderArgs) -> Result<()> {
    if let Some(dir) = &args.templates {
        config.templates.dir = dir.clone();
    }

    let renderer = TemplateRenderer::from_config(&config);
    let html = renderer.render_home(&Profile::home())?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_success(&format!("Rendered home page to {}", path.display()));
        }
        None => println!("{}", html),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_render_to_file() {
        let out = TempDir::new().unwrap();
        let output = out.path().join("index.html");
        let args = RenderArgs {
            templates: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")),
            output: Some(output.clone()),
        };

        handle_render_command(Config::default(), &args).unwrap();

        let html = std::fs::read_to_string(output).unwrap();
        assert!(html.contains("Dhanunjaya"));
    }

    #[test]
    fn test_render_without_template_fails() {
        let empty = TempDir::new().unwrap();
        let args = RenderArgs {
            templates: Some(empty.path().to_path_buf()),
            output: None,
        };

        let err = handle_render_command(Config::default(), &args).unwrap_err();
        assert!(err.to_string().contains("Template not found"));
    }
}
