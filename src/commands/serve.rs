use crate::cli::ServeArgs;
use crate::config::Config;
use crate::server;
use anyhow::{Context, Result};

pub async fn handle_serve_command(mut config: Config, args: &ServeArgs) -> Result<()> {
    apply_overrides(&mut config, args);
    config.validate()?;

    server::run(&config)
        .await
        .with_context(|| format!("Server on {} stopped with an error", config.bind_address()))?;

    Ok(())
}

fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = &args.templates {
        config.templates.dir = dir.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = Config::default();
        let args = ServeArgs {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
            templates: Some(PathBuf::from("site/templates")),
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.templates.dir, PathBuf::from("site/templates"));
    }

    #[test]
    fn test_missing_overrides_keep_config() {
        let mut config = Config::default();
        let args = ServeArgs {
            host: None,
            port: None,
            templates: None,
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config, Config::default());
    }
}
