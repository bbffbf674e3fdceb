use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub templates: TemplateConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory templates are loaded from
    pub dir: PathBuf,
    /// Home page template, relative to `dir`
    pub home: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            templates: TemplateConfig {
                dir: PathBuf::from("templates"),
                home: "aboutmeapp/home.html".to_string(),
            },
            general: GeneralConfig::default(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Load a configuration file, writing the defaults there first if it is missing
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::Config("Server host cannot be empty".to_string()));
        }

        if self.server.port == 0 {
            return Err(AppError::Config("Server port cannot be 0".to_string()));
        }

        if self.templates.dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Template directory cannot be empty".to_string(),
            ));
        }

        if self.templates.home.trim().is_empty() {
            return Err(AppError::Config(
                "Home template name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Address the server binds to, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aboutme")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
        assert_eq!(config.templates.home, "aboutmeapp/home.html");
    }

    #[test]
    fn test_load_custom_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_custom(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.server.port = 9090;
        config.templates.dir = PathBuf::from("/srv/aboutme/templates");
        config.general.color = false;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_custom(&path).unwrap(), config);
    }

    #[test]
    fn test_general_section_is_optional() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\nport = 8080\n\n\
             [templates]\ndir = \"templates\"\nhome = \"aboutmeapp/home.html\"\n",
        )
        .unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert!(config.general.color);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = Config::default();
        config.templates.home = "  ".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = Config::default();
        config.server.host = String::new();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_unparsable_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(matches!(Config::load_custom(&path), Err(AppError::Config(_))));
    }
}
