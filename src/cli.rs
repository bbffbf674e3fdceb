use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::config::Config;
use crate::commands::{configure, profile, render, serve};

#[derive(Parser)]
#[command(name = "aboutme")]
#[command(about = "Serve and render a personal profile page")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config, config_path: &Path) -> Result<()> {
        match self {
            Commands::Serve(args) => {
                serve::handle_serve_command(config, &args).await?;
            }
            Commands::Render(args) => {
                render::handle_render_command(config, &args)?;
            }
            Commands::Profile(args) => {
                profile::handle_profile_command(&args)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command, config_path)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve(ServeArgs),

    /// Render the home page once
    Render(RenderArgs),

    /// Print the profile record
    Profile(ProfileArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, help = "Host to bind (overrides config)")]
    pub host: Option<String>,

    #[arg(short, long, help = "Port to bind (overrides config)")]
    pub port: Option<u16>,

    #[arg(short, long, value_name = "DIR", help = "Template directory (overrides config)")]
    pub templates: Option<PathBuf>,
}

#[derive(Args)]
pub struct RenderArgs {
    #[arg(short, long, value_name = "DIR", help = "Template directory (overrides config)")]
    pub templates: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE", help = "Write HTML to a file instead of stdout")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(short, long, default_value = "text")]
    pub format: ProfileFormat,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
pub enum ProfileFormat {
    Text,
    Json,
    Toml,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset {
        #[arg(short, long, help = "Skip the confirmation prompt")]
        force: bool,
    },
}
