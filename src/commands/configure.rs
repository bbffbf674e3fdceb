use crate::config::Config;
use crate::cli::ConfigCommands;
use crate::utils::{OutputStyle, interactive::prompt_yes_no, print_success};
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    command: Option<ConfigCommands>,
    config_path: &Path,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config, config_path),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset { force }) => handle_reset_command(config_path, force),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  aboutme Configuration");

    println!("File: {}", OutputStyle::muted(&config_path.display().to_string()));
    println!("Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("Templates:");
    println!("  Directory: {}", config.templates.dir.display());
    println!("  Home: {}", config.templates.home);
    println!("General:");
    println!("  Color: {}", config.general.color);

    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  Configuration Management");
    println!("Available configuration commands:");
    println!("  aboutme config show    - Show current configuration");
    println!("  aboutme config path    - Print the configuration file location");
    println!("  aboutme config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config_path: &Path, force: bool) -> Result<()> {
    if force
        || prompt_yes_no(
            "Are you sure you want to reset configuration to defaults? \
             This will overwrite your current settings.",
        )?
    {
        Config::default().save_to(config_path)?;
        print_success("Configuration reset to defaults!");
    } else {
        println!("{}", OutputStyle::muted("Reset cancelled."));
    }
    Ok(())
}
