use crate::cli::{ProfileArgs, ProfileFormat};
use crate::core::data::Profile;
use crate::utils::OutputStyle;
use anyhow::{Context, Result};

pub fn handle_profile_command(args: &ProfileArgs) -> Result<()> {
    let profile = Profile::home();

    match &args.format {
        ProfileFormat::Text => OutputStyle::print_profile(&profile),
        format => println!("{}", serialize_profile(&profile, format)?),
    }

    Ok(())
}

fn serialize_profile(profile: &Profile, format: &ProfileFormat) -> Result<String> {
    match format {
        ProfileFormat::Json => {
            serde_json::to_string_pretty(profile).context("Failed to serialize profile as JSON")
        }
        ProfileFormat::Toml => {
            toml::to_string_pretty(profile).context("Failed to serialize profile as TOML")
        }
        ProfileFormat::Text => Ok(profile.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output() {
        let json = serialize_profile(&Profile::home(), &ProfileFormat::Json).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Profile::home());
    }

    #[test]
    fn test_toml_output() {
        let out = serialize_profile(&Profile::home(), &ProfileFormat::Toml).unwrap();
        assert!(out.contains("name = \"Dhanunjaya\""));
        assert!(out.contains("Coding Projects"));
    }
}
