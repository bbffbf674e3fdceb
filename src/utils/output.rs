use crate::core::data::Profile;
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn name(text: &str) -> ColoredString {
        text.bright_green().bold()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn item(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>8}: {}", Self::label(label), color_fn(value));
    }

    /// Print a profile as labelled fields, sequences as bullet lists
    pub fn print_profile(profile: &Profile) {
        Self::print_header(&profile.name);
        Self::print_field_colored("Name", &profile.name, Self::name);
        Self::print_field_colored("Title", &profile.title, Self::content);
        Self::print_field_colored("Bio", &profile.bio, Self::content);
        Self::print_list("Skills", &profile.skills);
        Self::print_list("Hobbies", &profile.hobbies);
    }

    fn print_list(label: &str, items: &[String]) {
        println!("{:>8}:", Self::label(label));
        for item in items {
            println!("          • {}", Self::item(item));
        }
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Globally enable or disable colored console output
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
