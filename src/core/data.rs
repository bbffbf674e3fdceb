//! Core data structures for the profile page
//!
//! The profile record is a fixed literal: nothing in it is derived from
//! request input, and the skill and hobby sequences keep declaration order.

use serde::{Deserialize, Serialize};

/// Personal profile shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub hobbies: Vec<String>,
}

impl Profile {
    /// Build the profile rendered by the home page
    pub fn home() -> Self {
        Self {
            name: "Dhanunjaya".to_string(),
            title: "DevOps Engineer | Tech Enthusiast".to_string(),
            bio: "I am a passionate DevOps Engineer who loves building CI CD and fixing real \
                  world problems using Docker, Kubernetes, and other modern technologies."
                .to_string(),
            skills: to_strings(&["AWS", "Azure", "Docker", "Kubernetes"]),
            hobbies: to_strings(&["Reading", "Music", "Coding Projects"]),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.title)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
