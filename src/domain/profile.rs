// Profile domain model - wire shape plus per-field resolution
use serde::{Deserialize, Serialize};

use super::defaults;

/// Profile as the backend sends it. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub education: Option<Vec<String>>,
    #[serde(default)]
    pub skills_design: Option<Vec<String>>,
    #[serde(default)]
    pub skills_tech: Option<Vec<String>>,
    #[serde(default)]
    pub philosophy: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// Profile with every field filled in, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub bio: String,
    pub education: Vec<String>,
    pub skills_design: Vec<String>,
    pub skills_tech: Vec<String>,
    pub philosophy: String,
    pub email: String,
    pub resume_url: String,
}

impl Profile {
    /// Substitutes defaults field by field. Blank strings and empty lists
    /// count as unset.
    pub fn resolve(&self) -> ProfileView {
        ProfileView {
            bio: text_or(&self.bio, defaults::PROFILE_BIO),
            education: list_or(&self.education, defaults::PROFILE_EDUCATION),
            skills_design: list_or(&self.skills_design, defaults::PROFILE_SKILLS_DESIGN),
            skills_tech: list_or(&self.skills_tech, defaults::PROFILE_SKILLS_TECH),
            philosophy: text_or(&self.philosophy, defaults::PROFILE_PHILOSOPHY),
            email: text_or(&self.email, defaults::PROFILE_EMAIL),
            resume_url: text_or(&self.resume_url, defaults::PROFILE_RESUME_URL),
        }
    }
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

// Applies to every list, skills included: an empty skills list shows the
// default skills rather than an empty line.
fn list_or(value: &Option<Vec<String>>, fallback: &[&str]) -> Vec<String> {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => fallback.iter().map(|s| s.to_string()).collect(),
    }
}
