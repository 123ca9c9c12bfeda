// Project domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub cover_image: String,
}

impl Project {
    pub fn new(title: &str, summary: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            summary: summary.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover_image: String::new(),
        }
    }

    /// Tags shown on a card; cards only have room for two.
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(2)]
    }
}
