// Experience entry domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub role: String,
    pub org: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ExperienceEntry {
    /// "2022–2023" when the entry has ended, "2021" otherwise.
    pub fn period(&self) -> String {
        match self.end.as_deref() {
            Some(end) if !end.is_empty() => format!("{}–{}", self.start, end),
            _ => self.start.clone(),
        }
    }
}
