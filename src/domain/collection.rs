// Collection item domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image_url: String,
}

impl CollectionItem {
    pub fn new(title: String, category: &str) -> Self {
        Self {
            title,
            category: category.to_string(),
            image_url: String::new(),
        }
    }
}
