// Service offering domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
}

impl ServiceOffering {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_description_decodes_as_empty() {
        let offering: ServiceOffering =
            serde_json::from_str(r#"{"title":"Zines","description":null}"#).unwrap();
        assert_eq!(offering, ServiceOffering::new("Zines", ""));
    }
}
