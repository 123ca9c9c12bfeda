// Contact submission domain model
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submission was refused before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactRejection {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("a submission is already being sent")]
    AlreadySending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactRejection> {
        if self.name.trim().is_empty() {
            return Err(ContactRejection::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactRejection::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactRejection::MissingField("message"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactRejection::InvalidEmail);
        }
        Ok(())
    }
}

// Same shape a browser accepts for type="email": something@something, no spaces.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
