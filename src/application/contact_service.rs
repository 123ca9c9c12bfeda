// Contact flow - form state and the single POST that delivers it
use crate::application::content_source::ContentSource;
use crate::domain::contact::{ContactRejection, ContactSubmission};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl ContactStatus {
    pub fn message(self) -> &'static str {
        match self {
            ContactStatus::Idle => "",
            ContactStatus::Sending => "Sending…",
            ContactStatus::Sent => "Thanks — I will get back to you soon.",
            ContactStatus::Failed => "Could not send right now. Please email me instead.",
        }
    }
}

/// Contact form view model
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    status: ContactStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactSubmission) -> Self {
        Self {
            fields,
            status: ContactStatus::Idle,
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn status_message(&self) -> &'static str {
        self.status.message()
    }

    /// idle -> sending. Hands back the payload to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ContactRejection> {
        if self.status == ContactStatus::Sending {
            return Err(ContactRejection::AlreadySending);
        }
        self.fields.validate()?;

        self.status = ContactStatus::Sending;
        Ok(self.fields.clone())
    }

    /// sending -> sent (fields cleared) or sending -> failed (fields kept)
    pub fn finish(&mut self, delivered: bool) {
        if self.status != ContactStatus::Sending {
            return;
        }

        if delivered {
            self.fields = ContactSubmission::default();
            self.status = ContactStatus::Sent;
        } else {
            self.status = ContactStatus::Failed;
        }
    }
}

#[derive(Clone)]
pub struct ContactService {
    source: Arc<dyn ContentSource>,
    timeout: Duration,
}

impl ContactService {
    pub fn new(source: Arc<dyn ContentSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Runs the whole flow. Rejected forms never reach the backend.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<ContactStatus, ContactRejection> {
        let submission = form.begin_submit()?;

        let delivered = match tokio::time::timeout(self.timeout, self.source.send_contact(&submission)).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::warn!("Contact submission failed: {:#}", e);
                false
            }
            Err(_) => {
                tracing::warn!("Contact submission timed out after {:?}", self.timeout);
                false
            }
        };

        form.finish(delivered);
        Ok(form.status())
    }
}
