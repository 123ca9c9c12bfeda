// Content source trait - the backend seam every section reads through
use crate::domain::contact::ContactSubmission;
use async_trait::async_trait;

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// GET a section endpoint and return its JSON body
    async fn fetch_json(&self, path: &str) -> anyhow::Result<serde_json::Value>;

    /// POST a contact submission. Any success status counts, the body is ignored.
    async fn send_contact(&self, submission: &ContactSubmission) -> anyhow::Result<()>;
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    #[derive(Clone)]
    pub enum Reply {
        Json(serde_json::Value),
        Fail,
        Hang,
        /// Waits for the notify, then answers with the JSON body
        Gated(Arc<Notify>, serde_json::Value),
    }

    /// In-memory backend that records every call it receives.
    #[derive(Default)]
    pub struct FakeSource {
        replies: HashMap<String, Reply>,
        calls: Mutex<HashMap<String, usize>>,
        contact_fails: bool,
        contact_hangs: bool,
        pub contact_sent: Mutex<Vec<ContactSubmission>>,
        pub contact_calls: AtomicUsize,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(mut self, path: &str, reply: Reply) -> Self {
            self.replies.insert(path.to_string(), reply);
            self
        }

        pub fn failing_contact(mut self) -> Self {
            self.contact_fails = true;
            self
        }

        pub fn hanging_contact(mut self) -> Self {
            self.contact_hangs = true;
            self
        }

        pub fn calls(&self, path: &str) -> usize {
            self.calls.lock().unwrap().get(path).copied().unwrap_or(0)
        }
    }

    #[async_trait]
    impl ContentSource for FakeSource {
        async fn fetch_json(&self, path: &str) -> anyhow::Result<serde_json::Value> {
            *self.calls.lock().unwrap().entry(path.to_string()).or_default() += 1;

            match self.replies.get(path).cloned() {
                Some(Reply::Json(body)) => Ok(body),
                Some(Reply::Gated(gate, body)) => {
                    gate.notified().await;
                    Ok(body)
                }
                Some(Reply::Hang) => std::future::pending().await,
                Some(Reply::Fail) | None => anyhow::bail!("connection refused"),
            }
        }

        async fn send_contact(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
            self.contact_calls.fetch_add(1, Ordering::SeqCst);
            if self.contact_hangs {
                std::future::pending::<()>().await;
            }
            if self.contact_fails {
                anyhow::bail!("backend responded with status 500");
            }
            self.contact_sent.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }
}
