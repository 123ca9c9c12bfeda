// HTTP content source - reqwest client for the portfolio backend
use crate::application::content_source::ContentSource;
use crate::domain::contact::ContactSubmission;
use crate::infrastructure::config::endpoint_url;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("{url} returned a body that is not JSON")]
    Malformed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response, BackendError> {
        let response = request.send().await.map_err(|source| BackendError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !response.status().is_success() {
            return Err(BackendError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_json(&self, path: &str) -> anyhow::Result<serde_json::Value> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let request = self.client.get(&url).header("Accept", "application/json");
        let response = self.send(request, &url).await?;

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|source| BackendError::Malformed { url, source })?;

        Ok(body)
    }

    async fn send_contact(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let url = self.url("/api/contact");
        tracing::debug!("POST {}", url);

        // `json` sets Content-Type: application/json
        let request = self.client.post(&url).json(submission);
        self.send(request, &url).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn fetch_json_returns_body_on_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/projects")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"title":"Atlas"}]"#)
            .create_async()
            .await;

        let source = HttpContentSource::new(&format!("{}/", server.url()));
        let body = source.fetch_json("/api/projects").await.unwrap();

        assert_eq!(body, json!([{"title": "Atlas"}]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_json_rejects_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/services")
            .with_status(503)
            .with_body(r#"[{"title":"should not be used"}]"#)
            .create_async()
            .await;

        let source = HttpContentSource::new(&server.url());
        let err = source.fetch_json("/api/services").await.unwrap_err();

        let backend = err.downcast_ref::<BackendError>().expect("typed backend error");
        assert!(matches!(backend, BackendError::Status { status, .. } if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn fetch_json_rejects_non_json_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/profile")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let source = HttpContentSource::new(&server.url());
        let err = source.fetch_json("/api/profile").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BackendError>(),
            Some(BackendError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn fetch_json_reports_unreachable_backend() {
        let source = HttpContentSource::new("http://127.0.0.1:1");
        let err = source.fetch_json("/api/projects").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BackendError>(),
            Some(BackendError::Transport { .. })
        ));
    }

    #[tokio::test]
    async fn send_contact_posts_json_once() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/contact")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "name": "Ana",
                "email": "ana@example.com",
                "message": "Hello"
            })))
            .with_status(201)
            .expect(1)
            .create_async()
            .await;

        let source = HttpContentSource::new(&server.url());
        let submission = ContactSubmission::new("Ana", "ana@example.com", "Hello");
        source.send_contact(&submission).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_contact_fails_on_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/contact")
            .with_status(500)
            .create_async()
            .await;

        let source = HttpContentSource::new(&server.url());
        let submission = ContactSubmission::new("Ana", "ana@example.com", "Hello");

        assert!(source.send_contact(&submission).await.is_err());
    }
}
