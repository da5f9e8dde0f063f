//! Posting the URL collection to the local receiver.

use crate::error::{MarkpostError, Result};
use reqwest::blocking::Client;

/// The fixed address the receiver listens on
pub const ENDPOINT: &str = "http://localhost:5000/bookmarks";

/// Sends one JSON array of URLs per call
pub struct Exporter {
    client: Client,
    endpoint: String,
}

impl Exporter {
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    /// Exporter for a receiver bound elsewhere (ephemeral test ports)
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `urls` as a JSON array. Any 2xx status is success; everything
    /// else, transport errors included, is an error.
    pub fn send(&self, urls: &[String]) -> Result<()> {
        log::debug!("Posting {} bookmarks to {}", urls.len(), self.endpoint);

        let resp = self.client.post(&self.endpoint).json(urls).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MarkpostError::UnsuccessfulResponse(status.as_u16()));
        }
        Ok(())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::closed_port_url;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Run the blocking exporter against `server` off the async runtime
    async fn send_to(server: &MockServer, urls: Vec<String>) -> Result<()> {
        let endpoint = format!("{}/bookmarks", server.uri());
        tokio::task::spawn_blocking(move || Exporter::with_endpoint(&endpoint).send(&urls))
            .await
            .unwrap()
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(Exporter::new().endpoint(), "http://localhost:5000/bookmarks");
    }

    #[tokio::test]
    async fn test_send_posts_json_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bookmarks"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!(["https://a.com", "https://b.com"])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let urls = vec!["https://a.com".to_string(), "https://b.com".to_string()];
        assert!(send_to(&server, urls).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_empty_collection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bookmarks"))
            .and(body_json(json!([])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        assert!(send_to(&server, vec![]).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_accepts_any_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        assert!(send_to(&server, vec![]).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_rejects_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = send_to(&server, vec!["https://a.com".to_string()]).await;
        assert!(matches!(result, Err(MarkpostError::UnsuccessfulResponse(500))));
    }

    #[test]
    fn test_send_connection_refused() {
        let exporter = Exporter::with_endpoint(&closed_port_url());

        let result = exporter.send(&[]);
        assert!(matches!(result, Err(MarkpostError::Http(_))));
    }
}
