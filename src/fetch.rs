//! Page fetching for the scraper
//!
//! A single end-to-end GET: the full response body is accumulated as text
//! and handed to the extraction engine. Non-2xx responses are not errors
//! here; an error page is still input the engine must cope with.

use crate::error::Result;
use reqwest::Client as ReqwestClient;
use tracing::{debug, instrument};
use url::Url;

/// HTTP client for fetching the schedule page
#[derive(Debug, Clone, Default)]
pub struct PageFetcher {
    /// The underlying reqwest client
    client: ReqwestClient,
}

impl PageFetcher {
    /// Create a new fetcher. The client carries no timeout: the run waits
    /// for the body stream to end or error.
    pub fn new() -> Self {
        Self {
            client: ReqwestClient::new(),
        }
    }

    /// Fetch a page and return its full body as text.
    ///
    /// Transport-level failures (DNS, TLS, connection reset) are errors;
    /// the response status code is not inspected.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)?;

        debug!("Sending GET request to {}", url);
        let response = self.client.get(url).send().await?;
        let body = response.text().await?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = Server::new_async().await;
        let mock_server = server
            .mock("GET", "/schedule")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>times</body></html>")
            .expect(1)
            .create_async()
            .await;

        let fetcher = PageFetcher::new();
        let body = fetcher
            .fetch(&format!("{}/schedule", server.url()))
            .await
            .unwrap();
        assert_eq!(body, "<html><body>times</body></html>");

        mock_server.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_returns_error_page_body() {
        let mut server = Server::new_async().await;
        let mock_server = server
            .mock("GET", "/schedule")
            .with_status(503)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        // A non-2xx status still resolves with the body text.
        let fetcher = PageFetcher::new();
        let body = fetcher
            .fetch(&format!("{}/schedule", server.url()))
            .await
            .unwrap();
        assert_eq!(body, "<html>maintenance</html>");

        mock_server.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        // Nothing listens on this port; the connection fails outright.
        let fetcher = PageFetcher::new();
        let result = fetcher.fetch("http://127.0.0.1:1/schedule").await;

        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let fetcher = PageFetcher::new();
        let result = fetcher.fetch("not-a-url").await;

        assert!(matches!(result, Err(Error::UrlParse(_))));
    }
}
