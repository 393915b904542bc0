//! HTTP implementation of [`BookSource`] for the review service.
//!
//! Issues `GET {base_url}/books` with no query parameters; all filtering and
//! pagination happens client-side after the full list arrives.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{BookSource, FetchError};
use super::types::Book;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Book source backed by the service's REST API.
pub struct HttpBookSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookSource {
    /// Builds a source rooted at `base_url` (e.g. `http://localhost:5000/api`).
    ///
    /// A trailing slash on the base is tolerated.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }
}

#[async_trait]
impl BookSource for HttpBookSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_books(&self) -> Result<Vec<Book>, FetchError> {
        let url = self.books_url();
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("GET {} failed with HTTP {}", url, status.as_u16());
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Received {} bytes from {}", body.len(), url);

        let books: Vec<Book> =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        info!("Fetched {} books", books.len());
        Ok(books)
    }
}
