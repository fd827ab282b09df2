use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;

use super::models::ChatData;
use crate::{Error, Result};

const MAX_DATA_BYTES: usize = 1024 * 1024;
const CLIENT_USER_AGENT: &str = concat!("vignette/", env!("CARGO_PKG_VERSION"));

/// Loader for dialogue data from an HTTP endpoint or a local JSON file
pub struct ChatFetcher {
    client: Client,
}

impl ChatFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Self::build_client(timeout)?,
        })
    }

    fn build_client(timeout: Duration) -> Result<Client> {
        Client::builder()
            .timeout(timeout)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(Error::Http)
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers
    }

    /// Fetch and parse dialogue data
    ///
    /// `file://` URIs and bare paths are read from disk.
    pub async fn fetch(&self, uri: &str) -> Result<ChatData> {
        let content = match local_path(uri) {
            Some(path) => {
                tracing::debug!("Reading dialogue data from {}", path.display());
                tokio::fs::read(&path).await?
            }
            None => self.fetch_remote(uri).await?,
        };

        ensure_content_size(content.len(), uri)?;
        Ok(serde_json::from_slice(&content)?)
    }

    async fn fetch_remote(&self, uri: &str) -> Result<Vec<u8>> {
        tracing::info!("Fetching dialogue data from: {}", uri);

        let response = self
            .client
            .get(uri)
            .headers(Self::build_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::DataFetch(format!("HTTP {} for URL: {}", status, uri)));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Load dialogue data, falling back to the built-in dataset on any failure
pub async fn fetch_chat_data(uri: &str, timeout: Duration) -> ChatData {
    let result = match ChatFetcher::new(timeout) {
        Ok(fetcher) => fetcher.fetch(uri).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(data) => {
            tracing::info!(
                "Loaded {} dialogue lines, {} emojis, {} avatars",
                data.dialogue.len(),
                data.emojies.len(),
                data.avatars.len()
            );
            data
        }
        Err(e) => {
            tracing::warn!("Can't load dialogue data from {}: {}. Using built-in dataset", uri, e);
            ChatData::fallback()
        }
    }
}

fn local_path(uri: &str) -> Option<PathBuf> {
    if let Some(path) = uri.strip_prefix("file://") {
        Some(PathBuf::from(path))
    } else if uri.contains("://") {
        None
    } else {
        Some(PathBuf::from(uri))
    }
}

fn ensure_content_size(size: usize, uri: &str) -> Result<()> {
    if size > MAX_DATA_BYTES {
        return Err(Error::DataFetch(format!(
            "Dialogue data too large ({} bytes) for URL: {}",
            size, uri
        )));
    }
    Ok(())
}
