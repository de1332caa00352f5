// file: src/directory/client.rs
// description: http client for the directory service byjson api
// reference: https://docs.rs/reqwest

use super::DirectoryLookup;
use super::response::{DirectoryResponse, extract_mail};
use crate::config::DirectoryConfig;
use crate::error::{PipelineError, Result};
use crate::models::LookupResult;
use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

const NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Why a single lookup produced no result. Only ever logged.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PipelineError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('?').to_string(),
        })
    }

    pub fn query_url(&self, name: &str) -> String {
        format!(
            "{}?ibmperson/(cn={}).list/byjson?mail",
            self.base_url,
            encode_name(name)
        )
    }

    pub async fn try_lookup(&self, name: &str) -> std::result::Result<LookupResult, LookupError> {
        let url = self.query_url(name);
        debug!("Querying directory: {}", url);

        let response = self.client.get(&url).send().await.map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::Status(status));
        }

        let body = response.bytes().await.map_err(classify)?;
        let parsed: DirectoryResponse = serde_json::from_str(&decode_ignoring_invalid(&body))?;

        let result = extract_mail(&parsed)?;
        if !result.is_found() {
            debug!("No mail attribute for {}", name);
        }
        Ok(result)
    }
}

#[async_trait]
impl DirectoryLookup for DirectoryClient {
    async fn lookup(&self, name: &str) -> LookupResult {
        match self.try_lookup(name).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Directory lookup failed for {}: {}", name, e);
                LookupResult::NotFound
            }
        }
    }
}

fn classify(error: reqwest::Error) -> LookupError {
    if error.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Request(error)
    }
}

/// UTF-8 decode that drops invalid byte sequences instead of substituting U+FFFD.
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Percent-encode a display name for the `cn=` filter.
pub fn encode_name(name: &str) -> String {
    utf8_percent_encode(name, NAME_ENCODE_SET).to_string()
}
