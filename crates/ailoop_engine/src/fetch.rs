use std::time::Duration;

use ailoop_logging::pipeline_debug;
use futures_util::StreamExt;
use reqwest::StatusCode;
use url::Url;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// GET a URL and parse the body as JSON.
#[async_trait::async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<serde_json::Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(self.settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl JsonFetcher for ReqwestFetcher {
    async fn get_json(&self, url: &Url) -> Result<serde_json::Value, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::new(FailureKind::InvalidUrl, url.scheme()));
        }
        let client = self.build_client()?;

        // The query string carries the API key, so it never reaches logs.
        pipeline_debug!("GET {}{}", url.origin().ascii_serialization(), url.path());
        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        if status != StatusCode::OK {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    let err = err.without_url();
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
