use crate::api::models::*;
use dioxus::logger::tracing::debug;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use thiserror::Error;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Failure classes for the mirror's JSON endpoints.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Classify a finished response. Only 2xx bodies are parsed.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// Thin client over the mirror's `/api` routes.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorClient {
    base_url: String,
}

impl MirrorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn listing_url(&self, folder: &str) -> String {
        format!("{}/api/listing{}", self.base_url, folder)
    }

    pub fn metadata_url(&self, file: &str) -> String {
        format!("{}/api{}", self.base_url, file)
    }

    pub fn sysinfo_url(&self) -> String {
        format!("{}/api/sysinfo", self.base_url)
    }

    pub async fn fetch_listing(&self, folder: &str) -> Result<Vec<ListingEntry>, FetchError> {
        self.get_json(&self.listing_url(folder)).await
    }

    /// Fetch a metadata document by an already-built URL.
    pub async fn fetch_metadata_at(&self, url: &str) -> Result<TrackMetadata, FetchError> {
        self.get_json(url).await
    }

    pub async fn fetch_sysinfo(&self) -> Result<SysInfo, FetchError> {
        self.get_json(&self.sysinfo_url()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {url}");
        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        decode_response(status, &body)
    }
}

/// Media URLs served outside `/api`.
pub fn download_url(path: &str) -> String {
    format!("{path}?download")
}

pub fn raw_file_url(path: &str) -> String {
    format!("/file{path}")
}

pub fn poster_url(path: &str) -> String {
    format!("/poster{path}")
}
