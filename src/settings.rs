use crate::format_bytes::ByteUnits;
use crate::sysinfo::SYSINFO_POLL_INTERVAL_MS;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "mirrorview.settings";

/// Front-end settings. Missing keys take their defaults, so settings saved
/// by an older build keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API origin. Empty means the page's own origin.
    pub base_url: String,
    /// Suffix of every document title.
    pub site_name: String,
    pub byte_units: ByteUnits,
    /// Initial state of the autoplay checkbox.
    pub autoplay: bool,
    pub sysinfo_poll_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            site_name: "MARMAK Mirror".to_string(),
            byte_units: ByteUnits::Binary,
            autoplay: true,
            sysinfo_poll_ms: SYSINFO_POLL_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Poll interval with a floor, so a bad stored value cannot hammer the
    /// server.
    pub fn poll_interval_ms(&self) -> u32 {
        self.sysinfo_poll_ms.max(500)
    }

    /// Origin for API requests: the configured one, or `page_origin`.
    pub fn api_origin<'a>(&'a self, page_origin: &'a str) -> &'a str {
        if self.base_url.trim().is_empty() {
            page_origin
        } else {
            self.base_url.trim()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> Settings {
    match LocalStorage::get::<Settings>(SETTINGS_KEY) {
        Ok(settings) => settings,
        Err(StorageError::KeyNotFound(_)) => Settings::default(),
        Err(err) => {
            warn!("stored settings unreadable, using defaults: {err}");
            Settings::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> Settings {
    Settings::default()
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &Settings) -> Result<(), StorageError> {
    LocalStorage::set(SETTINGS_KEY, settings)
}
