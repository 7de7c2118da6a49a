use serde::{Deserialize, Deserializer, Serialize};

/// One row of `/api/listing{folder}`. Folders carry `ext == "folder"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListingEntry {
    pub name: String,
    #[serde(default)]
    pub ext: String,
}

impl ListingEntry {
    pub fn new(name: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ext: ext.into(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.ext == "folder"
    }
}

/// Per-file tag metadata served at `/api{file}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrackMetadata {
    #[serde(default, deserialize_with = "text_or_number")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub album: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub track: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiskInfo {
    #[serde(default, alias = "fs")]
    pub mount_point: String,
    #[serde(default)]
    pub used_space: u64,
    #[serde(default)]
    pub total_space: u64,
    #[serde(default)]
    pub used_space_readable: String,
    #[serde(default)]
    pub total_space_readable: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SysInfo {
    #[serde(default)]
    pub used_mem: u64,
    #[serde(default)]
    pub total_mem: u64,
    #[serde(default)]
    pub used_mem_readable: String,
    #[serde(default)]
    pub total_mem_readable: String,
    #[serde(default)]
    pub disks: Vec<DiskInfo>,
}

/// Tag servers are inconsistent about `year`/`track`: accept strings and
/// numbers, treat blanks and anything else as missing.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
