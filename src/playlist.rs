//! Sibling-track playlists built from a directory listing.

use crate::api::ListingEntry;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "m4b", "flac", "wav"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm"];
const COVER_NAMES: &[&str] = &["cover.jpg", "cover.png", "folder.jpg", "folder.png"];

/// Which player page is in charge and which files it pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Audio => AUDIO_EXTENSIONS,
            Self::Video => VIDEO_EXTENSIONS,
        }
    }

    /// Case-insensitive extension check on a file name.
    pub fn matches(self, name: &str) -> bool {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions().iter().any(|allowed| *allowed == ext)
    }

    pub fn for_file(name: &str) -> Option<Self> {
        [Self::Audio, Self::Video]
            .into_iter()
            .find(|kind| kind.matches(name))
    }

    pub fn element_id(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

/// Playable files of one folder, in listing order. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackList {
    names: Vec<String>,
}

impl TrackList {
    pub fn build(listing: &[ListingEntry], kind: MediaKind) -> Self {
        let names = listing
            .iter()
            .filter(|entry| kind.matches(&entry.name))
            .map(|entry| entry.name.clone())
            .collect();
        Self { names }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl FromIterator<String> for TrackList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Folder artwork file, if the listing has one. The last match wins.
pub fn find_cover(listing: &[ListingEntry]) -> Option<String> {
    listing
        .iter()
        .rev()
        .find(|entry| {
            let lower = entry.name.to_ascii_lowercase();
            COVER_NAMES.contains(&lower.as_str())
        })
        .map(|entry| entry.name.clone())
}
