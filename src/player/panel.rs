use crate::api::{download_url, poster_url, raw_file_url, TrackMetadata};
use crate::breadcrumbs::{breadcrumbs, Crumb};
use crate::location::{decode_component, encode_component, file_name};
use crate::playlist::MediaKind;

const MISSING: &str = "N/A";

/// Everything the metadata panel shows for one track.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelContent {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub genre: String,
    pub track: String,
    /// Server-provided HTML, video pages only.
    pub description: String,
    pub download_href: String,
    pub cover_src: String,
    pub cover_alt: String,
    pub breadcrumbs: Vec<Crumb>,
    pub document_title: String,
}

/// What the OS now-playing widget gets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NowPlaying {
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub artwork: String,
}

/// Where a track's artwork lives: the folder cover for audio when there is
/// one, otherwise the server-generated poster.
pub fn artwork_url(kind: MediaKind, folder: &str, path: &str, cover: Option<&str>) -> String {
    match (kind, cover) {
        (MediaKind::Audio, Some(cover)) => format!("{}/{}", folder, encode_component(cover)),
        _ => poster_url(path),
    }
}

pub fn media_source(kind: MediaKind, path: &str) -> String {
    match kind {
        MediaKind::Audio => download_url(path),
        MediaKind::Video => raw_file_url(path),
    }
}

impl PanelContent {
    pub fn from_metadata(
        meta: &TrackMetadata,
        kind: MediaKind,
        path: &str,
        artwork: &str,
        site_name: &str,
    ) -> Self {
        let fallback = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.into());
        let title = meta.title.clone().unwrap_or_else(|| file_name(path));
        let download_href = media_source(kind, path);

        Self {
            document_title: format!("{title} - {site_name}"),
            title,
            artist: fallback(&meta.artist),
            album: fallback(&meta.album),
            year: fallback(&meta.year),
            genre: fallback(&meta.genre),
            track: meta
                .track
                .as_ref()
                .map(|track| format!("{track}."))
                .unwrap_or_default(),
            description: meta.description.clone().unwrap_or_default(),
            download_href,
            cover_src: artwork.to_string(),
            cover_alt: fallback(&meta.album),
            breadcrumbs: breadcrumbs(&decode_component(path)),
        }
    }
}

impl NowPlaying {
    /// Placeholder shown while a track's tags are still on the way.
    pub fn provisional(path: &str, artwork: &str) -> Self {
        Self {
            title: file_name(path),
            artist: None,
            album: None,
            artwork: artwork.to_string(),
        }
    }

    pub fn from_metadata(meta: &TrackMetadata, kind: MediaKind, path: &str, artwork: &str) -> Self {
        let (artist, album) = match kind {
            MediaKind::Audio => (meta.artist.clone(), meta.album.clone()),
            MediaKind::Video => (None, None),
        };
        Self {
            title: meta.title.clone().unwrap_or_else(|| file_name(path)),
            artist,
            album,
            artwork: artwork.to_string(),
        }
    }
}
