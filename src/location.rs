//! Page-location helpers: which page a pathname routes to, which folder and
//! file a player page was opened on, how track paths are spelled, and the `t`
//! start-offset parameter.

use crate::playlist::MediaKind;
use std::borrow::Cow;

/// Decode a percent-encoded path component, keeping the raw text when it is
/// not valid UTF-8 after decoding.
pub fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Percent-encode every segment of a path, keeping the separators.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Folder (decoded, without trailing slash) and file (decoded) of a page
/// pathname such as `/music/My%20Album/01.mp3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub folder: String,
    pub file: String,
}

impl PageLocation {
    pub fn from_pathname(pathname: &str) -> Self {
        let (folder, file) = match pathname.rsplit_once('/') {
            Some((folder, file)) => (folder, file),
            None => ("", pathname),
        };
        Self {
            folder: decode_component(folder),
            file: decode_component(file),
        }
    }
}

/// What a pathname renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    /// Audio or video file: the player page.
    Player(MediaKind),
    /// Admin area: system usage and the folder picker.
    Admin,
    /// Anything else is a folder listing with the sidebar tree.
    Browse,
}

impl PageRoute {
    pub fn from_pathname(pathname: &str) -> Self {
        if pathname == "/admin" || pathname.starts_with("/admin/") {
            return Self::Admin;
        }
        let file = PageLocation::from_pathname(pathname).file;
        match MediaKind::for_file(&file) {
            Some(kind) => Self::Player(kind),
            None => Self::Browse,
        }
    }
}

/// Path of a sibling track: `folder/` plus the percent-encoded file name.
pub fn track_path(folder: &str, file: &str) -> String {
    format!("{}/{}", folder, encode_component(file))
}

/// Last segment of a path, decoded.
pub fn file_name(path: &str) -> String {
    decode_component(path.rsplit('/').next().unwrap_or(path))
}

/// Value of `name` in a `?a=b&c=d` query string, with `+` read as space.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode_component(&value.replace('+', " ")))
}

/// Parse a start offset: plain seconds (`90`), unit groups (`1h2m3s`,
/// `1m30s`) or clock form (`1:30`, `1:02:03`).
pub fn parse_start_time(raw: &str) -> Option<u64> {
    let text = raw.trim().to_ascii_lowercase();
    if text.is_empty() {
        return None;
    }
    if text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok();
    }

    let mut total = 0u64;
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let scale = match ch {
            'h' => Some(3600),
            'm' => Some(60),
            's' => Some(1),
            _ => None,
        };
        if let Some(scale) = scale {
            if !digits.is_empty() {
                let value = digits.parse::<u64>().ok()?;
                total = value.checked_mul(scale)?.checked_add(total)?;
            }
        }
        digits.clear();
    }
    if total > 0 {
        return Some(total);
    }

    if text.contains(':') {
        let parts = text
            .split(':')
            .map(|part| part.trim().parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;
        return match parts.as_slice() {
            [m, s] => m.checked_mul(60)?.checked_add(*s),
            [h, m, s] => h
                .checked_mul(3600)?
                .checked_add(m.checked_mul(60)?)?
                .checked_add(*s),
            _ => None,
        };
    }

    None
}
