//! Last-used volume, kept in the `audiovolume` cookie for every page.

pub const VOLUME_COOKIE: &str = "audiovolume";

/// First parseable `audiovolume` value in a `document.cookie` string.
pub fn read_volume(cookies: &str) -> Option<f64> {
    cookies
        .split(';')
        .map(str::trim_start)
        .filter_map(|cookie| cookie.strip_prefix(VOLUME_COOKIE)?.strip_prefix('='))
        .filter_map(|value| value.trim().parse::<f64>().ok())
        .find(|volume| (0.0..=1.0).contains(volume))
}

pub fn volume_cookie(volume: f64) -> String {
    format!("{VOLUME_COOKIE}={volume}; path=/")
}
