// Browser glue behind the player and widgets. Every helper has a wasm body
// and an inert native twin so the crate builds and tests off-browser.
use crate::player::{HistoryEntry, MediaSession, NowPlaying, SessionError};

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, warn};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlDocument, HtmlMediaElement};

/// Pathname, query string and origin of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageUrl {
    pub pathname: String,
    pub search: String,
    pub origin: String,
}

#[cfg(target_arch = "wasm32")]
pub fn page_url() -> PageUrl {
    let Some(location) = window().map(|w| w.location()) else {
        return PageUrl::default();
    };
    PageUrl {
        pathname: location.pathname().unwrap_or_default(),
        search: location.search().unwrap_or_default(),
        origin: location.origin().unwrap_or_default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_url() -> PageUrl {
    PageUrl {
        pathname: "/".to_string(),
        ..PageUrl::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn media_element(id: &str) -> Option<HtmlMediaElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlMediaElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
pub fn set_media_source(id: &str, url: &str) {
    match media_element(id) {
        Some(media) => media.set_src(url),
        None => warn!("no #{id} element to load {url} into"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_media_source(_id: &str, _url: &str) {}

/// Ask the element to play. Autoplay policies may refuse; that is not an error.
#[cfg(target_arch = "wasm32")]
pub fn play_media(id: &str) {
    let Some(media) = media_element(id) else {
        warn!("no #{id} element to play");
        return;
    };
    match media.play() {
        Ok(promise) => {
            let id = id.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    debug!("#{id} play() refused: {err:?}");
                }
            });
        }
        Err(err) => warn!("#{id} play() failed: {err:?}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn play_media(_id: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn media_volume(id: &str) -> Option<f64> {
    media_element(id).map(|media| media.volume())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn media_volume(_id: &str) -> Option<f64> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn set_media_volume(id: &str, volume: f64) {
    if let Some(media) = media_element(id) {
        media.set_volume(volume);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_media_volume(_id: &str, _volume: f64) {}

#[cfg(target_arch = "wasm32")]
pub fn media_duration(id: &str) -> f64 {
    media_element(id).map_or(f64::NAN, |media| media.duration())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn media_duration(_id: &str) -> f64 {
    f64::NAN
}

#[cfg(target_arch = "wasm32")]
pub fn seek_media(id: &str, seconds: f64) {
    if let Some(media) = media_element(id) {
        media.set_current_time(seconds);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_media(_id: &str, _seconds: f64) {}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

#[cfg(target_arch = "wasm32")]
pub fn read_cookies() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_cookies() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
pub fn write_cookie(assignment: &str) {
    if let Some(doc) = html_document() {
        if doc.set_cookie(assignment).is_err() {
            warn!("could not store cookie {assignment}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_cookie(_assignment: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn set_document_title(title: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_document_title(_title: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn push_history(entry: &HistoryEntry) {
    write_history(entry, true);
}

#[cfg(target_arch = "wasm32")]
pub fn replace_history(entry: &HistoryEntry) {
    write_history(entry, false);
}

#[cfg(target_arch = "wasm32")]
fn write_history(entry: &HistoryEntry, push: bool) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = JsValue::from_str(&entry.to_state());
    let result = if push {
        history.push_state_with_url(&state, "", Some(&entry.path))
    } else {
        history.replace_state_with_url(&state, "", Some(&entry.path))
    };
    if let Err(err) = result {
        warn!("history update for {} failed: {err:?}", entry.path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn push_history(_entry: &HistoryEntry) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace_history(_entry: &HistoryEntry) {}

#[cfg(target_arch = "wasm32")]
pub fn navigate(href: &str) {
    let Some(location) = window().map(|w| w.location()) else {
        warn!("no window to navigate to {href}");
        return;
    };
    if let Err(err) = location.set_href(href) {
        warn!("navigation to {href} failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(_href: &str) {}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// `navigator.mediaSession`, reached through reflection so no unstable
/// web-sys APIs are needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserMediaSession;

#[cfg(target_arch = "wasm32")]
impl MediaSession for BrowserMediaSession {
    fn set_metadata(&mut self, now_playing: &NowPlaying) -> Result<(), SessionError> {
        use js_sys::{Array, Function, Object, Reflect};

        let rejected = |err: JsValue| SessionError::Rejected(format!("{err:?}"));
        let window = window().ok_or(SessionError::Unavailable)?;
        let session = Reflect::get(&window.navigator(), &"mediaSession".into())
            .map_err(rejected)?;
        if session.is_undefined() || session.is_null() {
            return Err(SessionError::Unavailable);
        }
        let constructor = Reflect::get(&window, &"MediaMetadata".into())
            .map_err(rejected)?
            .dyn_into::<Function>()
            .map_err(|_| SessionError::Unavailable)?;

        let init = Object::new();
        Reflect::set(&init, &"title".into(), &now_playing.title.as_str().into())
            .map_err(rejected)?;
        if let Some(artist) = &now_playing.artist {
            Reflect::set(&init, &"artist".into(), &artist.as_str().into()).map_err(rejected)?;
        }
        if let Some(album) = &now_playing.album {
            Reflect::set(&init, &"album".into(), &album.as_str().into()).map_err(rejected)?;
        }
        let artwork = Object::new();
        Reflect::set(&artwork, &"src".into(), &now_playing.artwork.as_str().into())
            .map_err(rejected)?;
        Reflect::set(&init, &"artwork".into(), &Array::of1(&artwork)).map_err(rejected)?;

        let metadata = Reflect::construct(&constructor, &Array::of1(&init)).map_err(rejected)?;
        Reflect::set(&session, &"metadata".into(), &metadata).map_err(rejected)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaSession for BrowserMediaSession {
    fn set_metadata(&mut self, _now_playing: &NowPlaying) -> Result<(), SessionError> {
        Err(SessionError::Unavailable)
    }
}
