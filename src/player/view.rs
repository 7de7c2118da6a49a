use super::history::HistoryEntry;
use super::panel::{NowPlaying, PanelContent};
use thiserror::Error;

/// Which transport buttons are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportVisibility {
    pub previous: bool,
    pub next: bool,
}

impl TransportVisibility {
    pub fn at(index: Option<usize>, len: usize) -> Self {
        match index {
            Some(index) => Self {
                previous: index > 0,
                next: index + 1 < len,
            },
            None => Self {
                previous: false,
                next: len > 0,
            },
        }
    }
}

/// Page surface the controller drives. The web build backs this with the
/// media element, history API and panel signals; tests record calls.
pub trait PlayerView {
    fn set_source(&mut self, url: &str);
    fn request_play(&mut self);
    fn set_transport(&mut self, visibility: TransportVisibility);
    fn render_panel(&mut self, panel: &PanelContent);
    fn push_history(&mut self, entry: &HistoryEntry);
    /// Stamp the current entry, used for the page's own track so that
    /// navigating back to it carries state too.
    fn replace_history(&mut self, entry: &HistoryEntry);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("media session is not available")]
    Unavailable,
    #[error("media session rejected metadata: {0}")]
    Rejected(String),
}

/// OS now-playing integration. Failures never stop playback.
pub trait MediaSession {
    fn set_metadata(&mut self, now_playing: &NowPlaying) -> Result<(), SessionError>;
}
