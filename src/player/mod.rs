//! Player controller for the audio and video pages.
//!
//! One controller is built per page load. It owns the sibling playlist and the
//! playback state, and reaches the page only through [`PlayerView`] and
//! [`MediaSession`]. Every move to a new track bumps a sequence number; the
//! metadata response for that track is applied only while its number is
//! still the latest, so a slow response for an older track never repaints
//! the panel.

mod history;
mod panel;
mod view;

pub use history::*;
pub use panel::*;
pub use view::*;

use crate::api::{FetchError, MirrorClient, TrackMetadata};
use crate::location::track_path;
use crate::playlist::{MediaKind, TrackList};
use crate::volume::volume_cookie;
use dioxus::logger::tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPhase {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
    Ended,
}

/// Why a track is being loaded. Decides what happens to browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCause {
    /// The track named in the page URL.
    Start,
    /// Prev/next buttons or keyboard shortcuts.
    Transport,
    /// OS media keys.
    MediaSession,
    /// Autoplay after the previous track finished.
    TrackEnded,
    /// Back/forward.
    History,
}

impl NavigationCause {
    fn pushes_history(self) -> bool {
        matches!(self, Self::Transport | Self::MediaSession | Self::TrackEnded)
    }
}

/// A metadata fetch the page should issue for a freshly loaded track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRequest {
    pub seq: u64,
    pub index: usize,
    pub path: String,
}

impl MetadataRequest {
    pub fn url(&self, client: &MirrorClient) -> String {
        client.metadata_url(&self.path)
    }
}

/// Fixed facts about the page a controller serves.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPage {
    pub kind: MediaKind,
    /// Decoded folder path without trailing slash.
    pub folder: String,
    pub cover: Option<String>,
    pub site_name: String,
}

pub struct PlayerController<V, S> {
    page: PlayerPage,
    tracks: TrackList,
    current: Option<usize>,
    autoplay: bool,
    volume: f64,
    phase: PlayerPhase,
    seq: u64,
    pending_seek: Option<u64>,
    view: V,
    session: S,
}

impl<V: PlayerView, S: MediaSession> PlayerController<V, S> {
    pub fn new(page: PlayerPage, tracks: TrackList, view: V, session: S) -> Self {
        Self {
            page,
            tracks,
            current: None,
            autoplay: true,
            volume: 1.0,
            phase: PlayerPhase::Idle,
            seq: 0,
            pending_seek: None,
            view,
            session,
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = clamp_volume(volume);
        self
    }

    /// Seconds to seek to once the first track has data.
    pub fn with_start_offset(mut self, seconds: Option<u64>) -> Self {
        self.pending_seek = seconds;
        self
    }

    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn current_path(&self) -> Option<String> {
        let name = self.tracks.get(self.current?)?;
        Some(track_path(&self.page.folder, name))
    }

    /// Load the file the page was opened on. A file missing from the
    /// playlist leaves the player idle with only `next` offered.
    pub fn start(&mut self, current_file: &str) -> Option<MetadataRequest> {
        match self.tracks.index_of(current_file) {
            Some(index) => self.load(index, NavigationCause::Start),
            None => {
                info!(
                    "{current_file} is not among {} playable files in {}",
                    self.tracks.len(),
                    self.page.folder
                );
                self.current = None;
                self.phase = PlayerPhase::Idle;
                self.view
                    .set_transport(TransportVisibility::at(None, self.tracks.len()));
                None
            }
        }
    }

    pub fn next(&mut self, cause: NavigationCause) -> Option<MetadataRequest> {
        let target = self.current.map_or(0, |index| index + 1);
        if target >= self.tracks.len() {
            return None;
        }
        self.load(target, cause)
    }

    pub fn previous(&mut self, cause: NavigationCause) -> Option<MetadataRequest> {
        let target = self.current?.checked_sub(1)?;
        self.load(target, cause)
    }

    pub fn on_playing(&mut self) {
        if matches!(
            self.phase,
            PlayerPhase::Loading | PlayerPhase::Paused | PlayerPhase::Ended
        ) {
            self.phase = PlayerPhase::Playing;
        }
    }

    pub fn on_paused(&mut self) {
        if self.phase == PlayerPhase::Playing {
            self.phase = PlayerPhase::Paused;
        }
    }

    /// End of track. Moves on only with autoplay and a following track;
    /// otherwise Ended holds until the user navigates.
    pub fn on_ended(&mut self) -> Option<MetadataRequest> {
        if self.current.is_none() {
            return None;
        }
        self.phase = PlayerPhase::Ended;
        if !self.autoplay {
            return None;
        }
        self.next(NavigationCause::TrackEnded)
    }

    /// The media element has data; returns the start offset to seek to,
    /// once, clamped to the track length.
    pub fn on_loaded_data(&mut self, duration: f64) -> Option<f64> {
        let seconds = self.pending_seek.take()? as f64;
        if duration.is_finite() {
            Some(seconds.min(duration).max(0.0))
        } else {
            Some(seconds)
        }
    }

    pub fn on_popstate(&mut self, state: Option<&str>) -> Option<MetadataRequest> {
        let Some(entry) = HistoryEntry::from_state(state) else {
            debug!("ignoring popstate without player state");
            return None;
        };
        if entry.index >= self.tracks.len() {
            warn!(
                "ignoring popstate for track {} of {}",
                entry.index,
                self.tracks.len()
            );
            return None;
        }
        self.load(entry.index, NavigationCause::History)
    }

    /// Apply a metadata response. Returns whether the panel was repainted.
    pub fn apply_metadata(&mut self, seq: u64, result: Result<TrackMetadata, FetchError>) -> bool {
        if seq != self.seq {
            debug!("discarding metadata #{seq}, latest is #{}", self.seq);
            return false;
        }
        let Some(path) = self.current_path() else {
            return false;
        };
        let meta = match result {
            Ok(meta) => meta,
            Err(err) => {
                error!("failed to load metadata for {path}: {err}");
                return false;
            }
        };

        let artwork = self.artwork(&path);
        let panel = PanelContent::from_metadata(
            &meta,
            self.page.kind,
            &path,
            &artwork,
            &self.page.site_name,
        );
        self.view.render_panel(&panel);
        self.update_session(&NowPlaying::from_metadata(
            &meta,
            self.page.kind,
            &path,
            &artwork,
        ));
        true
    }

    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    /// Store a new volume and return the cookie assignment that persists it.
    pub fn set_volume(&mut self, volume: f64) -> String {
        self.volume = clamp_volume(volume);
        volume_cookie(self.volume)
    }

    fn load(&mut self, index: usize, cause: NavigationCause) -> Option<MetadataRequest> {
        let name = self.tracks.get(index)?;
        let path = track_path(&self.page.folder, name);

        self.seq += 1;
        self.current = Some(index);
        self.phase = PlayerPhase::Loading;
        debug!("loading track {index} ({path}) via {cause:?}");

        self.view.set_source(&media_source(self.page.kind, &path));
        self.view.request_play();
        self.view
            .set_transport(TransportVisibility::at(self.current, self.tracks.len()));

        let artwork = self.artwork(&path);
        self.update_session(&NowPlaying::provisional(&path, &artwork));

        if cause.pushes_history() {
            self.view.push_history(&HistoryEntry {
                index,
                path: path.clone(),
            });
        } else if cause == NavigationCause::Start {
            self.view.replace_history(&HistoryEntry {
                index,
                path: path.clone(),
            });
        }

        Some(MetadataRequest {
            seq: self.seq,
            index,
            path,
        })
    }

    fn artwork(&self, path: &str) -> String {
        artwork_url(
            self.page.kind,
            &self.page.folder,
            path,
            self.page.cover.as_deref(),
        )
    }

    fn update_session(&mut self, now_playing: &NowPlaying) {
        if let Err(err) = self.session.set_metadata(now_playing) {
            warn!("media session update skipped: {err}");
        }
    }
}

fn clamp_volume(volume: f64) -> f64 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        1.0
    }
}
