use crate::api::MirrorClient;
use crate::components::platform::{self, BrowserMediaSession};
use crate::components::Breadcrumbs;
use crate::location::{parse_start_time, query_param, PageLocation};
use crate::player::*;
use crate::playlist::{find_cover, MediaKind, TrackList};
use crate::settings::Settings;
use crate::volume::read_volume;
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use serde::Deserialize;

type Controller = PlayerController<SignalView, BrowserMediaSession>;

/// Page surface for the controller: transport and panel live in signals the
/// page renders, media and history go straight to the browser.
#[derive(Clone, Copy)]
pub struct SignalView {
    kind: MediaKind,
    panel: Signal<Option<PanelContent>>,
    transport: Signal<TransportVisibility>,
}

impl PlayerView for SignalView {
    fn set_source(&mut self, url: &str) {
        platform::set_media_source(self.kind.element_id(), url);
    }

    fn request_play(&mut self) {
        platform::play_media(self.kind.element_id());
    }

    fn set_transport(&mut self, visibility: TransportVisibility) {
        self.transport.set(visibility);
    }

    fn render_panel(&mut self, panel: &PanelContent) {
        platform::set_document_title(&panel.document_title);
        self.panel.set(Some(panel.clone()));
    }

    fn push_history(&mut self, entry: &HistoryEntry) {
        platform::push_history(entry);
    }

    fn replace_history(&mut self, entry: &HistoryEntry) {
        platform::replace_history(entry);
    }
}

/// Messages posted from the page script: back/forward and OS media keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum BridgeMessage {
    Popstate {
        #[serde(default)]
        state: Option<String>,
    },
    Previoustrack,
    Nexttrack,
}

const BRIDGE_SCRIPT: &str = r#"
window.addEventListener("popstate", (event) => {
  const state = typeof event.state === "string" ? event.state : null;
  dioxus.send({ kind: "popstate", state });
});
if ("mediaSession" in navigator) {
  try {
    navigator.mediaSession.setActionHandler("previoustrack", () => dioxus.send({ kind: "previoustrack" }));
    navigator.mediaSession.setActionHandler("nexttrack", () => dioxus.send({ kind: "nexttrack" }));
  } catch (_err) {}
}
"#;

fn spawn_metadata_fetch(
    client: MirrorClient,
    mut controller: Signal<Option<Controller>>,
    request: Option<MetadataRequest>,
) {
    let Some(request) = request else {
        return;
    };
    spawn(async move {
        let result = client.fetch_metadata_at(&request.url(&client)).await;
        if let Some(player) = controller.write().as_mut() {
            player.apply_metadata(request.seq, result);
        }
    });
}

/// Shared audio/video player page.
#[component]
pub fn MediaPage(kind: MediaKind, pathname: String, search: String) -> Element {
    let mut settings = use_context::<Signal<Settings>>();
    let client = use_context::<MirrorClient>();
    let panel = use_signal(|| None::<PanelContent>);
    let transport = use_signal(|| TransportVisibility::at(None, 0));
    let mut autoplay = use_signal(|| settings.peek().autoplay);
    let mut controller = use_signal(|| None::<Controller>);
    let element_id = kind.element_id();

    // Listing → playlist → controller, once per page load.
    {
        let client = client.clone();
        let location = PageLocation::from_pathname(&pathname);
        let start_offset = query_param(&search, "t").and_then(|t| parse_start_time(&t));
        use_hook(move || {
            spawn(async move {
                let listing = match client.fetch_listing(&location.folder).await {
                    Ok(listing) => listing,
                    Err(err) => {
                        error!("failed to fetch file list for {}: {err}", location.folder);
                        return;
                    }
                };
                let page = PlayerPage {
                    kind,
                    folder: location.folder.clone(),
                    cover: match kind {
                        MediaKind::Audio => find_cover(&listing),
                        MediaKind::Video => None,
                    },
                    site_name: settings.peek().site_name.clone(),
                };
                let view = SignalView {
                    kind,
                    panel,
                    transport,
                };
                let mut player = PlayerController::new(
                    page,
                    TrackList::build(&listing, kind),
                    view,
                    BrowserMediaSession,
                )
                .with_autoplay(*autoplay.peek())
                .with_start_offset(start_offset);
                if let Some(volume) = read_volume(&platform::read_cookies()) {
                    player = player.with_volume(volume);
                    platform::set_media_volume(kind.element_id(), volume);
                }

                let request = player.start(&location.file);
                controller.set(Some(player));
                spawn_metadata_fetch(client, controller, request);
            });
        });
    }

    // Back/forward and media keys arrive through the page script.
    {
        let client = client.clone();
        use_hook(move || {
            spawn(async move {
                let mut bridge = document::eval(BRIDGE_SCRIPT);
                loop {
                    let message = match bridge.recv::<BridgeMessage>().await {
                        Ok(message) => message,
                        Err(err) => {
                            warn!("page bridge closed: {err:?}");
                            break;
                        }
                    };
                    let request = controller.write().as_mut().and_then(|player| match message {
                        BridgeMessage::Popstate { state } => player.on_popstate(state.as_deref()),
                        BridgeMessage::Previoustrack => {
                            player.previous(NavigationCause::MediaSession)
                        }
                        BridgeMessage::Nexttrack => player.next(NavigationCause::MediaSession),
                    });
                    spawn_metadata_fetch(client.clone(), controller, request);
                }
            });
        });
    }

    let on_previous = {
        let client = client.clone();
        move |_| {
            let request = controller
                .write()
                .as_mut()
                .and_then(|player| player.previous(NavigationCause::Transport));
            spawn_metadata_fetch(client.clone(), controller, request);
        }
    };
    let on_next = {
        let client = client.clone();
        move |_| {
            let request = controller
                .write()
                .as_mut()
                .and_then(|player| player.next(NavigationCause::Transport));
            spawn_metadata_fetch(client.clone(), controller, request);
        }
    };
    let on_ended = {
        let client = client.clone();
        move |_| {
            let request = controller.write().as_mut().and_then(|player| player.on_ended());
            spawn_metadata_fetch(client.clone(), controller, request);
        }
    };
    let on_playing = move |_| {
        if let Some(player) = controller.write().as_mut() {
            player.on_playing();
        }
    };
    let on_pause = move |_| {
        if let Some(player) = controller.write().as_mut() {
            player.on_paused();
        }
    };
    let on_volume = move |_| {
        let Some(volume) = platform::media_volume(element_id) else {
            return;
        };
        if let Some(player) = controller.write().as_mut() {
            platform::write_cookie(&player.set_volume(volume));
        }
    };
    let on_loaded = move |_| {
        let duration = platform::media_duration(element_id);
        let seek = controller
            .write()
            .as_mut()
            .and_then(|player| player.on_loaded_data(duration));
        if let Some(seconds) = seek {
            platform::seek_media(element_id, seconds);
        }
    };
    let on_autoplay = move |evt: Event<FormData>| {
        let enabled = evt.checked();
        autoplay.set(enabled);
        if let Some(player) = controller.write().as_mut() {
            player.set_autoplay(enabled);
        }
        settings.write().autoplay = enabled;
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = crate::settings::save_settings(&settings.peek()) {
                warn!("failed to save autoplay preference: {err}");
            }
        }
    };

    let shown = transport();
    let content = panel();
    let previous_style = if shown.previous { "display: inline" } else { "display: none" };
    let next_style = if shown.next { "display: inline" } else { "display: none" };

    rsx! {
        div { class: "player",
            if let Some(content) = content.as_ref() {
                Breadcrumbs { crumbs: content.breadcrumbs.clone() }
            }
            match kind {
                MediaKind::Audio => rsx! {
                    if let Some(content) = content.as_ref() {
                        img {
                            id: "cover",
                            src: "{content.cover_src}",
                            alt: "{content.cover_alt}",
                        }
                    }
                    audio {
                        id: element_id,
                        controls: true,
                        onplaying: on_playing,
                        onpause: on_pause,
                        onended: on_ended,
                        onvolumechange: on_volume,
                        onloadeddata: on_loaded,
                    }
                },
                MediaKind::Video => rsx! {
                    video {
                        id: element_id,
                        controls: true,
                        poster: content.as_ref().map(|c| c.cover_src.clone()).unwrap_or_default(),
                        onplaying: on_playing,
                        onpause: on_pause,
                        onended: on_ended,
                        onvolumechange: on_volume,
                        onloadeddata: on_loaded,
                    }
                },
            }
            div { class: "transport",
                button {
                    id: "previous",
                    r#type: "button",
                    style: previous_style,
                    onclick: on_previous,
                    "Previous"
                }
                label { r#for: "autoplay",
                    input {
                        id: "autoplay",
                        r#type: "checkbox",
                        checked: autoplay(),
                        onchange: on_autoplay,
                    }
                    "Autoplay"
                }
                button {
                    id: "next",
                    r#type: "button",
                    style: next_style,
                    onclick: on_next,
                    "Next"
                }
            }
            if let Some(content) = content {
                MetadataPanel { kind, content }
            }
        }
    }
}

#[component]
fn MetadataPanel(kind: MediaKind, content: PanelContent) -> Element {
    match kind {
        MediaKind::Audio => rsx! {
            dl { class: "metadata",
                dt { "Title" }
                dd { id: "title", "{content.title}" }
                dt { "Artist" }
                dd { id: "artist", "{content.artist}" }
                dt { "Album" }
                dd { id: "album", "{content.album}" }
                dt { "Year" }
                dd { id: "year", "{content.year}" }
                dt { "Genre" }
                dd { id: "genre", "{content.genre}" }
                dt { "Track" }
                dd { id: "track", "{content.track}" }
            }
            a { id: "download", href: "{content.download_href}", "Download" }
        },
        MediaKind::Video => rsx! {
            h1 { id: "title", "{content.title}" }
            div { id: "description", dangerous_inner_html: "{content.description}" }
            a { id: "download", href: "{content.download_href}", "Download" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::BridgeMessage;

    #[test]
    fn bridge_messages_deserialize() {
        let popstate: BridgeMessage =
            serde_json::from_str(r#"{"kind":"popstate","state":"{\"index\":1}"}"#).unwrap();
        assert_eq!(
            popstate,
            BridgeMessage::Popstate {
                state: Some(r#"{"index":1}"#.to_string())
            }
        );

        let empty: BridgeMessage = serde_json::from_str(r#"{"kind":"popstate","state":null}"#).unwrap();
        assert_eq!(empty, BridgeMessage::Popstate { state: None });

        let next: BridgeMessage = serde_json::from_str(r#"{"kind":"nexttrack"}"#).unwrap();
        assert_eq!(next, BridgeMessage::Nexttrack);
    }

    #[test]
    fn unknown_bridge_message_is_rejected() {
        assert!(serde_json::from_str::<BridgeMessage>(r#"{"kind":"seekto"}"#).is_err());
    }
}
