use crate::api::MirrorClient;
use crate::browser::{BrowseDialog, EntryAction, FolderNode};
use crate::components::platform;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

/// Collapsible sidebar tree of the whole mirror.
#[component]
pub fn FolderTree() -> Element {
    let client = use_context::<MirrorClient>();
    let mut nodes = use_signal(Vec::<FolderNode>::new);
    let mut hidden = use_signal(|| true);

    use_hook(move || {
        spawn(async move {
            match client.fetch_listing("/").await {
                Ok(listing) => nodes.set(FolderNode::from_listing("/", &listing)),
                Err(err) => error!("failed to load folder tree: {err}"),
            }
        });
    });

    let sidebar_class = if hidden() { "dp-sbdiv dp-sbdivhid" } else { "dp-sbdiv" };

    rsx! {
        div { id: "sidebardp", class: sidebar_class,
            button {
                id: "togglesidebar",
                r#type: "button",
                onclick: move |_| hidden.toggle(),
                "☰"
            }
            ul { id: "dp-sb-cat",
                for node in nodes() {
                    TreeItem { key: "{node.path}", node, nodes }
                }
            }
        }
    }
}

#[component]
fn TreeItem(node: FolderNode, nodes: Signal<Vec<FolderNode>>) -> Element {
    let client = use_context::<MirrorClient>();
    let mut tree = nodes;
    let action = node.action();
    let path = node.path.clone();

    let on_click = move |evt: Event<MouseData>| {
        evt.stop_propagation();
        match &action {
            EntryAction::Open(href) => platform::navigate(href),
            EntryAction::Expand(_) => {
                let fetch = FolderNode::find_mut(&mut tree.write(), &path).and_then(FolderNode::toggle);
                let Some(folder) = fetch else {
                    return;
                };
                let client = client.clone();
                spawn(async move {
                    match client.fetch_listing(&folder).await {
                        Ok(listing) => {
                            if let Some(node) = FolderNode::find_mut(&mut tree.write(), &folder) {
                                node.set_children(&listing);
                            }
                        }
                        Err(err) => error!("failed to list {folder}: {err}"),
                    }
                });
            }
        }
    };

    let class = if node.open {
        format!("{} open", node.kind.css_class())
    } else {
        node.kind.css_class().to_string()
    };

    rsx! {
        li { class, onclick: on_click,
            "{node.name}"
            if !node.children.is_empty() {
                ul {
                    for child in node.children.iter().cloned() {
                        TreeItem { key: "{child.path}", node: child, nodes }
                    }
                }
            }
        }
    }
}

/// Path field with a dialog for picking a folder on the mirror.
#[component]
pub fn FolderPicker(name: String) -> Element {
    let client = use_context::<MirrorClient>();
    let mut dialog = use_signal(BrowseDialog::default);
    let mut value = use_signal(String::new);
    let mut folders = use_signal(Vec::<FolderNode>::new);

    // Refresh the folder list whenever the dialog moves somewhere new.
    use_effect(move || {
        let state = dialog();
        if !state.visible {
            return;
        }
        let client = client.clone();
        let browsing = state.browsing.clone();
        spawn(async move {
            match client.fetch_listing(&browsing).await {
                Ok(listing) => {
                    let only_folders: Vec<_> =
                        listing.into_iter().filter(|entry| entry.is_folder()).collect();
                    folders.set(FolderNode::from_listing(&browsing, &only_folders));
                }
                Err(err) => error!("failed to browse {browsing}: {err}"),
            }
        });
    });

    let state = dialog();
    let parent = parent_folder(&state.browsing);

    rsx! {
        input {
            id: "path",
            name: "{name}",
            value: "{value}",
            oninput: move |evt| value.set(evt.value()),
        }
        button {
            r#type: "button",
            onclick: move |_| dialog.write().open(),
            "Browse"
        }
        div {
            id: "browse_dialog",
            style: if state.visible { "display: block" } else { "display: none" },
            p { "{state.browsing}" }
            ul {
                if let Some(parent) = parent {
                    li {
                        class: "folder",
                        onclick: move |_| dialog.write().browse(&parent),
                        ".."
                    }
                }
                for folder in folders() {
                    li {
                        key: "{folder.path}",
                        class: "folder",
                        onclick: {
                            let path = folder.path.clone();
                            move |_| dialog.write().browse(&path)
                        },
                        "{folder.name}"
                    }
                }
            }
            button {
                r#type: "button",
                onclick: move |_| {
                    let chosen = dialog.write().select();
                    value.set(chosen);
                },
                "Select"
            }
            button {
                r#type: "button",
                onclick: move |_| dialog.write().close(),
                "Cancel"
            }
        }
    }
}

/// `/a/b/` → `/a/`; `None` at the root.
fn parent_folder(folder: &str) -> Option<String> {
    let trimmed = folder.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    let cut = trimmed.rfind('/')?;
    Some(trimmed[..=cut].to_string())
}

#[cfg(test)]
mod tests {
    use super::parent_folder;

    #[test]
    fn parent_of_nested_folder() {
        assert_eq!(parent_folder("/a/b/").as_deref(), Some("/a/"));
        assert_eq!(parent_folder("/a/").as_deref(), Some("/"));
        assert_eq!(parent_folder("/"), None);
        assert_eq!(parent_folder(""), None);
    }
}
