use crate::api::MirrorClient;
use crate::breadcrumbs::breadcrumbs;
use crate::components::platform::page_url;
use crate::components::{Breadcrumbs, FolderPicker, FolderTree, MediaPage, SysInfoPanel};
use crate::location::{decode_component, PageRoute};
use crate::settings::{load_settings, Settings};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

/// Root component: loads settings, shares the API client and picks the page
/// for the current pathname.
#[component]
pub fn App() -> Element {
    let settings = use_context_provider(|| Signal::new(load_settings()));
    let url = use_hook(page_url);
    use_context_provider(|| {
        let settings = settings.peek();
        MirrorClient::new(settings.api_origin(&url.origin))
    });

    let route = PageRoute::from_pathname(&url.pathname);
    use_hook(|| info!("rendering {:?} for {}", route, url.pathname));

    rsx! {
        match route {
            PageRoute::Player(kind) => rsx! {
                MediaPage { kind, pathname: url.pathname.clone(), search: url.search.clone() }
            },
            PageRoute::Admin => rsx! {
                AdminPage {}
            },
            PageRoute::Browse => rsx! {
                BrowsePage { pathname: url.pathname.clone() }
            },
        }
    }
}

#[component]
fn BrowsePage(pathname: String) -> Element {
    let crumbs = breadcrumbs(&decode_component(&pathname));
    rsx! {
        FolderTree {}
        Breadcrumbs { crumbs }
    }
}

#[component]
fn AdminPage() -> Element {
    let settings = use_context::<Signal<Settings>>();
    let site_name = settings.read().site_name.clone();
    rsx! {
        document::Title { "Admin - {site_name}" }
        SysInfoPanel {}
        form { class: "admin-path",
            label { r#for: "path", "Folder" }
            FolderPicker { name: "path" }
        }
    }
}
