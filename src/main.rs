use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod breadcrumbs;
mod browser;
mod components;
mod format_bytes;
mod location;
mod player;
mod playlist;
mod settings;
mod sysinfo;
mod volume;

use components::App;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    rsx! {
        document::Stylesheet { href: APP_CSS }
        App {}
    }
}
