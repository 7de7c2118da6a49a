//! Dioxus components for the player, sysinfo and folder pages.

mod app;
mod breadcrumbs;
mod folder_tree;
mod media_page;
pub(crate) mod platform;
mod sysinfo_panel;

pub use app::*;
pub use breadcrumbs::*;
pub use folder_tree::*;
pub use media_page::*;
pub use sysinfo_panel::*;
