//! Folder tree for the sidebar and the folder-picking dialog.
//!
//! Listing entries are classified once into an [`EntryKind`]; the kind alone
//! decides the CSS class and what a click does.

use crate::api::ListingEntry;
use crate::location::{encode_component, encode_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    Image,
    Animation,
    Shape,
    Sound,
    Archive,
    File,
}

/// Result of clicking an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// Show or hide the children of this folder path.
    Expand(String),
    /// Navigate to this URL.
    Open(String),
}

impl EntryKind {
    pub fn classify(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "folder" => Self::Folder,
            "png" | "jpeg" | "jpg" | "svg" => Self::Image,
            "gif" | "mp4" | "3gp" => Self::Animation,
            "php" | "webp" | "java" | "jar" => Self::Shape,
            "mp3" | "wav" | "m4a" => Self::Sound,
            "zip" | "7z" => Self::Archive,
            _ => Self::File,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Image => "img",
            Self::Animation => "anm",
            Self::Shape => "shp",
            Self::Sound => "snd",
            Self::Archive => "zpi",
            Self::File => "file",
        }
    }

    /// Everything but plain files expands in place; the sidebar treats
    /// media and archives as browsable nodes.
    pub fn is_expandable(self) -> bool {
        self != Self::File
    }

    /// `parent` is a folder path ending in `/`.
    pub fn action(self, parent: &str, name: &str) -> EntryAction {
        if self.is_expandable() {
            EntryAction::Expand(format!("{parent}{name}/"))
        } else {
            EntryAction::Open(format!("{}{}", encode_path(parent), encode_component(name)))
        }
    }
}

/// One row of the tree. Children are present only while the node is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub name: String,
    /// Folder holding this entry, ending in `/`.
    pub parent: String,
    pub kind: EntryKind,
    pub path: String,
    pub open: bool,
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    pub fn from_entry(parent: &str, entry: &ListingEntry) -> Self {
        Self {
            name: entry.name.clone(),
            parent: parent.to_string(),
            kind: EntryKind::classify(&entry.ext),
            path: format!("{parent}{}/", entry.name),
            open: false,
            children: Vec::new(),
        }
    }

    pub fn from_listing(parent: &str, listing: &[ListingEntry]) -> Vec<Self> {
        listing
            .iter()
            .map(|entry| Self::from_entry(parent, entry))
            .collect()
    }

    pub fn action(&self) -> EntryAction {
        self.kind.action(&self.parent, &self.name)
    }

    /// Flip the node. Opening returns the folder whose listing should be
    /// fetched; closing drops the children.
    pub fn toggle(&mut self) -> Option<String> {
        if !self.kind.is_expandable() {
            return None;
        }
        if self.open {
            self.open = false;
            self.children.clear();
            None
        } else {
            self.open = true;
            Some(self.path.clone())
        }
    }

    /// Fill children for an opened node. Ignored if it was closed meanwhile.
    pub fn set_children(&mut self, listing: &[ListingEntry]) {
        if self.open {
            self.children = Self::from_listing(&self.path, listing);
        }
    }

    /// Depth-first lookup by node path.
    pub fn find_mut<'a>(nodes: &'a mut [FolderNode], path: &str) -> Option<&'a mut FolderNode> {
        for node in nodes.iter_mut() {
            if node.path == path {
                return Some(node);
            }
            if path.starts_with(&node.path) {
                if let Some(found) = Self::find_mut(&mut node.children, path) {
                    return Some(found);
                }
            }
        }
        None
    }
}

/// Folder-picking dialog: browses folders and writes the chosen path into
/// its target field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseDialog {
    pub visible: bool,
    pub browsing: String,
    pub selected: Option<String>,
}

impl BrowseDialog {
    pub fn open(&mut self) {
        self.visible = true;
        if self.browsing.is_empty() {
            self.browsing = "/".to_string();
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn browse(&mut self, folder: &str) {
        self.browsing = folder.to_string();
    }

    /// Take the folder being browsed and close.
    pub fn select(&mut self) -> String {
        let chosen = self.browsing.clone();
        self.selected = Some(chosen.clone());
        self.close();
        chosen
    }
}

#[cfg(test)]
mod tests;
