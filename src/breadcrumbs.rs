//! Breadcrumb trail for a mirror path.

use crate::location::encode_component;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Folder link; `None` for the last segment.
    pub href: Option<String>,
}

/// Crumbs for a decoded path like `/music/My Album/01.mp3`. The root
/// separator is rendered by the caller, so `/` yields no crumbs.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut href = String::from("/");
    let mut crumbs = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        if i + 1 == segments.len() {
            crumbs.push(Crumb {
                label: segment.to_string(),
                href: None,
            });
        } else {
            href.push_str(&encode_component(segment));
            href.push('/');
            crumbs.push(Crumb {
                label: segment.to_string(),
                href: Some(href.clone()),
            });
        }
    }

    crumbs
}
