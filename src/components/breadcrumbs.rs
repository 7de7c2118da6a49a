use crate::breadcrumbs::Crumb;
use dioxus::prelude::*;

#[component]
pub fn Breadcrumbs(crumbs: Vec<Crumb>) -> Element {
    rsx! {
        span { id: "breadcrumbs", class: "breadcrumbs",
            "/"
            for crumb in crumbs {
                if let Some(href) = crumb.href {
                    span {
                        a { href: "{href}", "{crumb.label}" }
                        "/"
                    }
                } else {
                    span { "{crumb.label}" }
                }
            }
        }
    }
}
