use dioxus::prelude::*;

use crate::components::{class_attr, merged};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Small inline label, e.g. the signed-in user's role in the navbar.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged(
        vec![
            class_attr("badge"),
            Attribute::new("data-variant", variant.as_str(), None, false),
        ],
        attributes,
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..attrs, {children} }
    }
}
