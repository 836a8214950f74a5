use dioxus::prelude::*;

use crate::components::{class_attr, merged};

/// Pulsing placeholder shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let attrs = merged(vec![class_attr("skeleton")], attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..attrs }
    }
}
