use dioxus::prelude::*;

use crate::components::{class_attr, merged};

/// Bordered panel used for dashboard tiles and auth forms.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged(vec![class_attr("card")], attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..attrs, {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged(vec![class_attr("card-header")], attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged(vec![class_attr("card-title")], attributes);
    rsx! {
        h3 { ..attrs, {children} }
    }
}

/// Muted supporting text under a [`CardTitle`].
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged(vec![class_attr("card-description")], attributes);
    rsx! {
        p { ..attrs, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged(vec![class_attr("card-content")], attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged(vec![class_attr("card-footer")], attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}
