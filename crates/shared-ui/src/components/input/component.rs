use dioxus::prelude::*;

use crate::components::{class_attr, merged};

/// Labelled text input. The label is tied to the input through `id`.
#[component]
pub fn Input(
    id: String,
    #[props(default)] label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let attrs = merged(vec![class_attr("input")], attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-field",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value,
                placeholder,
                required,
                disabled,
                oninput: move |evt| on_input.call(evt),
                ..attrs,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_points_at_input() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { id: "email", label: "Email", input_type: "email", required: true }
        });
        assert!(html.contains(r#"for="email""#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"type="email""#));
    }

    #[test]
    fn label_is_optional() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { id: "q" }
        });
        assert!(!html.contains("input-label"));
        assert!(html.contains(r#"class="input""#));
    }
}
