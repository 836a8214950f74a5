pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod logo;
pub mod page_header;
pub mod skeleton;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use logo::*;
pub use page_header::*;
pub use skeleton::*;

use dioxus::prelude::*;

/// Prepend a base class (and any extra fixed attributes) to caller-supplied
/// attributes. Caller classes are merged, not replaced.
pub(crate) fn merged(base: Vec<Attribute>, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

pub(crate) fn class_attr(class: &'static str) -> Attribute {
    Attribute::new("class", class, None, false)
}
