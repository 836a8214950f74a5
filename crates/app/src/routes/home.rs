use dioxus::prelude::*;

use super::dashboard::RoleDashboard;

/// `/` sends each visitor to the dashboard for their role, or to sign-in.
#[component]
pub fn Home() -> Element {
    rsx! { RoleDashboard { role: None } }
}
