use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{role_label, KNOWN_ROLES};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle,
};

use super::StatTile;

/// Marketplace oversight: accounts, listings and the role catalogue.
#[component]
pub fn AdminDashboard(name: String) -> Element {
    rsx! {
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Welcome, {name}" }
                PageSubtitle { "Marketplace administration" }
            }

            div { class: "dashboard-grid",
                StatTile { label: "Users", value: "0", hint: "Registered accounts" }
                StatTile { label: "Listings", value: "0", hint: "Active products" }
                StatTile { label: "Machines", value: "0", hint: "Available for rent" }
                StatTile { label: "Sales", value: "0", hint: "Completed this month" }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            "Roles"
                        }
                        CardDescription { "Account roles recognised by the marketplace." }
                    }
                    CardContent {
                        div { class: "dashboard-badges",
                            for role in KNOWN_ROLES {
                                Badge { variant: BadgeVariant::Primary, "{role_label(role)}" }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                            "Moderation"
                        }
                        CardDescription { "No reports awaiting review." }
                    }
                }
            }
        }
    }
}
