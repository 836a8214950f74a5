use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSearch, LdClock};
use dioxus_free_icons::Icon;
use shared_types::ProductCategory;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle,
};

use super::StatTile;

#[component]
pub fn ConsumerDashboard(name: String) -> Element {
    rsx! {
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Welcome, {name}" }
                PageSubtitle { "Fresh produce straight from local farms." }
            }

            div { class: "dashboard-grid",
                StatTile { label: "Open orders", value: "0", hint: "Awaiting delivery" }
                StatTile { label: "Purchases", value: "0", hint: "All time" }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                            "Browse the market"
                        }
                        CardDescription { "Shop by category." }
                    }
                    CardContent {
                        div { class: "dashboard-badges",
                            for category in ProductCategory::ALL {
                                Badge { variant: BadgeVariant::Secondary, "{category.label()}" }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                            "Recent purchases"
                        }
                        CardDescription { "Nothing here yet." }
                    }
                }
            }
        }
    }
}
