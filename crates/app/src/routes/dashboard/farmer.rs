use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdPackage};
use dioxus_free_icons::Icon;
use shared_types::ProductCategory;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle,
};

use super::StatTile;

/// Dashboard for growers: listings, sales and machinery bookings.
#[component]
pub fn FarmerDashboard(name: String) -> Element {
    rsx! {
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Welcome, {name}" }
                PageSubtitle { "Manage your produce listings and machinery rentals." }
            }

            div { class: "dashboard-grid",
                StatTile { label: "Active listings", value: "0", hint: "Produce visible to buyers" }
                StatTile { label: "Sales this month", value: "0", hint: "Completed orders" }
                StatTile { label: "Machinery bookings", value: "0", hint: "Pending and confirmed rentals" }
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                            "List your produce"
                        }
                        CardDescription { "Pick a category to start a new listing." }
                    }
                    CardContent {
                        div { class: "dashboard-badges",
                            for category in ProductCategory::ALL {
                                Badge { variant: BadgeVariant::Outline, "{category.label()}" }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                            "Rent machinery"
                        }
                        CardDescription {
                            "Book tractors, harvesters and other equipment from nearby owners."
                        }
                    }
                }
            }
        }
    }
}
