pub mod admin;
pub mod consumer;
pub mod farmer;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{dispatch, DashboardKind, DashboardView, Redirect, RedirectGuard};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, PageHeader, PageTitle,
    Skeleton,
};

use crate::auth::use_session;
use crate::routes::Route;

/// Number of skeleton tiles shown while the session loads.
const SKELETON_COUNT: usize = 3;

/// Router target for a dispatcher redirect.
pub fn route_for(redirect: &Redirect) -> Route {
    match redirect {
        Redirect::Login => Route::Login {},
        Redirect::Dashboard(role) => Route::Dashboard { role: role.clone() },
    }
}

/// Where the incomplete-profile panel sends the user.
fn profile_setup_route() -> Route {
    Route::Register {}
}

/// `/dashboard/:role`
#[component]
pub fn Dashboard(role: String) -> Element {
    rsx! { RoleDashboard { role: Some(role) } }
}

/// Role-adaptive dashboard.
///
/// Evaluates [`dispatch`] whenever the session or the URL role changes,
/// performs the resulting redirect at most once per mismatch, and renders
/// the selected view.
#[component]
pub fn RoleDashboard(role: Option<String>) -> Element {
    let session = use_session();
    let mut guard = use_signal(RedirectGuard::default);

    let outcome = use_memo(use_reactive!(|(role,)| {
        let decision = dispatch(&session.snapshot(), role.as_deref());
        if let DashboardView::Resolved { kind, .. } = &decision.view {
            if !kind.is_registered() {
                tracing::debug!(?kind, "no dashboard registered, showing placeholder");
            }
        }
        (role, decision)
    }));

    use_effect(move || {
        let (url_role, decision) = outcome();
        let admitted = guard
            .write()
            .admit(url_role.as_deref(), decision.redirect.as_ref());
        if let Some(redirect) = admitted {
            tracing::debug!(
                url_role = url_role.as_deref().unwrap_or(""),
                target = %redirect.path(),
                "dashboard redirect"
            );
            navigator().replace(route_for(&redirect));
        }
    });

    let view = outcome.read().1.view.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        match view {
            DashboardView::Loading => rsx! { LoadingSkeletons {} },
            DashboardView::Unauthenticated => rsx! {},
            DashboardView::ProfileIncomplete => rsx! { ProfileIncomplete {} },
            DashboardView::Resolved { kind, display_name } => match kind {
                DashboardKind::Farmer => rsx! { farmer::FarmerDashboard { name: display_name } },
                DashboardKind::Consumer => rsx! { consumer::ConsumerDashboard { name: display_name } },
                DashboardKind::Admin => rsx! { admin::AdminDashboard { name: display_name } },
                DashboardKind::Unimplemented { role } => rsx! {
                    UnderDevelopment { name: display_name, role }
                },
            },
        }
    }
}

/// Headline figure on a role dashboard. Values are placeholders until the
/// marketplace data services exist.
#[component]
pub(crate) fn StatTile(label: &'static str, value: String, hint: &'static str) -> Element {
    rsx! {
        Card { class: "stat-tile",
            CardHeader {
                span { class: "stat-label", "{label}" }
            }
            CardContent {
                span { class: "stat-number", "{value}" }
                p { class: "stat-hint", "{hint}" }
            }
        }
    }
}

#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        div { class: "dashboard-loading",
            Skeleton { style: "height: 2rem; width: 40%;" }
            div { class: "dashboard-grid",
                for _ in 0..SKELETON_COUNT {
                    Card {
                        CardHeader {
                            Skeleton { style: "height: 1rem; width: 60%;" }
                        }
                        CardContent {
                            Skeleton { style: "height: 2rem; width: 40%;" }
                        }
                    }
                }
            }
        }
    }
}

/// Shown to signed-in users whose profile has no usable role.
#[component]
fn ProfileIncomplete() -> Element {
    rsx! {
        div { class: "dashboard-notice",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 }
                        "Profile Incomplete"
                    }
                    CardDescription {
                        "Your account does not have a role yet, so we cannot tell which dashboard to show."
                    }
                }
                CardFooter {
                    Link { to: profile_setup_route(), class: "dashboard-cta",
                        "Complete your profile"
                    }
                }
            }
        }
    }
}

/// Placeholder for roles without a dashboard of their own.
#[component]
fn UnderDevelopment(name: String, role: String) -> Element {
    rsx! {
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Welcome, {name}" }
            }
            div { class: "dashboard-notice",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                            "Dashboard under development"
                        }
                        CardDescription {
                            "The dashboard for the "
                            strong { class: "dashboard-role", "{role}" }
                            " role is under development. Check back soon."
                        }
                    }
                }
            }
        }
    }
}
