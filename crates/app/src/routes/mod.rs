pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

use crate::auth::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::{normalize_role, role_label, AppError};
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Logo};

use dashboard::Dashboard;
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard/:role")]
    Dashboard { role: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Shell around the signed-in pages: navbar with logo, the user's name and
/// role, and a sign-out action.
#[component]
fn AppLayout() -> Element {
    let mut session = use_session();
    let mut signing_out = use_signal(|| false);

    let raw_role = session.session.read().raw_role().map(str::to_string);
    let canonical = normalize_role(raw_role.as_deref());

    let handle_sign_out = move |_: MouseEvent| {
        signing_out.set(true);
        spawn(async move {
            if let Err(e) = server::api::sign_out().await {
                tracing::warn!(error = %AppError::friendly_message(&e.to_string()), "sign-out failed");
            }
            session.clear();
            signing_out.set(false);
            navigator().replace(Route::Login {});
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-navbar",
                Link { to: Route::Home {}, class: "app-navbar-brand",
                    Logo { size: 32 }
                }

                if session.is_authenticated() {
                    nav { class: "app-navbar-actions",
                        if !canonical.is_empty() {
                            Link {
                                to: Route::Dashboard { role: canonical.clone() },
                                class: "app-navbar-link",
                                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                                "Dashboard"
                            }
                            Badge { variant: BadgeVariant::Secondary, "{role_label(&canonical)}" }
                        }
                        span { class: "app-navbar-user", "{session.display_name()}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            disabled: signing_out(),
                            onclick: handle_sign_out,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Sign out"
                        }
                    }
                }
            }

            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
