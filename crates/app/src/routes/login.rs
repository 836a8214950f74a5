use crate::auth::use_session;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Logo,
};

/// Email sign-in. New addresses get an account without a profile and land
/// on the profile-incomplete panel.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Signed-in visitors go straight to their dashboard.
    use_effect(move || {
        if !session.is_loading() && session.is_authenticated() {
            navigator().replace(Route::Home {});
        }
    });

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match server::api::sign_in(email()).await {
            Ok(snapshot) => {
                session.apply(snapshot);
                navigator().replace(Route::Home {});
            }
            Err(e) => {
                error_msg.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div { class: "auth-logo", Logo { size: 48 } }
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your email to open the marketplace" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        Input {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@farm.example",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Button { submit: true, disabled: loading(), class: "auth-submit",
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "New here? "
                        Link { to: Route::Register {}, "Create your profile" }
                    }
                }
            }
        }
    }
}
