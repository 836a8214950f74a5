use crate::auth::use_session;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{
    is_self_assignable, normalize_role, role_label, AppError, FeatureFlags, KNOWN_ROLES,
};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Logo,
};

/// Profile registration: name plus role. Signed-in users complete their
/// existing account; everyone else signs in with the given email first.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let flags: FeatureFlags = use_context();
    let mut email = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let signed_in_email = use_memo(move || {
        session
            .session
            .read()
            .user
            .as_ref()
            .map(|u| u.email.clone())
    });

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let account_email = signed_in_email().unwrap_or_else(|| email());
        let chosen = role();
        match server::api::register_profile(account_email, name(), chosen.clone()).await {
            Ok(snapshot) => {
                session.apply(snapshot);
                navigator().replace(Route::Dashboard {
                    role: normalize_role(Some(&chosen)),
                });
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
                    CardTitle { "Create your profile" }
                    CardDescription { "Tell us who you are so we can open the right dashboard" }
                }

                CardContent {
                    if !flags.self_registration {
                        div { class: "auth-notice",
                            "Registration is currently closed. Contact an administrator to have a profile set up."
                        }
                    } else {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        form { onsubmit: handle_register,
                            match signed_in_email() {
                                Some(address) => rsx! {
                                    Input { id: "email", label: "Email", value: address, disabled: true }
                                },
                                None => rsx! {
                                    Input {
                                        id: "email",
                                        label: "Email",
                                        input_type: "email",
                                        placeholder: "you@farm.example",
                                        required: true,
                                        value: email(),
                                        on_input: move |e: FormEvent| email.set(e.value()),
                                    }
                                },
                            }
                            Input {
                                id: "name",
                                label: "Full name",
                                required: true,
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                            div { class: "input-field",
                                label { class: "input-label", r#for: "role", "I am a" }
                                select {
                                    id: "role",
                                    class: "input",
                                    required: true,
                                    value: "{role}",
                                    onchange: move |e| role.set(e.value()),
                                    option { value: "", disabled: true, "Choose a role" }
                                    for known in KNOWN_ROLES.iter().filter(|r| is_self_assignable(r)) {
                                        option { value: "{known}", "{role_label(known)}" }
                                    }
                                }
                            }
                            Button { submit: true, disabled: loading(), class: "auth-submit",
                                if loading() { "Saving..." } else { "Continue" }
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already registered? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
