use dioxus::prelude::*;
use shared_types::{FeatureFlags, Session};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use shared_types::AppError;

/// Session id attached to the current request by the session middleware.
#[cfg(feature = "server")]
fn current_session_id() -> Option<uuid::Uuid> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    parts
        .extensions
        .get::<crate::auth::SessionId>()
        .map(|id| id.0)
}

/// Get the current feature flags. No auth required, flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Snapshot of the caller's session. Anonymous callers get `user: None`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_session() -> Result<Session, ServerFnError> {
    let id = current_session_id();
    Ok(crate::session::store().snapshot(id.as_ref()))
}

/// Passwordless sign-in. Unknown emails get a fresh account with no profile.
/// A session the caller already holds is ended first.
#[cfg_attr(feature = "server", tracing::instrument(skip_all))]
#[server]
pub async fn sign_in(email: String) -> Result<Session, ServerFnError> {
    let store = crate::session::store();
    let id = store
        .sign_in_replacing(&email, current_session_id().as_ref())
        .map_err(|e| e.into_server_fn_error())?;

    crate::auth::schedule_session_cookie(id);
    tracing::info!("session opened");

    Ok(store.snapshot(Some(&id)))
}

/// Create or complete the caller's profile.
///
/// Reuses the caller's session when there is one, otherwise signs in with
/// `email` first. Rejected unless `self_registration` is enabled, and reserved
/// roles such as `admin` are never granted here.
#[cfg_attr(feature = "server", tracing::instrument(skip(email, name)))]
#[server]
pub async fn register_profile(
    email: String,
    name: String,
    role: String,
) -> Result<Session, ServerFnError> {
    use shared_types::{is_self_assignable, normalize_role, UserProfile};

    if !crate::config::feature_flags().self_registration {
        return Err(AppError::forbidden("Registration is closed").into_server_fn_error());
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Name is required").into_server_fn_error());
    }
    let role = role.trim();
    if normalize_role(Some(role)).is_empty() {
        return Err(AppError::bad_request("Choose a role").into_server_fn_error());
    }
    if !is_self_assignable(role) {
        tracing::warn!(role, "reserved role requested at registration");
        return Err(AppError::forbidden("That role cannot be self-assigned").into_server_fn_error());
    }

    let store = crate::session::store();
    let id = match current_session_id() {
        Some(id) => id,
        None => {
            let id = store
                .sign_in(&email)
                .map_err(|e| e.into_server_fn_error())?;
            crate::auth::schedule_session_cookie(id);
            id
        }
    };

    let profile = UserProfile {
        role: Some(role.to_string()),
        name: Some(name.to_string()),
        ..Default::default()
    };
    store
        .set_profile(&id, profile)
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(role, "profile registered");

    Ok(store.snapshot(Some(&id)))
}

/// End the caller's session and clear the cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    if let Some(id) = current_session_id() {
        crate::session::store().sign_out(&id);
    }
    crate::auth::schedule_clear_cookie();
    Ok(())
}
