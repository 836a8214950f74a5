use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::session::SESSION_MAX_AGE_DAYS;

pub const SESSION_COOKIE: &str = "agri_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn to_header(cookie: Cookie<'_>) -> Option<HeaderValue> {
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Build a Set-Cookie header value carrying the session id.
pub fn build_session_cookie(session_id: &Uuid) -> Option<HeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::days(SESSION_MAX_AGE_DAYS))
        .secure(cookie_secure())
        .build();
    to_header(cookie)
}

/// Build a Set-Cookie header value that removes the session cookie.
pub fn build_clear_cookie() -> Option<HeaderValue> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .build();
    to_header(cookie)
}

/// Session id from the request's Cookie headers. Malformed values are
/// treated as absent.
pub fn extract_session_id(headers: &HeaderMap) -> Option<Uuid> {
    extract_cookie(headers, SESSION_COOKIE).and_then(|v| Uuid::parse_str(&v).ok())
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// Append the Set-Cookie header for `action` to a response.
pub fn apply_cookie_action(headers: &mut HeaderMap, action: &PendingCookieAction) {
    let value = match action {
        PendingCookieAction::Set(id) => build_session_cookie(id),
        PendingCookieAction::Clear => build_clear_cookie(),
    };
    match value {
        Some(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        None => tracing::error!(?action, "failed to encode session cookie"),
    }
}

/// Cookie change requested by a server function, applied by the session
/// middleware once the handler returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingCookieAction {
    Set(Uuid),
    Clear,
}

/// Shared slot through which server functions hand cookie actions to the
/// middleware. Lives in request extensions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        tracing::warn!("no request context, cookie change dropped");
        return;
    };
    let parts = ctx.parts_mut();
    match parts.extensions.get::<CookieSlot>() {
        Some(slot) => slot.schedule(action),
        None => tracing::warn!("session middleware not installed, cookie change dropped"),
    }
}

/// Ask the middleware to set the session cookie on the current response.
pub fn schedule_session_cookie(session_id: Uuid) {
    schedule(PendingCookieAction::Set(session_id));
}

/// Ask the middleware to clear the session cookie on the current response.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn session_cookie_attributes() {
        let id = Uuid::new_v4();
        let value = build_session_cookie(&id).unwrap();
        let value = value.to_str().unwrap();
        assert!(value.starts_with(&format!("agri_session={id}")));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("Max-Age=604800"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let value = build_clear_cookie().unwrap();
        let value = value.to_str().unwrap();
        assert!(value.starts_with("agri_session="));
        assert!(value.contains("Max-Age=0"));
    }

    #[test]
    fn extracts_session_among_other_cookies() {
        let id = Uuid::new_v4();
        let headers = headers_with_cookie(&format!("theme=dark; agri_session={id}; lang=en"));
        assert_eq!(extract_session_id(&headers), Some(id));
    }

    #[test]
    fn malformed_or_missing_session_is_none() {
        assert_eq!(extract_session_id(&HeaderMap::new()), None);
        assert_eq!(
            extract_session_id(&headers_with_cookie("agri_session=not-a-uuid")),
            None
        );
        assert_eq!(extract_session_id(&headers_with_cookie("other=1")), None);
    }

    #[test]
    fn slot_hands_over_last_action_once() {
        let slot = CookieSlot::default();
        let id = Uuid::new_v4();
        slot.schedule(PendingCookieAction::Set(id));
        slot.clone().schedule(PendingCookieAction::Clear);
        assert_eq!(slot.take(), Some(PendingCookieAction::Clear));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn apply_appends_set_cookie() {
        let mut headers = HeaderMap::new();
        apply_cookie_action(&mut headers, &PendingCookieAction::Clear);
        assert_eq!(headers.get_all(header::SET_COOKIE).iter().count(), 1);
    }
}
