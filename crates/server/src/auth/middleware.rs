use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use crate::session;

/// Live session id for the current request, inserted by
/// [`session_middleware`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

/// Permissive session middleware.
///
/// Resolves the session cookie against the store and exposes the id as a
/// [`SessionId`] extension. A [`CookieSlot`] is always inserted so server
/// functions can schedule cookie changes, which are applied to the response
/// after the handler runs. A cookie naming an unknown session is cleared.
///
/// Does NOT reject anonymous requests; handlers decide authorization.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let presented = cookies::extract_session_id(req.headers());
    let live = presented.filter(|id| session::store().contains(id));

    if let Some(id) = live {
        req.extensions_mut().insert(SessionId(id));
    }

    let slot = CookieSlot::default();
    req.extensions_mut().insert(slot.clone());

    let mut response = next.run(req).await;

    let action = slot.take().or_else(|| {
        (presented.is_some() && live.is_none()).then(|| {
            tracing::debug!("clearing stale session cookie");
            PendingCookieAction::Clear
        })
    });
    if let Some(action) = action {
        cookies::apply_cookie_action(response.headers_mut(), &action);
    }

    response
}
