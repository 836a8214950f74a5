use axum::{
    body::Body,
    extract::{Path, Request},
    http::{header, HeaderMap, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use server::auth::cookies::{CookieSlot, PendingCookieAction};
use server::auth::{session_middleware, SessionId};
use tower::ServiceExt;

/// Echo the session id the middleware resolved, or `anonymous`.
async fn whoami(req: Request) -> String {
    req.extensions()
        .get::<SessionId>()
        .map(|id| id.0.to_string())
        .unwrap_or_else(|| "anonymous".to_string())
}

/// Open a session and schedule its cookie, the way `sign_in` does. A session
/// the caller already holds is replaced.
async fn open(Path(email): Path<String>, req: Request) -> Result<String, StatusCode> {
    let previous = req.extensions().get::<SessionId>().map(|id| id.0);
    let id = server::session::store()
        .sign_in_replacing(&email, previous.as_ref())
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    let slot = req
        .extensions()
        .get::<CookieSlot>()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    slot.schedule(PendingCookieAction::Set(id));
    Ok(id.to_string())
}

/// Drop the session and schedule cookie removal, the way `sign_out` does.
async fn close(req: Request) -> StatusCode {
    if let Some(id) = req.extensions().get::<SessionId>() {
        server::session::store().sign_out(&id.0);
    }
    match req.extensions().get::<CookieSlot>() {
        Some(slot) => {
            slot.schedule(PendingCookieAction::Clear);
            StatusCode::NO_CONTENT
        }
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Router with the session middleware over a few test handlers.
pub fn test_app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/open/{email}", post(open))
        .route("/close", post(close))
        .layer(middleware::from_fn(session_middleware))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }
}

/// Send a request with an optional Cookie header.
pub async fn send(app: &Router, method: &str, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut builder = axum::http::Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}
