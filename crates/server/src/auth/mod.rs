pub mod cookies;
pub mod middleware;

pub use cookies::{schedule_clear_cookie, schedule_session_cookie, SESSION_COOKIE};
pub use middleware::{session_middleware, SessionId};
