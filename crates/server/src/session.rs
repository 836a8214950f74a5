//! In-memory account and session store standing in for the external
//! identity provider. Nothing here survives a restart.

use chrono::{DateTime, Duration, Utc};
use shared_types::{AppError, AuthUser, DemoAccount, Session, UserProfile};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use uuid::Uuid;

/// An identity known to the store, keyed by normalized email.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub uid: String,
    pub email: String,
    pub profile: Option<UserProfile>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    fn new(email: String) -> Self {
        Self {
            uid: Uuid::new_v4().to_string(),
            email,
            profile: None,
            created_at: Utc::now(),
        }
    }

    pub fn auth_user(&self) -> AuthUser {
        AuthUser {
            uid: self.uid.clone(),
            email: self.email.clone(),
        }
    }
}

/// How long a session stays valid after sign-in. Matches the cookie max-age.
pub const SESSION_MAX_AGE_DAYS: i64 = 7;

#[derive(Debug, Clone)]
struct SessionEntry {
    email: String,
    issued_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    sessions: HashMap<Uuid, SessionEntry>,
}

impl Inner {
    /// Email behind `session_id` if the session has not expired.
    fn live_email(
        &self,
        session_id: &Uuid,
        max_age: Duration,
        now: DateTime<Utc>,
    ) -> Option<&str> {
        self.sessions
            .get(session_id)
            .filter(|entry| now - entry.issued_at < max_age)
            .map(|entry| entry.email.as_str())
    }

    fn purge_expired(&mut self, max_age: Duration, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| now - entry.issued_at < max_age);
        before - self.sessions.len()
    }
}

#[derive(Debug)]
pub struct SessionStore {
    inner: RwLock<Inner>,
    max_age: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_max_age(Duration::days(SESSION_MAX_AGE_DAYS))
    }
}

fn poisoned() -> AppError {
    AppError::internal("Session store unavailable")
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::bad_request("Email is required"));
    }
    Ok(email)
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_age(max_age: Duration) -> Self {
        Self {
            inner: RwLock::default(),
            max_age,
        }
    }

    /// Insert configured accounts. Existing accounts are left untouched.
    pub fn seed(&self, accounts: &[DemoAccount]) -> Result<usize, AppError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let mut added = 0;
        for demo in accounts {
            let Ok(email) = normalize_email(&demo.email) else {
                tracing::warn!("skipping demo account with empty email");
                continue;
            };
            if inner.accounts.contains_key(&email) {
                continue;
            }
            let mut account = Account::new(email.clone());
            if demo.role.is_some() || demo.name.is_some() {
                account.profile = Some(UserProfile {
                    role: demo.role.clone(),
                    name: demo.name.clone(),
                    ..Default::default()
                });
            }
            inner.accounts.insert(email, account);
            added += 1;
        }
        Ok(added)
    }

    /// Open a session for `email`, creating a profile-less account on first
    /// sight.
    pub fn sign_in(&self, email: &str) -> Result<Uuid, AppError> {
        self.sign_in_replacing(email, None)
    }

    /// Like [`sign_in`](Self::sign_in), but first ends `previous`, the
    /// caller's current session. Expired sessions are purged on the way.
    pub fn sign_in_replacing(
        &self,
        email: &str,
        previous: Option<&Uuid>,
    ) -> Result<Uuid, AppError> {
        let email = normalize_email(email)?;
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let purged = inner.purge_expired(self.max_age, Utc::now());
        if purged > 0 {
            tracing::debug!(purged, "expired sessions removed");
        }
        if let Some(previous) = previous {
            inner.sessions.remove(previous);
        }

        inner
            .accounts
            .entry(email.clone())
            .or_insert_with(|| Account::new(email.clone()));
        let id = Uuid::new_v4();
        inner.sessions.insert(
            id,
            SessionEntry {
                email,
                issued_at: Utc::now(),
            },
        );
        Ok(id)
    }

    /// Whether `session_id` names a live, unexpired session.
    pub fn contains(&self, session_id: &Uuid) -> bool {
        self.inner
            .read()
            .map(|inner| inner.live_email(session_id, self.max_age, Utc::now()).is_some())
            .unwrap_or(false)
    }

    /// Number of sessions held, expired ones included until the next purge.
    pub fn session_count(&self) -> usize {
        self.inner.read().map(|inner| inner.sessions.len()).unwrap_or(0)
    }

    /// Account behind a live session.
    pub fn account(&self, session_id: &Uuid) -> Option<Account> {
        let inner = self.inner.read().ok()?;
        let email = inner.live_email(session_id, self.max_age, Utc::now())?;
        inner.accounts.get(email).cloned()
    }

    /// Replace the profile of the account behind `session_id`.
    pub fn set_profile(&self, session_id: &Uuid, profile: UserProfile) -> Result<Account, AppError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let email = inner
            .live_email(session_id, self.max_age, Utc::now())
            .map(str::to_string)
            .ok_or_else(|| AppError::unauthorized("Sign in first"))?;
        let account = inner
            .accounts
            .get_mut(&email)
            .ok_or_else(|| AppError::not_found("Account not found"))?;
        account.profile = Some(profile);
        Ok(account.clone())
    }

    /// End a session. Returns whether it existed.
    pub fn sign_out(&self, session_id: &Uuid) -> bool {
        self.inner
            .write()
            .map(|mut inner| inner.sessions.remove(session_id).is_some())
            .unwrap_or(false)
    }

    /// Session snapshot for the dispatcher. Unknown or missing ids yield an
    /// anonymous, fully loaded session.
    pub fn snapshot(&self, session_id: Option<&Uuid>) -> Session {
        match session_id.and_then(|id| self.account(id)) {
            Some(account) => Session {
                user: Some(account.auth_user()),
                user_data: account.profile,
                is_loading: false,
            },
            None => Session::default(),
        }
    }
}

static STORE: OnceLock<SessionStore> = OnceLock::new();

/// Process-wide store, seeded from `config.toml` on first use.
pub fn store() -> &'static SessionStore {
    STORE.get_or_init(|| {
        let store = SessionStore::new();
        match store.seed(crate::config::demo_accounts()) {
            Ok(n) => tracing::info!(seeded = n, "session store ready"),
            Err(e) => tracing::warn!(error = %e, "failed to seed session store"),
        }
        store
    })
}
