use dioxus::prelude::*;
use shared_types::Session;

/// Client-side view of the session collaborator.
///
/// Starts out loading; [`SessionState::apply`] installs the snapshot returned
/// by the server. The dashboard dispatcher only ever reads [`snapshot`].
///
/// [`snapshot`]: SessionState::snapshot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::loading()),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.session.read().is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().user.is_some()
    }

    pub fn display_name(&self) -> String {
        self.session.read().display_name()
    }

    pub fn apply(&mut self, session: Session) {
        self.session.set(Session {
            is_loading: false,
            ..session
        });
    }

    /// Forget the signed-in user without going back to loading.
    pub fn clear(&mut self) {
        self.session.set(Session::default());
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
