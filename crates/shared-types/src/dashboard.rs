//! Role-based dashboard dispatch.
//!
//! [`dispatch`] is a pure function from the session snapshot and the URL's
//! role segment to a view selection plus an optional navigation effect. The
//! UI layer renders the view and performs the navigation; nothing here
//! touches the router or the session provider directly.

use crate::models::Session;
use crate::role::{is_business_role, normalize_role};

/// Dashboards the marketplace can render, keyed by canonical role.
///
/// Roles without a dashboard of their own land in `Unimplemented`, which
/// keeps the raw role string for the placeholder message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardKind {
    Farmer,
    Consumer,
    Admin,
    Unimplemented { role: String },
}

impl DashboardKind {
    /// Select the dashboard for a canonical role. `raw` is the role exactly
    /// as stored on the profile.
    pub fn resolve(canonical: &str, raw: &str) -> Self {
        match canonical {
            "farmer" => DashboardKind::Farmer,
            "consumer" => DashboardKind::Consumer,
            "admin" => DashboardKind::Admin,
            _ => DashboardKind::Unimplemented {
                role: raw.to_string(),
            },
        }
    }

    pub fn is_registered(&self) -> bool {
        !matches!(self, DashboardKind::Unimplemented { .. })
    }
}

/// What the dashboard route should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    /// Session still loading. No redirect decisions are made.
    Loading,
    /// No signed-in user. Renders nothing while the login redirect runs.
    Unauthenticated,
    /// Signed in, but the profile has no usable role.
    ProfileIncomplete,
    Resolved {
        kind: DashboardKind,
        display_name: String,
    },
}

/// Navigation the dispatcher asks the router to perform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Redirect {
    Login,
    /// Canonical role whose dashboard the user belongs on.
    Dashboard(String),
}

impl Redirect {
    pub fn path(&self) -> String {
        match self {
            Redirect::Login => "/login".to_string(),
            Redirect::Dashboard(role) => format!("/dashboard/{role}"),
        }
    }
}

/// Outcome of one dispatch evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub view: DashboardView,
    pub redirect: Option<Redirect>,
}

/// Decide what the dashboard route shows for `session` at `url_role`.
///
/// Both roles are canonicalized with [`normalize_role`] before comparison.
/// A resolved view is returned even when a redirect is pending, since the
/// navigation may land after further renders.
pub fn dispatch(session: &Session, url_role: Option<&str>) -> Dispatch {
    if session.is_loading {
        return Dispatch {
            view: DashboardView::Loading,
            redirect: None,
        };
    }

    if session.user.is_none() {
        return Dispatch {
            view: DashboardView::Unauthenticated,
            redirect: Some(Redirect::Login),
        };
    }

    let raw_role = session.raw_role();
    let user_role = normalize_role(raw_role);
    if user_role.is_empty() {
        return Dispatch {
            view: DashboardView::ProfileIncomplete,
            redirect: None,
        };
    }

    let url_role = normalize_role(url_role);
    let redirect = roles_conflict(&user_role, &url_role).then(|| Redirect::Dashboard(user_role.clone()));

    Dispatch {
        view: DashboardView::Resolved {
            kind: DashboardKind::resolve(&user_role, raw_role.unwrap_or_default()),
            display_name: session.display_name(),
        },
        redirect,
    }
}

/// Whether a user with canonical `user_role` must leave the dashboard at
/// canonical `url_role`. Two business roles never conflict.
pub fn roles_conflict(user_role: &str, url_role: &str) -> bool {
    user_role != url_role && !(is_business_role(user_role) && is_business_role(url_role))
}

/// Remembers the last redirect handed to the router so repeated evaluations
/// of the same mismatch navigate only once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectGuard {
    issued: Option<(String, Redirect)>,
}

impl RedirectGuard {
    /// Return the redirect to perform now, or `None` if there is nothing to
    /// do or this exact redirect was already issued for this URL role.
    /// Evaluations without a redirect reset the guard.
    pub fn admit(&mut self, url_role: Option<&str>, redirect: Option<&Redirect>) -> Option<Redirect> {
        let Some(redirect) = redirect else {
            self.issued = None;
            return None;
        };

        let key = (normalize_role(url_role), redirect.clone());
        if self.issued.as_ref() == Some(&key) {
            return None;
        }
        self.issued = Some(key);
        Some(redirect.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthUser, UserProfile};
    use pretty_assertions::assert_eq;

    fn signed_in(role: Option<&str>, name: Option<&str>) -> Session {
        Session {
            user: Some(AuthUser {
                uid: "uid-1".into(),
                email: "grower@agri.test".into(),
            }),
            user_data: Some(UserProfile {
                role: role.map(String::from),
                name: name.map(String::from),
                ..Default::default()
            }),
            is_loading: false,
        }
    }

    #[test]
    fn loading_session_makes_no_decision() {
        let mut session = signed_in(Some("farmer"), None);
        session.is_loading = true;
        let out = dispatch(&session, Some("consumer"));
        assert_eq!(out.view, DashboardView::Loading);
        assert_eq!(out.redirect, None);

        let out = dispatch(&Session::loading(), None);
        assert_eq!(out.view, DashboardView::Loading);
        assert_eq!(out.redirect, None);
    }

    #[test]
    fn matching_admin_renders_admin_dashboard() {
        let out = dispatch(&signed_in(Some("Admin"), Some("Root")), Some("admin"));
        assert_eq!(out.redirect, None);
        assert_eq!(
            out.view,
            DashboardView::Resolved {
                kind: DashboardKind::Admin,
                display_name: "Root".into(),
            }
        );
    }

    #[test]
    fn mismatch_redirects_to_own_dashboard() {
        let out = dispatch(&signed_in(Some("Farmer"), None), Some("consumer"));
        assert_eq!(out.redirect, Some(Redirect::Dashboard("farmer".into())));
        assert_eq!(out.redirect.unwrap().path(), "/dashboard/farmer");
        // The user's own dashboard still renders until navigation lands.
        assert!(matches!(
            out.view,
            DashboardView::Resolved {
                kind: DashboardKind::Farmer,
                ..
            }
        ));
    }

    #[test]
    fn mismatch_redirect_fires_once() {
        let session = signed_in(Some("Farmer"), None);
        let mut guard = RedirectGuard::default();
        let mut fired = Vec::new();

        // Several renders of the same state before navigation completes.
        for _ in 0..3 {
            let out = dispatch(&session, Some("consumer"));
            if let Some(r) = guard.admit(Some("consumer"), out.redirect.as_ref()) {
                fired.push(r);
            }
        }
        assert_eq!(fired, vec![Redirect::Dashboard("farmer".into())]);

        // Navigation lands: no redirect, guard resets.
        let out = dispatch(&session, Some("farmer"));
        assert_eq!(guard.admit(Some("farmer"), out.redirect.as_ref()), None);

        // A fresh mismatch fires again.
        let out = dispatch(&session, Some("consumer"));
        assert_eq!(
            guard.admit(Some("consumer"), out.redirect.as_ref()),
            Some(Redirect::Dashboard("farmer".into()))
        );
    }

    #[test]
    fn guard_fires_for_each_distinct_mismatched_url() {
        let session = signed_in(Some("farmer"), None);
        let mut guard = RedirectGuard::default();

        let out = dispatch(&session, Some("consumer"));
        assert!(guard.admit(Some("consumer"), out.redirect.as_ref()).is_some());
        let out = dispatch(&session, Some("admin"));
        assert!(guard.admit(Some("admin"), out.redirect.as_ref()).is_some());
    }

    #[test]
    fn business_roles_do_not_cross_redirect() {
        let out = dispatch(&signed_in(Some("exporter"), Some("Kofi")), Some("supplier"));
        assert_eq!(out.redirect, None);
        assert_eq!(
            out.view,
            DashboardView::Resolved {
                kind: DashboardKind::Unimplemented {
                    role: "exporter".into()
                },
                display_name: "Kofi".into(),
            }
        );
    }

    #[test]
    fn business_role_still_redirects_from_standard_url() {
        let out = dispatch(&signed_in(Some("supplier"), None), Some("farmer"));
        assert_eq!(out.redirect, Some(Redirect::Dashboard("supplier".into())));
    }

    #[test]
    fn missing_user_redirects_to_login() {
        let session = Session::default();
        let out = dispatch(&session, Some("farmer"));
        assert_eq!(out.view, DashboardView::Unauthenticated);
        assert_eq!(out.redirect, Some(Redirect::Login));
        assert_eq!(Redirect::Login.path(), "/login");
    }

    #[test]
    fn missing_profile_is_incomplete() {
        let mut session = signed_in(None, None);
        session.user_data = None;
        let out = dispatch(&session, Some("farmer"));
        assert_eq!(out.view, DashboardView::ProfileIncomplete);
        assert_eq!(out.redirect, None);
    }

    #[test]
    fn blank_role_is_incomplete() {
        let out = dispatch(&signed_in(Some("   "), Some("Ama")), Some("farmer"));
        assert_eq!(out.view, DashboardView::ProfileIncomplete);
        assert_eq!(out.redirect, None);
    }

    #[test]
    fn unregistered_role_echoes_raw_text() {
        let session = signed_in(Some("service_provider"), Some("Yaw"));
        let out = dispatch(&session, Some("service-provider"));
        assert_eq!(out.redirect, None);
        assert_eq!(
            out.view,
            DashboardView::Resolved {
                kind: DashboardKind::Unimplemented {
                    role: "service_provider".into()
                },
                display_name: "Yaw".into(),
            }
        );
    }

    #[test]
    fn url_role_underscores_normalize_like_user_role() {
        // Only the user side used to replace underscores, which made
        // `/dashboard/service_provider` redirect a service provider away
        // from a URL naming their own role. Both sides are canonicalized now.
        let session = signed_in(Some("service_provider"), None);
        assert_eq!(dispatch(&session, Some("service_provider")).redirect, None);
        assert_eq!(dispatch(&session, Some(" Service-Provider ")).redirect, None);
    }

    #[test]
    fn missing_url_role_redirects_resolved_user() {
        let out = dispatch(&signed_in(Some("consumer"), None), None);
        assert_eq!(out.redirect, Some(Redirect::Dashboard("consumer".into())));
    }

    #[test]
    fn registry_resolution_is_exhaustive() {
        assert_eq!(DashboardKind::resolve("farmer", "Farmer"), DashboardKind::Farmer);
        assert_eq!(DashboardKind::resolve("consumer", "consumer"), DashboardKind::Consumer);
        assert_eq!(DashboardKind::resolve("admin", "ADMIN"), DashboardKind::Admin);
        assert!(!DashboardKind::resolve("exporter", "exporter").is_registered());
        assert!(DashboardKind::resolve("admin", "admin").is_registered());
    }

    #[test]
    fn roles_conflict_rules() {
        assert!(!roles_conflict("farmer", "farmer"));
        assert!(roles_conflict("farmer", "consumer"));
        assert!(!roles_conflict("exporter", "supplier"));
        assert!(!roles_conflict("supplier", "exporter"));
        assert!(roles_conflict("exporter", "admin"));
        assert!(roles_conflict("admin", ""));
    }
}
