//! Route guard for member-only views.

use crate::{AlertService, Navigator, SessionState};
use std::sync::Arc;
use tracing::debug;

/// Alert shown to visitors turned away by the guard.
pub const ACCESS_DENIED_MESSAGE: &str = "You shall not pass !!!";

/// Public route anonymous visitors are sent to.
pub const LANDING_ROUTE: &str = "/home";

/// Decides whether navigation to a protected view may proceed.
#[derive(Clone)]
pub struct AuthGuard {
    session: Arc<dyn SessionState>,
    navigator: Arc<dyn Navigator>,
    alerts: Arc<dyn AlertService>,
}

impl AuthGuard {
    pub fn new(
        session: Arc<dyn SessionState>,
        navigator: Arc<dyn Navigator>,
        alerts: Arc<dyn AlertService>,
    ) -> Self {
        Self {
            session,
            navigator,
            alerts,
        }
    }

    /// Allows navigation for a logged-in session.
    ///
    /// Otherwise raises one error alert, redirects once to [`LANDING_ROUTE`]
    /// and denies.
    pub fn can_activate(&self) -> bool {
        if self.session.logged_in() {
            return true;
        }

        debug!("Navigation denied, redirecting to {}", LANDING_ROUTE);
        self.alerts.error(ACCESS_DENIED_MESSAGE);
        self.navigator.navigate(LANDING_ROUTE);
        false
    }
}

impl std::fmt::Debug for AuthGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryNavigator, LogAlertService, TokenSession};
    use mockall::{mock, predicate::eq};

    mock! {
        pub Session {}

        impl SessionState for Session {
            fn logged_in(&self) -> bool;
        }
    }

    mock! {
        pub Nav {}

        impl Navigator for Nav {
            fn navigate(&self, route: &str);
        }
    }

    mock! {
        pub Alerts {}

        impl AlertService for Alerts {
            fn success(&self, message: &str);
            fn error(&self, message: &str);
            fn message(&self, message: &str);
        }
    }

    fn session(logged_in: bool) -> MockSession {
        let mut session = MockSession::new();
        session.expect_logged_in().times(1).return_const(logged_in);
        session
    }

    #[test]
    fn test_logged_in_session_is_allowed_without_side_effects() {
        let mut nav = MockNav::new();
        nav.expect_navigate().never();
        let mut alerts = MockAlerts::new();
        alerts.expect_error().never();
        alerts.expect_success().never();
        alerts.expect_message().never();

        let guard = AuthGuard::new(Arc::new(session(true)), Arc::new(nav), Arc::new(alerts));

        assert!(guard.can_activate());
    }

    #[test]
    fn test_anonymous_session_is_alerted_once_and_redirected_once() {
        let mut nav = MockNav::new();
        nav.expect_navigate()
            .with(eq(LANDING_ROUTE))
            .times(1)
            .return_const(());
        let mut alerts = MockAlerts::new();
        alerts
            .expect_error()
            .with(eq(ACCESS_DENIED_MESSAGE))
            .times(1)
            .return_const(());
        alerts.expect_success().never();
        alerts.expect_message().never();

        let guard = AuthGuard::new(Arc::new(session(false)), Arc::new(nav), Arc::new(alerts));

        assert!(!guard.can_activate());
    }

    #[test]
    fn test_guard_with_stored_session_and_history() {
        let navigator = Arc::new(HistoryNavigator::new());
        let session = Arc::new(TokenSession::new());
        let guard = AuthGuard::new(session, navigator.clone(), Arc::new(LogAlertService));

        assert!(!guard.can_activate());
        assert!(!guard.can_activate());

        assert_eq!(navigator.history(), vec![LANDING_ROUTE, LANDING_ROUTE]);
    }
}
