//! Authentication guard for protected operations.
//!
//! Gates every protected flow on the presence of a stored token. When the
//! token is absent the guard clears any stale user record and redirects to
//! the login route instead of letting the flow proceed.

use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore};

/// Route every unauthenticated flow is sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Navigation capability.
///
/// Injected alongside the session store so the guard and the API client can
/// force a move to the login route without knowing about a concrete router.
pub trait Navigator: Send + Sync {
    /// Replaces the current location with `route`.
    ///
    /// Replacing (rather than pushing) keeps protected views out of the
    /// history after logout. Fire-and-forget; must not fail.
    fn replace(&self, route: &str);
}

/// Navigator for contexts without a router, such as the CLI.
#[derive(Debug, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn replace(&self, route: &str) {
        tracing::debug!(route, "navigation requested outside a router");
    }
}

/// Navigator that records every requested target, for test assertions.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    targets: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates a navigator with no recorded targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// All targets requested so far, oldest first.
    pub fn targets(&self) -> Vec<String> {
        self.targets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// The most recently requested target.
    pub fn last(&self) -> Option<String> {
        self.targets().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, route: &str) {
        self.targets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(route.to_string());
    }
}

/// Denies protected operations when no session token is present.
pub struct Guard {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl Guard {
    /// Creates a guard over the given store and navigator.
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Gate for protected operations.
    ///
    /// Yields the session when a token is present. Otherwise clears the
    /// store (no stale user record may linger without a token), redirects
    /// to [`LOGIN_ROUTE`] and yields `None`. Never fails.
    pub fn require(&self) -> Option<Session> {
        let session = self.store.load();
        if !session.is_authenticated() {
            self.store.clear();
            self.navigator.replace(LOGIN_ROUTE);
            return None;
        }
        Some(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, UserProfile};

    /// Test: no token denies access, clears the store and redirects.
    #[test]
    fn test_require_without_token() {
        // a stale user record without a token must also be wiped
        let stale = Session {
            token: None,
            user: UserProfile {
                username: "stale".to_string(),
                ..UserProfile::default()
            },
        };
        let store = Arc::new(MemorySessionStore::with_session(stale));
        let navigator = Arc::new(RecordingNavigator::new());
        let guard = Guard::new(
            Arc::clone(&store) as Arc<dyn SessionStore>,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        );

        assert!(guard.require().is_none());
        assert_eq!(store.load(), Session::default());
        assert_eq!(navigator.targets(), vec![LOGIN_ROUTE.to_string()]);
    }

    /// Test: a present token passes the session through unchanged.
    #[test]
    fn test_require_with_token() {
        let session = Session::new("abc123", UserProfile::default());
        let store = Arc::new(MemorySessionStore::with_session(session.clone()));
        let navigator = Arc::new(RecordingNavigator::new());
        let guard = Guard::new(
            Arc::clone(&store) as Arc<dyn SessionStore>,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        );

        assert_eq!(guard.require(), Some(session));
        assert!(store.load().is_authenticated());
        assert!(navigator.targets().is_empty());
    }
}
