//! Session persistence for the elearn client.
//!
//! Stores the bearer token and user profile in `<home>/session.json` with
//! restricted permissions (0600). Tokens are never logged or displayed in
//! full. Absence of a session is a valid state, not an error: every read
//! path degrades to "not authenticated" instead of failing.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::paths;

/// User profile as returned by the login endpoint.
///
/// Every field is defaulted so a partially stored or older profile still
/// parses; a record that fails to parse entirely degrades to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id_user: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    /// Display name (lecturer name for admins, username for super admins)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nama: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
}

/// The authenticated principal's credential and profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential, absent when logged out
    pub token: Option<String>,
    #[serde(default)]
    pub user: UserProfile,
}

impl Session {
    /// Creates an authenticated session.
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: Some(token.into()),
            user,
        }
    }

    /// True iff a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Persistence boundary for the session.
///
/// The guard and the API client depend on this abstraction rather than a
/// concrete store, so tests can substitute [`MemorySessionStore`].
pub trait SessionStore: Send + Sync {
    /// Reads the persisted session.
    ///
    /// Never fails: a missing or unreadable store is "not authenticated",
    /// and a corrupt user record degrades to the empty profile.
    fn load(&self) -> Session;

    /// Persists the session.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    fn save(&self, session: &Session) -> Result<()>;

    /// Removes both the token and the user record. Side effect only;
    /// never fails.
    fn clear(&self);
}

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Returns the default session file path under the elearn home.
    pub fn session_path() -> PathBuf {
        paths::session_path()
    }

    /// Creates a store persisting to `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store at the default session path.
    pub fn open_default() -> Self {
        Self::new(Self::session_path())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Session {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Session::default();
        };
        let Ok(raw) = serde_json::from_str::<Value>(&contents) else {
            tracing::warn!(path = %self.path.display(), "session file is not valid JSON");
            return Session::default();
        };

        // Token and user record are read independently: a malformed user
        // record must not invalidate a present token.
        let token = raw
            .get("token")
            .and_then(Value::as_str)
            .map(ToString::to_string);
        let user = raw
            .get("user")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();

        Session { token, user }
    }

    fn save(&self, session: &Session) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session file");
        }
    }
}

/// In-memory session store for deterministic tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Session>,
}

impl MemorySessionStore {
    /// Creates an empty (unauthenticated) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Session {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = session.clone();
        Ok(())
    }

    fn clear(&self) {
        *self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Session::default();
    }
}

/// Returns a masked version of a token for display (first 12 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.len() <= 16 {
        return "***".to_string();
    }
    format!("{}...", &token[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
        FileSessionStore::new(dir.path().join("session.json"))
    }

    /// Test: load without a file is unauthenticated.
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let session = store_in(&dir).load();
        assert!(!session.is_authenticated());
        assert_eq!(session.user, UserProfile::default());
    }

    /// Test: save then load roundtrip.
    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let user = UserProfile {
            username: "admin".to_string(),
            role: "super_admin".to_string(),
            email: "admin@kampus.ac.id".to_string(),
            ..UserProfile::default()
        };
        store
            .save(&Session::new("abc123def456ghi789", user.clone()))
            .unwrap();

        let loaded = store.load();
        assert!(loaded.is_authenticated());
        assert_eq!(loaded.token(), Some("abc123def456ghi789"));
        assert_eq!(loaded.user, user);
    }

    /// Test: a malformed user record degrades to empty without dropping the token.
    #[test]
    fn test_corrupt_user_keeps_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            dir.path().join("session.json"),
            r#"{"token": "abc123", "user": "not-an-object"}"#,
        )
        .unwrap();

        let session = store.load();
        assert_eq!(session.token(), Some("abc123"));
        assert_eq!(session.user, UserProfile::default());
    }

    /// Test: a file that is not JSON at all is unauthenticated.
    #[test]
    fn test_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("session.json"), "%%%").unwrap();

        assert!(!store.load().is_authenticated());
    }

    /// Test: clear removes the file and tolerates a missing one.
    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&Session::new("token-to-clear-0123", UserProfile::default()))
            .unwrap();

        store.clear();
        assert!(!store.load().is_authenticated());
        assert!(!dir.path().join("session.json").exists());

        // second clear is a no-op
        store.clear();
    }

    /// Test: memory store save/clear.
    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert!(!store.load().is_authenticated());

        store
            .save(&Session::new("in-memory-token-123", UserProfile::default()))
            .unwrap();
        assert!(store.load().is_authenticated());

        store.clear();
        assert!(!store.load().is_authenticated());
    }

    /// Test: token masking.
    #[test]
    fn test_mask_token() {
        assert_eq!(
            mask_token("eyJhbGciOiJIUzI1NiJ9.abc.def"),
            "eyJhbGciOiJI..."
        );
        assert_eq!(mask_token("short"), "***");
    }
}
