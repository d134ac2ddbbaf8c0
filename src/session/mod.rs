//! Session store and authentication gate.
//!
//! The session is the client's authenticated identity: a bearer token and a
//! user id, held together. The store is the single owner of that state; the
//! route controller and the analysis fetcher only read it. Authentication is
//! derived, never stored: a session is authenticated iff it holds a
//! non-empty token.

mod file;

pub use file::FileSessionStore;

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::SessionResult;

/// Authenticated identity held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued at login.
    pub token: String,
    /// Identifier of the logged-in user.
    pub user_id: String,
}

impl Session {
    /// Create a session from a token and user id.
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
        }
    }
}

/// Session context shared by the route controller and the analysis fetcher.
///
/// `login` stores token and user id together (both-or-neither) and `logout`
/// clears both, so readers never observe one field without the other. Writes
/// are immediately visible to every reader in the process.
pub trait SessionStore {
    /// The session currently held, if any.
    fn current(&self) -> Option<Session>;

    /// Store a new session, replacing any existing one.
    fn login(&self, token: &str, user_id: &str) -> SessionResult<()>;

    /// Clear the stored session.
    fn logout(&self) -> SessionResult<()>;

    /// True iff a non-empty token is held.
    fn is_authenticated(&self) -> bool {
        self.current().is_some_and(|s| !s.token.is_empty())
    }
}

/// In-memory session store for embedding and tests. Not durable.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Arc<Mutex<Option<Session>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn current(&self) -> Option<Session> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn login(&self, token: &str, user_id: &str) -> SessionResult<()> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(Session::new(token, user_id));
        Ok(())
    }

    fn logout(&self) -> SessionResult<()> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
