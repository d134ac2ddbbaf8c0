use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use super::{Session, SessionStore};
use crate::error::{SessionError, SessionResult};

/// File-backed session store.
///
/// Both session fields live in one JSON file, written via a temp file and
/// rename so a login lands both-or-neither on disk. An in-memory copy backs
/// reads; every write updates memory and disk in the same call, so there is
/// no staleness window within the process.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    cached: Arc<Mutex<Option<Session>>>,
}

impl FileSessionStore {
    /// Open a store at the given path, loading any persisted session.
    ///
    /// A missing file means no session. A corrupt or partial file is treated
    /// as logged out (logged, not surfaced), matching the storage contract
    /// that absence of either key implies unauthenticated.
    pub fn open(path: impl Into<PathBuf>) -> SessionResult<Self> {
        let path = path.into();

        let cached = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) if !session.token.is_empty() && !session.user_id.is_empty() => {
                    debug!(user_id = %session.user_id, "session restored from disk");
                    Some(session)
                }
                Ok(_) => {
                    warn!(path = %path.display(), "session file missing token or user id, treating as logged out");
                    None
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt session file, treating as logged out");
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(SessionError::Io(e)),
        };

        Ok(Self {
            path,
            cached: Arc::new(Mutex::new(cached)),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn persist(&self, session: &Session) -> SessionResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(session)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn current(&self) -> Option<Session> {
        self.cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn login(&self, token: &str, user_id: &str) -> SessionResult<()> {
        let session = Session::new(token, user_id);
        self.persist(&session)?;
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = Some(session);
        debug!(user_id, "session stored");
        Ok(())
    }

    fn logout(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(SessionError::Io(e)),
        }
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = None;
        debug!("session cleared");
        Ok(())
    }
}
