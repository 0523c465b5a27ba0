#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::sync::Arc;

use once_cell::sync::Lazy;
use tokio::sync::watch;

static SESSION: Lazy<SessionStore> = Lazy::new(SessionStore::default);

/// Holds the bearer token for the running process. Clones share the same
/// token, so a login or logout is visible to every holder on its next read.
#[derive(Clone)]
pub struct SessionStore {
    token: Arc<watch::Sender<Option<String>>>,
}

impl Default for SessionStore {
    fn default() -> SessionStore {
        let (tx, _rx) = watch::channel(None);
        return SessionStore {
            token: Arc::new(tx),
        };
    }
}

impl SessionStore {
    pub fn global() -> SessionStore {
        return SESSION.clone();
    }

    pub fn token(&self) -> Option<String> {
        return self.token.borrow().clone();
    }

    pub fn is_authenticated(&self) -> bool {
        return self.token.borrow().is_some();
    }

    pub fn set(&self, token: &str) {
        tracing::debug!("session token set");
        self.token.send_replace(Some(token.to_string()));
    }

    pub fn clear(&self) {
        tracing::debug!("session token cleared");
        self.token.send_replace(None);
    }

    /// Notified on every set and clear.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        return self.token.subscribe();
    }
}
