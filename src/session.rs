//! Session State
//!
//! Holds the bearer token for the signed-in user. Token presence is the
//! entire auth state: present means authenticated, absent means not. No
//! expiry or signature is checked locally; a stale token is discovered
//! when the next request comes back 401.

use std::sync::{Arc, Mutex};

const TOKEN_KEY: &str = "token";

/// Narrow handle over the single token slot. Cloning shares the slot.
#[derive(Clone)]
pub struct Session {
    backing: Backing,
}

#[derive(Clone)]
enum Backing {
    /// window.localStorage, surviving page reloads.
    Browser,
    /// In-process slot for unit tests.
    Memory(Arc<Mutex<Option<String>>>),
}

impl Session {
    pub fn browser() -> Self {
        Session { backing: Backing::Browser }
    }

    pub fn memory() -> Self {
        Session {
            backing: Backing::Memory(Arc::new(Mutex::new(None))),
        }
    }

    pub fn token(&self) -> Option<String> {
        match &self.backing {
            Backing::Browser => local_storage()?.get_item(TOKEN_KEY).ok().flatten(),
            Backing::Memory(slot) => slot.lock().ok()?.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Login success: write the token.
    pub fn store(&self, token: &str) {
        match &self.backing {
            Backing::Browser => {
                if let Some(storage) = local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, token);
                }
            }
            Backing::Memory(slot) => {
                if let Ok(mut slot) = slot.lock() {
                    *slot = Some(token.to_string());
                }
            }
        }
    }

    /// Sign-out or server rejection: drop the token.
    pub fn clear(&self) {
        match &self.backing {
            Backing::Browser => {
                if let Some(storage) = local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
            Backing::Memory(slot) => {
                if let Ok(mut slot) = slot.lock() {
                    *slot = None;
                }
            }
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        let session = Session::memory();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn storing_a_token_authenticates() {
        let session = Session::memory();
        session.store("abc123");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123".to_string()));
    }

    #[test]
    fn clearing_returns_to_unauthenticated() {
        let session = Session::memory();
        session.store("abc123");
        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_the_same_slot() {
        let session = Session::memory();
        let other = session.clone();
        session.store("abc123");
        assert_eq!(other.token(), Some("abc123".to_string()));
        other.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn last_writer_wins() {
        let session = Session::memory();
        session.store("first");
        session.store("second");
        assert_eq!(session.token(), Some("second".to_string()));
    }
}
