//! Durable storage for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only piece of the session that survives a reload. The
//! browser build keeps it in `localStorage` under a single key holding the raw
//! token string; other builds and tests use [`MemoryStorage`].

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use std::cell::RefCell;
use std::rc::Rc;

/// A single mutable cell holding the persisted token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage` under a fixed key. A no-op outside the `csr` build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Warn on a failed storage mutation. Returns whether it succeeded.
#[cfg(any(test, feature = "csr"))]
fn check_write<E>(result: Result<(), E>, action: &str, key: &str) -> bool {
    if result.is_err() {
        log::warn!("localStorage {action} failed for key {key}");
        return false;
    }
    true
}

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = browser_storage() else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            check_write(storage.set_item(&self.key, token), "write", &self.key);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = browser_storage() else {
                log::warn!("localStorage unavailable; token not removed");
                return;
            };
            check_write(storage.remove_item(&self.key), "remove", &self.key);
        }
    }
}

/// In-process token cell. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.to_owned()))) }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
