//! Persisted credential slot for the session bearer token.
//!
//! DESIGN
//! ======
//! One token string under a well-known `localStorage` key, shared across
//! same-origin tabs. The store is an explicit handle rather than ambient
//! global state so the API client and session model can be tested against an
//! in-memory backend. Every `get()` re-reads the underlying slot: a token
//! replaced mid-session is observed by the next reader, while a value already
//! captured by an in-flight request is unaffected.
//!
//! Expiry is not tracked client-side; the server enforces it and it surfaces
//! as a 401.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex};

/// `localStorage` key holding the session bearer token.
pub const TOKEN_KEY: &str = "jwt_token";

/// Handle to the persisted credential slot. Cheap to clone; clones share the
/// same underlying storage.
#[derive(Clone)]
pub struct CredentialStore {
    inner: Arc<Inner>,
}

enum Inner {
    /// Browser `localStorage`, scoped to the origin.
    #[cfg(feature = "csr")]
    Browser,
    /// In-memory slot for native builds and tests.
    Memory(Mutex<Option<String>>),
}

impl CredentialStore {
    /// Store backed by the browser's `localStorage`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self { inner: Arc::new(Inner::Browser) }
    }

    /// Store backed by a process-local slot. Used by native builds and tests.
    pub fn in_memory() -> Self {
        Self { inner: Arc::new(Inner::Memory(Mutex::new(None))) }
    }

    /// Read the current token, if any. Absence means the visitor is
    /// anonymous.
    pub fn get(&self) -> Option<String> {
        match &*self.inner {
            #[cfg(feature = "csr")]
            Inner::Browser => {
                let window = web_sys::window()?;
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(value) = storage.get_item(TOKEN_KEY) {
                        return value;
                    }
                }
                None
            }
            Inner::Memory(slot) => slot.lock().ok().and_then(|guard| guard.clone()),
        }
    }

    /// Replace the stored token.
    pub fn set(&self, token: &str) {
        match &*self.inner {
            #[cfg(feature = "csr")]
            Inner::Browser => {
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(storage)) = window.local_storage() {
                        let _ = storage.set_item(TOKEN_KEY, token);
                    }
                }
            }
            Inner::Memory(slot) => {
                if let Ok(mut guard) = slot.lock() {
                    *guard = Some(token.to_owned());
                }
            }
        }
    }

    /// Delete the stored token. The standard reaction to an invalidated
    /// session is `clear()` followed by navigation to the login view.
    pub fn clear(&self) {
        match &*self.inner {
            #[cfg(feature = "csr")]
            Inner::Browser => {
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(storage)) = window.local_storage() {
                        let _ = storage.remove_item(TOKEN_KEY);
                    }
                }
            }
            Inner::Memory(slot) => {
                if let Ok(mut guard) = slot.lock() {
                    *guard = None;
                }
            }
        }
    }
}

/// Invoke `callback` whenever another tab of the same origin changes the
/// token slot. Browser `storage` events only fire in *other* tabs, so this
/// never re-enters for writes made locally. A `key` of `None` means the whole
/// storage area was cleared, which also affects the token.
#[cfg(feature = "csr")]
pub fn on_external_change(callback: impl Fn() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
        let key = event.key();
        if key.is_none() || key.as_deref() == Some(TOKEN_KEY) {
            callback();
        }
    });
    let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    // The listener lives for the lifetime of the page.
    closure.forget();
}
