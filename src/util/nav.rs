//! Navigation capability for redirect side effects outside the router.
//!
//! DESIGN
//! ======
//! The API client needs to issue a redirect when it observes an invalidated
//! session, but it runs outside any component and cannot use router hooks.
//! `Navigator` wraps `window.location` behind an injectable handle with a
//! recording backend, so redirect intents can be asserted in native tests.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::sync::{Arc, Mutex};

/// Handle for reading the current path and issuing hard redirects.
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct Navigator {
    inner: Arc<Inner>,
}

enum Inner {
    /// Real `window.location`.
    #[cfg(feature = "csr")]
    Browser,
    /// Records redirects instead of performing them. Backs native builds and
    /// tests.
    Recorded(Mutex<Recorded>),
}

struct Recorded {
    current: String,
    visits: Vec<String>,
}

impl Navigator {
    /// Navigator backed by `window.location`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self { inner: Arc::new(Inner::Browser) }
    }

    /// Navigator that records redirect intents, starting at `initial`.
    pub fn recorded(initial: &str) -> Self {
        Self {
            inner: Arc::new(Inner::Recorded(Mutex::new(Recorded {
                current: initial.to_owned(),
                visits: Vec::new(),
            }))),
        }
    }

    /// Path component of the current location.
    pub fn current_path(&self) -> String {
        match &*self.inner {
            #[cfg(feature = "csr")]
            Inner::Browser => web_sys::window()
                .and_then(|window| window.location().pathname().ok())
                .unwrap_or_default(),
            Inner::Recorded(state) => state
                .lock()
                .map(|guard| guard.current.clone())
                .unwrap_or_default(),
        }
    }

    /// Redirect to `path`. Returns `false` without navigating when the
    /// location already matches, so repeated invalidation handling cannot
    /// loop.
    pub fn redirect_to(&self, path: &str) -> bool {
        if self.current_path() == path {
            return false;
        }
        match &*self.inner {
            #[cfg(feature = "csr")]
            Inner::Browser => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(path);
                }
            }
            Inner::Recorded(state) => {
                if let Ok(mut guard) = state.lock() {
                    guard.current = path.to_owned();
                    guard.visits.push(path.to_owned());
                }
            }
        }
        true
    }

    /// Redirects recorded so far. Always empty for the browser backend.
    pub fn visits(&self) -> Vec<String> {
        match &*self.inner {
            #[cfg(feature = "csr")]
            Inner::Browser => Vec::new(),
            Inner::Recorded(state) => state
                .lock()
                .map(|guard| guard.visits.clone())
                .unwrap_or_default(),
        }
    }
}
