//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in the entry point and injected into the component tree.
//! The navigation guard, login page and nav bar all read the same store.
//!
//! DESIGN
//! ======
//! `login`/`logout` update memory, mirror the change into durable storage,
//! then notify every listener before returning. A mutation requested from
//! inside a listener is queued and applied after the running pass, with its
//! own pass, so listeners never see a half-notified state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::session::{AuthSnapshot, Session, UserRecord};
use crate::util::emitter::{Emitter, Subscription};
use crate::util::storage::KeyValueStore;

enum Mutation {
    Login(UserRecord),
    Logout,
}

struct Pending {
    queue: VecDeque<Mutation>,
    draining: bool,
}

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    session: Mutex<Session>,
    pending: Mutex<Pending>,
    listeners: Emitter<AuthSnapshot>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases the drain flag if a listener unwinds mid-pass. Mutations still
/// queued behind the failed pass are discarded.
struct DrainGuard<'a> {
    pending: &'a Mutex<Pending>,
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut pending = lock(self.pending);
            pending.draining = false;
            pending.queue.clear();
        }
    }
}

/// Shared handle to the authentication state. Clones refer to one store.
#[derive(Clone)]
pub struct AuthStore {
    inner: Arc<Inner>,
}

impl AuthStore {
    /// Build the store from whatever `storage` holds.
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let session = Session::restore(storage.as_ref());
        log::debug!(
            "auth store restored: authenticated={} role={}",
            session.is_authenticated(),
            session.user_role()
        );
        Self {
            inner: Arc::new(Inner {
                storage,
                session: Mutex::new(session),
                pending: Mutex::new(Pending { queue: VecDeque::new(), draining: false }),
                listeners: Emitter::new(),
            }),
        }
    }

    /// Log `user` in, persist it, and notify listeners.
    pub fn login(&self, user: UserRecord) {
        self.submit(Mutation::Login(user));
    }

    /// Log out, clear persisted state, and notify listeners. Notifies even
    /// when already logged out.
    pub fn logout(&self) {
        self.submit(Mutation::Logout);
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        lock(&self.inner.session).is_authenticated()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<UserRecord> {
        lock(&self.inner.session).current_user().cloned()
    }

    #[must_use]
    pub fn user_role(&self) -> String {
        lock(&self.inner.session).user_role().to_owned()
    }

    #[must_use]
    pub fn user_name(&self) -> String {
        lock(&self.inner.session).user_name().to_owned()
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        lock(&self.inner.session).snapshot()
    }

    /// Register `listener` for every later login/logout.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<AuthSnapshot>
    where
        F: Fn(&AuthSnapshot) + Send + Sync + 'static,
    {
        self.inner.listeners.subscribe(listener)
    }

    fn submit(&self, mutation: Mutation) {
        {
            let mut pending = lock(&self.inner.pending);
            pending.queue.push_back(mutation);
            if pending.draining {
                log::debug!("auth mutation queued behind running notification pass");
                return;
            }
            pending.draining = true;
        }
        let _guard = DrainGuard { pending: &self.inner.pending };

        loop {
            let next = {
                let mut pending = lock(&self.inner.pending);
                let next = pending.queue.pop_front();
                if next.is_none() {
                    pending.draining = false;
                }
                next
            };
            let Some(mutation) = next else {
                break;
            };
            let snapshot = self.apply(mutation);
            self.inner.listeners.emit(&snapshot);
        }
    }

    fn apply(&self, mutation: Mutation) -> AuthSnapshot {
        let mut session = lock(&self.inner.session);
        *session = match mutation {
            Mutation::Login(user) => {
                log::info!("login: {} ({})", user.name, user.role);
                Session::logged_in(user)
            }
            Mutation::Logout => {
                log::info!("logout");
                Session::logged_out()
            }
        };
        session.persist(self.inner.storage.as_ref());
        session.snapshot()
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("session", &*lock(&self.inner.session))
            .field("listeners", &self.inner.listeners.len())
            .finish_non_exhaustive()
    }
}
