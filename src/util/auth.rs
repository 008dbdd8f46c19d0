//! Reactive view of the auth store for components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` knows nothing about Leptos. This context mirrors its snapshot
//! into a signal through a store subscription, so any component reading the
//! projections below re-renders on login/logout without subscribing itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthStore;
use crate::state::session::{AuthSnapshot, UserRecord};

/// Store handle plus the signal that tracks it.
#[derive(Clone, Debug)]
pub struct AuthContext {
    store: AuthStore,
    snapshot: RwSignal<AuthSnapshot>,
}

impl AuthContext {
    pub fn new(store: AuthStore) -> Self {
        let snapshot = RwSignal::new(store.snapshot());
        // Never unsubscribed: the context lives as long as the app.
        let _subscription = store.subscribe(move |snap: &AuthSnapshot| {
            let _ = snapshot.try_set(snap.clone());
        });
        Self { store, snapshot }
    }

    #[must_use]
    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> ReadSignal<AuthSnapshot> {
        self.snapshot.read_only()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.is_authenticated))
    }

    #[must_use]
    pub fn current_user(&self) -> Signal<Option<UserRecord>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.current_user.clone()))
    }

    #[must_use]
    pub fn user_role(&self) -> Signal<String> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.user_role.clone()))
    }

    #[must_use]
    pub fn user_name(&self) -> Signal<String> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.user_name.clone()))
    }

    pub fn login(&self, user: UserRecord) {
        self.store.login(user);
    }

    pub fn logout(&self) {
        self.store.logout();
    }
}

/// Wrap `store` in an [`AuthContext`] and provide it to descendants.
pub fn provide_auth_context(store: AuthStore) -> AuthContext {
    let ctx = AuthContext::new(store);
    provide_context(ctx.clone());
    ctx
}

/// The [`AuthContext`] provided by an ancestor.
///
/// # Panics
///
/// Panics if no ancestor called [`provide_auth_context`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
