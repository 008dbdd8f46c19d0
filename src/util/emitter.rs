//! Typed change-notification primitive.
//!
//! DESIGN
//! ======
//! Listeners are stored behind `Arc` and copied out of the registry before a
//! pass runs, so a listener may subscribe or unsubscribe (itself or others)
//! from inside its callback without deadlocking. Such changes take effect on
//! the next pass.

#[cfg(test)]
#[path = "emitter_test.rs"]
mod emitter_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Identity of a single registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(SubscriberId, Listener<T>)>,
}

/// Broadcasts values of type `T` to every registered listener.
pub struct Emitter<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry { next_id: 0, listeners: Vec::new() })),
        }
    }
}

impl<T> Emitter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. Every call creates a distinct registration, even
    /// for the same closure.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriberId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Call every listener registered at the start of the pass with `value`.
    pub fn emit(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner).listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle returned by [`Emitter::subscribe`].
///
/// Dropping the handle leaves the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
pub struct Subscription<T> {
    id: SubscriberId,
    registry: Weak<Mutex<Registry<T>>>,
}

impl<T> Subscription<T> {
    #[must_use]
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove exactly this registration. A no-op if the emitter is gone.
    pub fn unsubscribe(self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .retain(|(id, _)| *id != self.id);
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
