//! Startup wiring for third-party services.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell only prepares handles; document queries live with the views
//! that issue them.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::config::{AppConfig, FirebaseConfig, ThemePreset};

/// Handle to the project's Firestore database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirestoreHandle {
    config: FirebaseConfig,
}

impl FirestoreHandle {
    #[must_use]
    pub fn new(config: FirebaseConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.config.project_id
    }
}

/// Service handles provided to the component tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Services {
    pub firestore: Option<FirestoreHandle>,
    pub theme: ThemePreset,
}

impl Services {
    /// Project the document database is bound to, if configured.
    #[must_use]
    pub fn database_project(&self) -> Option<&str> {
        self.firestore.as_ref().map(FirestoreHandle::project_id)
    }
}

/// Build the service handles for `config`.
#[must_use]
pub fn bootstrap(config: &AppConfig) -> Services {
    let firestore = config.firebase.clone().map(FirestoreHandle::new);
    match &firestore {
        Some(db) => log::info!("firestore initialized for project {}", db.project_id()),
        None => log::warn!("firestore disabled; book views will have no data source"),
    }
    log::info!("ui theme: {}", config.theme.as_str());
    Services { firestore, theme: config.theme }
}

/// The [`Services`] provided by the root component.
///
/// # Panics
///
/// Panics if no ancestor provided [`Services`].
pub fn use_services() -> Services {
    expect_context::<Services>()
}
