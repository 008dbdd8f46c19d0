//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain data model and its storage encoding; `auth` wraps
//! it in the shared, observable store that the rest of the app injects.

pub mod auth;
pub mod session;
