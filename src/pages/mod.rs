//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Only the shell's own screens live here. Book, weather and Firebase
//! sign-in views are provided elsewhere; their routes are listed in
//! `crate::routes` so the guard still covers them.

pub mod about;
pub mod access_denied;
pub mod home;
pub mod login;
