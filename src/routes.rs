//! Application route table and per-route access metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` registers the views; this table is what the navigation guard
//! consults. Routes whose views live outside this crate (book, weather and
//! Firebase screens) are still listed so their metadata is enforced.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const ABOUT_PATH: &str = "/about";
pub const LOGIN_PATH: &str = "/login";
pub const ACCESS_DENIED_PATH: &str = "/access-denied";

/// Access requirements attached to a route. The default is unrestricted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Any logged-in user may enter.
    pub requires_auth: bool,
    /// Only users whose role is in this set may enter. Takes precedence over
    /// `requires_auth` when present.
    pub required_role: Option<&'static [&'static str]>,
}

impl RouteMeta {
    pub const OPEN: Self = Self { requires_auth: false, required_role: None };
    pub const AUTHENTICATED: Self = Self { requires_auth: true, required_role: None };

    #[must_use]
    pub const fn roles(roles: &'static [&'static str]) -> Self {
        Self { requires_auth: false, required_role: Some(roles) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

impl RouteEntry {
    /// Match `pathname` against this route: case-insensitive, with one
    /// trailing slash ignored on either side.
    #[must_use]
    pub fn matches(&self, pathname: &str) -> bool {
        trim_trailing_slash(self.path).eq_ignore_ascii_case(trim_trailing_slash(pathname))
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: HOME_PATH, name: "Home", meta: RouteMeta::OPEN },
    RouteEntry { path: "/GetAllBookAPI", name: "GetAllBookAPI", meta: RouteMeta::OPEN },
    RouteEntry { path: ABOUT_PATH, name: "About", meta: RouteMeta::AUTHENTICATED },
    RouteEntry { path: "/CountBookAPI", name: "CountBookAPI", meta: RouteMeta::OPEN },
    RouteEntry { path: "/WeatherCheck", name: "GetWeather", meta: RouteMeta::OPEN },
    RouteEntry { path: LOGIN_PATH, name: "Login", meta: RouteMeta::OPEN },
    RouteEntry { path: ACCESS_DENIED_PATH, name: "AccessDenied", meta: RouteMeta::OPEN },
    RouteEntry { path: "/FireLogin", name: "FireLogin", meta: RouteMeta::OPEN },
    RouteEntry { path: "/FireRegister", name: "FireRegister", meta: RouteMeta::OPEN },
    RouteEntry { path: "/addBook", name: "Addbook", meta: RouteMeta::OPEN },
];

/// First route in `routes` matching `pathname`.
#[must_use]
pub fn find_route<'a>(routes: &'a [RouteEntry], pathname: &str) -> Option<&'a RouteEntry> {
    routes.iter().find(|r| r.matches(pathname))
}

/// Metadata for `pathname` in the application table; unknown paths are
/// unrestricted.
#[must_use]
pub fn meta_for_path(pathname: &str) -> RouteMeta {
    find_route(ROUTES, pathname).map(|r| r.meta).unwrap_or_default()
}
