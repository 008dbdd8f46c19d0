//! Route guard applied to every navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the router's `Routes`. Each location change is evaluated against
//! the route table and the session snapshot at that instant; blocked
//! navigations are replaced by the redirect target, so the protected view is
//! never rendered. Login/logout alone does not re-run the guard.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::guard::{self, NavigationOutcome};
use crate::routes;
use crate::state::session::AuthSnapshot;
use crate::util::auth::use_auth;

/// Guard outcome tracking only the location parts. The session is read
/// untracked so it is sampled per navigation.
pub(crate) fn navigation_outcome(
    pathname: Signal<String>,
    search: Signal<String>,
    hash: Signal<String>,
    session: Signal<AuthSnapshot>,
) -> Memo<NavigationOutcome> {
    Memo::new(move |_| {
        let path = pathname.get();
        let target = guard::full_path(&path, &search.get(), &hash.get());
        let meta = routes::meta_for_path(&path);
        session.with_untracked(|session| guard::evaluate(&meta, &target, session))
    })
}

/// Render `children` only while the current location is allowed.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let snapshot = use_auth().snapshot();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = navigation_outcome(
        location.pathname.into(),
        location.search.into(),
        location.hash.into(),
        snapshot.into(),
    );

    Effect::new(move |_| {
        if let Some(target) = outcome.get().redirect_target() {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <Show when=move || outcome.with(NavigationOutcome::is_allowed)>{children()}</Show> }
}
