//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, route_guard::RouteGuard};
use crate::pages::{about::AboutPage, access_denied::AccessDeniedPage, home::HomePage, login::LoginPage};
use crate::services::Services;
use crate::state::auth::AuthStore;
use crate::util::auth::provide_auth_context;

/// Root application component.
///
/// `store` and `services` are built once at startup and handed down through
/// context; nothing below reaches for globals.
#[component]
pub fn App(store: AuthStore, services: Services) -> impl IntoView {
    provide_meta_context();
    provide_auth_context(store);

    let theme_href = services.theme.stylesheet_href();
    provide_context(services);

    view! {
        <Stylesheet id="theme" href=theme_href/>
        <Title text="Bookshelf"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <RouteGuard>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("access-denied") view=AccessDeniedPage/>
                    </Routes>
                </RouteGuard>
            </main>
        </Router>
    }
}
