//! Landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::routes::LOGIN_PATH;
use crate::services::{Services, use_services};
use crate::util::auth::use_auth;

/// Footer line describing where book data comes from.
pub(crate) fn catalogue_status(services: &Services) -> String {
    match services.database_project() {
        Some(project) => format!("Catalogue: {project}"),
        None => "Catalogue offline".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let user_name = auth.user_name();
    let is_authenticated = auth.is_authenticated();
    let status = catalogue_status(&use_services());

    view! {
        <section class="home-page">
            <h1>"Bookshelf"</h1>
            <p>"Welcome, " {move || user_name.get()} "."</p>
            <Show when=move || !is_authenticated.get()>
                <p>
                    <a href=LOGIN_PATH>"Sign in"</a>
                    " to see member pages."
                </p>
            </Show>
            <p class="catalogue-status">{status}</p>
        </section>
    }
}
