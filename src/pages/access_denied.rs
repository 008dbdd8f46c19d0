//! Shown when a signed-in user lacks the role a route requires.

use leptos::prelude::*;

use crate::routes::HOME_PATH;
use crate::util::auth::use_auth;

#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    let user_role = use_auth().user_role();

    view! {
        <section class="access-denied-page">
            <h1>"Access denied"</h1>
            <p>
                "Your role (" {move || user_role.get()} ") cannot open that page."
            </p>
            <a href=HOME_PATH class="btn">"Back to home"</a>
        </section>
    }
}
