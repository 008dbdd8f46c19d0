//! Members-only page showing the signed-in account.

use leptos::prelude::*;

use crate::util::auth::use_auth;

/// Reachable only when authenticated; see `crate::routes::ROUTES`.
#[component]
pub fn AboutPage() -> impl IntoView {
    let auth = use_auth();
    let user_name = auth.user_name();
    let user_role = auth.user_role();

    view! {
        <section class="about-page">
            <h1>"About"</h1>
            <dl class="about-page__account">
                <dt>"Name"</dt>
                <dd>{move || user_name.get()}</dd>
                <dt>"Role"</dt>
                <dd>{move || user_role.get()}</dd>
            </dl>
        </section>
    }
}
