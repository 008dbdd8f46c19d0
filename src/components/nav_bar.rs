//! Top navigation bar with the signed-in identity and a logout button.

use leptos::prelude::*;

use crate::routes::{ABOUT_PATH, HOME_PATH, LOGIN_PATH};
use crate::util::auth::use_auth;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated();
    let user_name = auth.user_name();
    let user_role = auth.user_role();

    let logout = Callback::new(move |()| auth.logout());

    view! {
        <nav class="nav-bar">
            <a href=HOME_PATH class="nav-bar__link">"Home"</a>
            <a href=ABOUT_PATH class="nav-bar__link">"About"</a>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">
                {move || user_name.get()}
                " ("
                <span class="nav-bar__role">{move || user_role.get()}</span>
                ")"
            </span>
            <Show
                when=move || is_authenticated.get()
                fallback=|| view! { <a href=LOGIN_PATH class="nav-bar__link">"Login"</a> }
            >
                <button class="btn nav-bar__logout" on:click=move |_| logout.run(())>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
