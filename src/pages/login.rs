//! Login page: picks a display name and role, then returns the user to the
//! page that sent them here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::guard::REDIRECT_PARAM;
use crate::routes::HOME_PATH;
use crate::state::session::UserRecord;
use crate::util::auth::use_auth;

/// Roles offered on the login form; the first is preselected.
pub const ROLE_OPTIONS: &[&str] = &["user", "admin"];

pub(crate) fn validate_login_input(name: &str, role: &str) -> Result<UserRecord, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a name first.");
    }
    if !ROLE_OPTIONS.contains(&role) {
        return Err("Choose one of the listed roles.");
    }
    Ok(UserRecord::new(name, role))
}

/// Where to go after login. Only same-origin absolute paths from the
/// `redirect` parameter are honored; anything else goes home.
pub(crate) fn post_login_destination(redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\") => {
            path.to_owned()
        }
        _ => HOME_PATH.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();

    let name = RwSignal::new(String::new());
    let role = RwSignal::new(ROLE_OPTIONS[0].to_owned());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&name.get(), &role.get()) {
            Ok(user) => {
                info.set(String::new());
                auth.login(user);
                let redirect = query.with_untracked(|q| q.get(REDIRECT_PARAM));
                navigate(&post_login_destination(redirect.as_deref()), NavigateOptions::default());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {ROLE_OPTIONS
                            .iter()
                            .map(|r| view! { <option value=*r>{*r}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="login-button" type="submit">
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
