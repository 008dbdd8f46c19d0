use super::*;
use crate::state::session::{Session, UserRecord};

const ADMIN_ONLY: RouteMeta = RouteMeta::roles(&["admin"]);

fn logged_out() -> AuthSnapshot {
    Session::logged_out().snapshot()
}

fn logged_in(role: &str) -> AuthSnapshot {
    Session::logged_in(UserRecord::new("Alice", role)).snapshot()
}

fn to_login(path: &str) -> NavigationOutcome {
    NavigationOutcome::RedirectToLogin { redirect: path.to_owned() }
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn requires_auth_logged_out_goes_to_login() {
    let outcome = evaluate(&RouteMeta::AUTHENTICATED, "/about", &logged_out());
    assert_eq!(outcome, to_login("/about"));
}

#[test]
fn requires_auth_logged_in_is_allowed() {
    let outcome = evaluate(&RouteMeta::AUTHENTICATED, "/about", &logged_in("user"));
    assert_eq!(outcome, NavigationOutcome::Allow);
}

#[test]
fn wrong_role_goes_to_access_denied() {
    let outcome = evaluate(&ADMIN_ONLY, "/admin", &logged_in("user"));
    assert_eq!(outcome, NavigationOutcome::RedirectToAccessDenied);
}

#[test]
fn role_route_logged_out_goes_to_login_not_access_denied() {
    let outcome = evaluate(&ADMIN_ONLY, "/admin", &logged_out());
    assert_eq!(outcome, to_login("/admin"));
}

#[test]
fn matching_role_is_allowed() {
    let meta = RouteMeta::roles(&["editor", "admin"]);
    assert_eq!(evaluate(&meta, "/admin", &logged_in("admin")), NavigationOutcome::Allow);
}

#[test]
fn role_comparison_is_exact() {
    assert_eq!(
        evaluate(&ADMIN_ONLY, "/admin", &logged_in("Admin")),
        NavigationOutcome::RedirectToAccessDenied
    );
}

#[test]
fn no_metadata_always_allows() {
    for session in [logged_out(), logged_in("user"), logged_in("admin")] {
        assert_eq!(evaluate(&RouteMeta::OPEN, "/", &session), NavigationOutcome::Allow);
    }
}

#[test]
fn role_check_overrides_requires_auth() {
    let meta = RouteMeta { requires_auth: true, required_role: Some(&["admin"]) };
    assert_eq!(evaluate(&meta, "/x", &logged_in("user")), NavigationOutcome::RedirectToAccessDenied);
    assert_eq!(evaluate(&meta, "/x", &logged_out()), to_login("/x"));
}

#[test]
fn empty_role_set_denies_every_user() {
    let meta = RouteMeta::roles(&[]);
    assert_eq!(evaluate(&meta, "/x", &logged_in("admin")), NavigationOutcome::RedirectToAccessDenied);
    assert_eq!(evaluate(&meta, "/x", &logged_out()), to_login("/x"));
}

#[test]
fn guest_role_route_still_requires_login() {
    let meta = RouteMeta::roles(&["guest"]);
    assert_eq!(evaluate(&meta, "/x", &logged_out()), to_login("/x"));
}

#[test]
fn redirect_keeps_query_and_fragment() {
    let outcome = evaluate(&RouteMeta::AUTHENTICATED, "/about?tab=2#top", &logged_out());
    assert_eq!(outcome, to_login("/about?tab=2#top"));
}

// =============================================================
// redirect_target
// =============================================================

#[test]
fn allow_has_no_target() {
    assert!(NavigationOutcome::Allow.redirect_target().is_none());
}

#[test]
fn login_target_carries_redirect_param() {
    assert_eq!(to_login("/about").redirect_target().as_deref(), Some("/login?redirect=%2Fabout"));
}

#[test]
fn login_target_encodes_query_characters() {
    assert_eq!(
        to_login("/about?a=1&b=2").redirect_target().as_deref(),
        Some("/login?redirect=%2Fabout%3Fa%3D1%26b%3D2")
    );
}

#[test]
fn access_denied_target_has_no_params() {
    assert_eq!(
        NavigationOutcome::RedirectToAccessDenied.redirect_target().as_deref(),
        Some("/access-denied")
    );
}

// =============================================================
// full_path
// =============================================================

#[test]
fn full_path_plain() {
    assert_eq!(full_path("/about", "", ""), "/about");
}

#[test]
fn full_path_accepts_prefixed_and_bare_parts() {
    assert_eq!(full_path("/about", "?x=1", "#h"), "/about?x=1#h");
    assert_eq!(full_path("/about", "x=1", "h"), "/about?x=1#h");
}

#[test]
fn full_path_skips_lone_markers() {
    assert_eq!(full_path("/about", "?", "#"), "/about");
}
