use super::*;

#[test]
fn validate_login_input_trims_name() {
    assert_eq!(validate_login_input("  Alice ", "user"), Ok(UserRecord::new("Alice", "user")));
}

#[test]
fn validate_login_input_requires_name() {
    assert_eq!(validate_login_input("   ", "user"), Err("Enter a name first."));
}

#[test]
fn validate_login_input_rejects_unknown_role() {
    assert_eq!(validate_login_input("Alice", "root"), Err("Choose one of the listed roles."));
    assert_eq!(validate_login_input("Alice", ""), Err("Choose one of the listed roles."));
}

#[test]
fn validate_login_input_accepts_every_offered_role() {
    for role in ROLE_OPTIONS {
        assert_eq!(validate_login_input("Alice", role).map(|u| u.role), Ok((*role).to_owned()));
    }
}

#[test]
fn destination_defaults_to_home() {
    assert_eq!(post_login_destination(None), "/");
}

#[test]
fn destination_follows_local_redirect() {
    assert_eq!(post_login_destination(Some("/about?tab=2")), "/about?tab=2");
}

#[test]
fn destination_rejects_off_site_redirects() {
    for bad in ["https://evil.test", "//evil.test/about", "/\\evil.test", "about", ""] {
        assert_eq!(post_login_destination(Some(bad)), "/", "{bad}");
    }
}
