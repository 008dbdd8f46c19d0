use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

const MINIMAL: &[(&str, &str)] = &[
    ("FIREBASE_API_KEY", "key-123"),
    ("FIREBASE_PROJECT_ID", "bookshelf-dev"),
    ("FIREBASE_APP_ID", "1:42:web:abc"),
];

#[test]
fn firebase_defaults_derive_from_project() {
    let cfg = FirebaseConfig::from_lookup(lookup(MINIMAL)).unwrap();
    assert_eq!(cfg.api_key, "key-123");
    assert_eq!(cfg.auth_domain, "bookshelf-dev.firebaseapp.com");
    assert_eq!(cfg.storage_bucket, "bookshelf-dev.firebasestorage.app");
    assert_eq!(cfg.messaging_sender_id, "");
    assert_eq!(cfg.app_id, "1:42:web:abc");
}

#[test]
fn firebase_overrides_are_used_and_trimmed() {
    let mut pairs = MINIMAL.to_vec();
    pairs.push(("FIREBASE_AUTH_DOMAIN", " auth.example.test "));
    pairs.push(("FIREBASE_STORAGE_BUCKET", "bucket.example.test"));
    pairs.push(("FIREBASE_MESSAGING_SENDER_ID", "856"));

    let cfg = FirebaseConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(cfg.auth_domain, "auth.example.test");
    assert_eq!(cfg.storage_bucket, "bucket.example.test");
    assert_eq!(cfg.messaging_sender_id, "856");
}

#[test]
fn firebase_missing_api_key_errors() {
    let err = FirebaseConfig::from_lookup(lookup(&MINIMAL[1..])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "FIREBASE_API_KEY" });
    assert!(err.to_string().contains("FIREBASE_API_KEY"));
}

#[test]
fn firebase_blank_value_counts_as_missing() {
    let pairs = [
        ("FIREBASE_API_KEY", "key"),
        ("FIREBASE_PROJECT_ID", "   "),
        ("FIREBASE_APP_ID", "app"),
    ];
    let err = FirebaseConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "FIREBASE_PROJECT_ID" });
}

#[test]
fn theme_parses_case_insensitively() {
    assert_eq!("Lara".parse::<ThemePreset>().unwrap(), ThemePreset::Lara);
    assert_eq!(" nora ".parse::<ThemePreset>().unwrap(), ThemePreset::Nora);
}

#[test]
fn theme_unknown_errors() {
    let err = "material".parse::<ThemePreset>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownTheme("material".to_owned()));
}

#[test]
fn theme_stylesheet_href() {
    assert_eq!(ThemePreset::Aura.stylesheet_href(), "/themes/aura.css");
}

#[test]
fn app_config_without_firebase_disables_it() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert!(cfg.firebase.is_none());
    assert_eq!(cfg.theme, DEFAULT_THEME);
}

#[test]
fn app_config_with_everything() {
    let mut pairs = MINIMAL.to_vec();
    pairs.push(("UI_THEME", "lara"));
    let cfg = AppConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(cfg.theme, ThemePreset::Lara);
    assert_eq!(cfg.firebase.map(|f| f.project_id).as_deref(), Some("bookshelf-dev"));
}

#[test]
fn app_config_bad_theme_errors() {
    let err = AppConfig::from_lookup(lookup(&[("UI_THEME", "neon")])).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownTheme(_)));
}
