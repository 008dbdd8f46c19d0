use super::*;

fn firebase() -> FirebaseConfig {
    FirebaseConfig {
        api_key: "key".to_owned(),
        auth_domain: "demo.firebaseapp.com".to_owned(),
        project_id: "demo".to_owned(),
        storage_bucket: "demo.firebasestorage.app".to_owned(),
        messaging_sender_id: String::new(),
        app_id: "app".to_owned(),
    }
}

#[test]
fn bootstrap_with_firebase_creates_handle() {
    let services = bootstrap(&AppConfig { firebase: Some(firebase()), theme: ThemePreset::Nora });
    assert_eq!(services.database_project(), Some("demo"));
    assert_eq!(services.theme, ThemePreset::Nora);
}

#[test]
fn bootstrap_without_firebase_has_no_handle() {
    let services = bootstrap(&AppConfig { firebase: None, theme: ThemePreset::Aura });
    assert!(services.firestore.is_none());
    assert!(services.database_project().is_none());
}

#[test]
fn use_services_returns_provided_handles() {
    Owner::new().with(|| {
        let services = bootstrap(&AppConfig { firebase: Some(firebase()), theme: ThemePreset::Lara });
        provide_context(services.clone());
        assert_eq!(use_services(), services);
    });
}
