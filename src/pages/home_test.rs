use super::*;
use crate::config::{AppConfig, FirebaseConfig, ThemePreset};
use crate::services::bootstrap;

#[test]
fn catalogue_status_names_project() {
    let firebase = FirebaseConfig {
        api_key: "key".to_owned(),
        auth_domain: "shelf.firebaseapp.com".to_owned(),
        project_id: "shelf".to_owned(),
        storage_bucket: "shelf.firebasestorage.app".to_owned(),
        messaging_sender_id: String::new(),
        app_id: "app".to_owned(),
    };
    let services = bootstrap(&AppConfig { firebase: Some(firebase), theme: ThemePreset::Aura });
    assert_eq!(catalogue_status(&services), "Catalogue: shelf");
}

#[test]
fn catalogue_status_without_database() {
    let services = bootstrap(&AppConfig { firebase: None, theme: ThemePreset::Aura });
    assert_eq!(catalogue_status(&services), "Catalogue offline");
}
