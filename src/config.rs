//! Third-party service configuration: Firestore project settings and the UI
//! theme preset.
//!
//! Values come from a key lookup so the same parsing serves build-time
//! settings (`from_build_env`) and tests (`from_lookup` with a map).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_THEME: ThemePreset = ThemePreset::Aura;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is absent or blank.
    #[error("missing config value: {var} not set")]
    Missing { var: &'static str },

    /// `UI_THEME` names no known preset.
    #[error("unknown UI_THEME: {0}")]
    UnknownTheme(String),
}

/// Firestore project settings, shaped like the Firebase web SDK config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl FirebaseConfig {
    /// Build from `FIREBASE_*` keys.
    ///
    /// Required:
    /// - `FIREBASE_API_KEY`
    /// - `FIREBASE_PROJECT_ID`
    /// - `FIREBASE_APP_ID`
    ///
    /// Optional:
    /// - `FIREBASE_AUTH_DOMAIN`: default `<project>.firebaseapp.com`
    /// - `FIREBASE_STORAGE_BUCKET`: default `<project>.firebasestorage.app`
    /// - `FIREBASE_MESSAGING_SENDER_ID`: default empty
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing { var: key });

        let api_key = require("FIREBASE_API_KEY")?;
        let project_id = require("FIREBASE_PROJECT_ID")?;
        let app_id = require("FIREBASE_APP_ID")?;

        let auth_domain = get("FIREBASE_AUTH_DOMAIN").unwrap_or_else(|| format!("{project_id}.firebaseapp.com"));
        let storage_bucket =
            get("FIREBASE_STORAGE_BUCKET").unwrap_or_else(|| format!("{project_id}.firebasestorage.app"));
        let messaging_sender_id = get("FIREBASE_MESSAGING_SENDER_ID").unwrap_or_default();

        Ok(Self { api_key, auth_domain, project_id, storage_bucket, messaging_sender_id, app_id })
    }
}

/// Component theme preset applied at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreset {
    #[default]
    Aura,
    Lara,
    Nora,
}

impl ThemePreset {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aura => "aura",
            Self::Lara => "lara",
            Self::Nora => "nora",
        }
    }

    /// Stylesheet served for this preset.
    #[must_use]
    pub fn stylesheet_href(self) -> String {
        format!("/themes/{}.css", self.as_str())
    }
}

impl std::str::FromStr for ThemePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aura" => Ok(Self::Aura),
            "lara" => Ok(Self::Lara),
            "nora" => Ok(Self::Nora),
            _ => Err(ConfigError::UnknownTheme(s.to_owned())),
        }
    }
}

/// Everything the shell needs to bootstrap its services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` disables the document database integration.
    pub firebase: Option<FirebaseConfig>,
    pub theme: ThemePreset,
}

impl AppConfig {
    /// Missing Firebase settings are not an error; an unknown theme is.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let theme = match lookup("UI_THEME").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse()?,
            None => DEFAULT_THEME,
        };

        let firebase = match FirebaseConfig::from_lookup(&lookup) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                log::warn!("document database not configured: {e}");
                None
            }
        };

        Ok(Self { firebase, theme })
    }

    /// Settings baked in at compile time from the build environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "FIREBASE_API_KEY" => option_env!("FIREBASE_API_KEY"),
        "FIREBASE_AUTH_DOMAIN" => option_env!("FIREBASE_AUTH_DOMAIN"),
        "FIREBASE_PROJECT_ID" => option_env!("FIREBASE_PROJECT_ID"),
        "FIREBASE_STORAGE_BUCKET" => option_env!("FIREBASE_STORAGE_BUCKET"),
        "FIREBASE_MESSAGING_SENDER_ID" => option_env!("FIREBASE_MESSAGING_SENDER_ID"),
        "FIREBASE_APP_ID" => option_env!("FIREBASE_APP_ID"),
        "UI_THEME" => option_env!("UI_THEME"),
        _ => None,
    };
    value.map(str::to_owned)
}
