//! Session data model and its durable-storage encoding.
//!
//! DESIGN
//! ======
//! Only the user record is held in memory. The authenticated flag, role and
//! display name are derived from it on every read, so they can never drift
//! apart. The flag is still written to storage as its own key because that
//! is the persisted format.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::util::storage::KeyValueStore;

/// Storage key holding the literal `"true"` while a user is logged in.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
/// Storage key holding the JSON-encoded [`UserRecord`].
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Role reported when nobody is logged in.
pub const GUEST_ROLE: &str = "guest";
/// Display name reported when nobody is logged in.
pub const GUEST_NAME: &str = "Guest";

/// A logged-in user as supplied to `login` and persisted under
/// [`CURRENT_USER_KEY`].
///
/// Fields other than `name` and `role` are kept verbatim so a stored record
/// restores unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl UserRecord {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self { name: name.into(), role: role.into(), extra: Map::new() }
    }

    /// Attach an extra field, replacing any previous value under `key`.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// The current login state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    current_user: Option<UserRecord>,
}

impl Session {
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn logged_in(user: UserRecord) -> Self {
        Self { current_user: Some(user) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    /// The user's role, or [`GUEST_ROLE`] when logged out or the record's
    /// role is empty.
    #[must_use]
    pub fn user_role(&self) -> &str {
        self.current_user
            .as_ref()
            .map(|u| u.role.as_str())
            .filter(|r| !r.is_empty())
            .unwrap_or(GUEST_ROLE)
    }

    /// The user's display name, or [`GUEST_NAME`] when logged out or the
    /// record's name is empty.
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.current_user
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(GUEST_NAME)
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            is_authenticated: self.is_authenticated(),
            current_user: self.current_user.clone(),
            user_role: self.user_role().to_owned(),
            user_name: self.user_name().to_owned(),
        }
    }

    /// Rebuild a session from `storage`.
    ///
    /// Logged in only when the flag key reads exactly `"true"` and the user
    /// key holds a JSON object; anything else yields a logged-out session.
    /// Storage is never written here.
    pub fn restore(storage: &dyn KeyValueStore) -> Self {
        let flag = storage.get_item(AUTH_FLAG_KEY);
        let raw_user = storage.get_item(CURRENT_USER_KEY);

        let user = match raw_user.as_deref().map(serde_json::from_str::<UserRecord>) {
            Some(Ok(user)) => Some(user),
            Some(Err(e)) => {
                log::warn!("ignoring unreadable {CURRENT_USER_KEY} record: {e}");
                None
            }
            None => None,
        };

        match (flag.as_deref(), user) {
            (Some("true"), Some(user)) => Self::logged_in(user),
            (Some("true"), None) => {
                log::warn!("{AUTH_FLAG_KEY} set without a usable {CURRENT_USER_KEY}; starting logged out");
                Self::logged_out()
            }
            _ => Self::logged_out(),
        }
    }

    /// Mirror this session into `storage`: both keys when logged in,
    /// neither when logged out.
    pub fn persist(&self, storage: &dyn KeyValueStore) {
        match &self.current_user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => {
                    storage.set_item(AUTH_FLAG_KEY, "true");
                    storage.set_item(CURRENT_USER_KEY, &raw);
                }
                Err(e) => log::warn!("failed to encode {CURRENT_USER_KEY}: {e}"),
            },
            None => {
                storage.remove_item(AUTH_FLAG_KEY);
                storage.remove_item(CURRENT_USER_KEY);
            }
        }
    }
}

/// Owned copy of the four session values, as delivered to listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub current_user: Option<UserRecord>,
    pub user_role: String,
    pub user_name: String,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Session::logged_out().snapshot()
    }
}
