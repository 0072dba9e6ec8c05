//! Payload records carried by intents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Form data submitted when a user signs up with email and password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image: Option<String>,
    pub username: Option<String>,
}

impl NewAccount {
    /// Email and password, when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        non_empty(&self.email).zip(non_empty(&self.password))
    }
}

/// Email/password pair for signing in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Email and password, when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        non_empty(&self.email).zip(non_empty(&self.password))
    }
}

/// Raw provider name as entered by the user (e.g. "GOOGLE").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSignIn {
    pub provider: String,
}

/// Lookup parameters forwarded verbatim to the user endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserQuery(pub Map<String, Value>);

impl UserQuery {
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

/// A chat message typed into a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub current_message: String,
    pub channel: String,
    pub user_uid: String,
    pub username: String,
}

/// A realtime chat snapshot pushed by the message feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatUpdate {
    pub message_id: Option<String>,
    pub snapshot: Option<Value>,
    pub user_uid: Option<String>,
}

/// Profile record persisted by the user service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Error details attached to a failed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

impl Failure {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_halves() {
        let mut account = NewAccount {
            email: Some("x".into()),
            password: Some(String::new()),
            ..Default::default()
        };
        assert!(account.credentials().is_none());

        account.password = Some("secret".into());
        assert_eq!(account.credentials(), Some(("x", "secret")));

        account.email = None;
        assert!(account.credentials().is_none());
    }

    #[test]
    fn profile_omits_absent_fields() {
        let profile = UserProfile {
            user_uid: "u1".into(),
            first_name: Some("Jane".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({"userUid": "u1", "firstName": "Jane"}));
    }

    #[test]
    fn password_never_serialized() {
        let creds = Credentials::new("a@b.c", "hunter2");
        let json = serde_json::to_string(&creds).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
