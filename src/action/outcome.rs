//! Outcomes: terminal results published by workflow handlers.

use serde::Serialize;
use serde_json::Value;

use super::intent::IntentKind;
use super::payload::Failure;
use crate::identity::AuthResponse;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    CreateAccountFailed {
        error: Failure,
    },
    CreateUserRecordSucceeded {
        response: Value,
    },
    CreateUserRecordFailed {
        error: Failure,
    },
    SignInSucceeded {
        response: AuthResponse,
    },
    SignInFailed {
        error: Failure,
    },
    SignOutSucceeded,
    SignOutFailed {
        error: Failure,
    },
    UserFetchSucceeded {
        data: Value,
    },
    CurrentUserSet {
        data: Value,
    },
    UserFetchFailed {
        message: String,
    },
    PostMessageSucceeded {
        result: Value,
    },
    PostMessageFailed {
        message: String,
    },
    UpdateChatSucceeded {
        #[serde(rename = "userUid")]
        user_uid: Option<String>,
        #[serde(rename = "messageId")]
        message_id: Option<String>,
        snapshot: Value,
    },
}

impl Outcome {
    /// Kind of the intent whose workflow produced this outcome.
    ///
    /// Social sign-in shares its outcomes with credential sign-in, so both
    /// report `SignIn`.
    pub fn kind(&self) -> IntentKind {
        match self {
            Outcome::CreateAccountFailed { .. } => IntentKind::CreateAccount,
            Outcome::CreateUserRecordSucceeded { .. } | Outcome::CreateUserRecordFailed { .. } => {
                IntentKind::CreateUserRecord
            }
            Outcome::SignInSucceeded { .. } | Outcome::SignInFailed { .. } => IntentKind::SignIn,
            Outcome::SignOutSucceeded | Outcome::SignOutFailed { .. } => IntentKind::SignOut,
            Outcome::UserFetchSucceeded { .. }
            | Outcome::CurrentUserSet { .. }
            | Outcome::UserFetchFailed { .. } => IntentKind::FetchUser,
            Outcome::PostMessageSucceeded { .. } | Outcome::PostMessageFailed { .. } => {
                IntentKind::PostMessage
            }
            Outcome::UpdateChatSucceeded { .. } => IntentKind::UpdateChatState,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure_message().is_some()
    }

    /// Human-readable error for failed outcomes.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Outcome::CreateAccountFailed { error }
            | Outcome::CreateUserRecordFailed { error }
            | Outcome::SignInFailed { error }
            | Outcome::SignOutFailed { error } => Some(&error.message),
            Outcome::UserFetchFailed { message } | Outcome::PostMessageFailed { message } => {
                Some(message)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_expose_message() {
        let outcome = Outcome::SignInFailed {
            error: Failure::new(Some("auth/wrong-password".into()), "bad password"),
        };
        assert!(outcome.is_failure());
        assert_eq!(outcome.failure_message(), Some("bad password"));
        assert_eq!(outcome.kind(), IntentKind::SignIn);

        assert!(!Outcome::SignOutSucceeded.is_failure());
    }

    #[test]
    fn serialized_outcome_uses_screaming_tag() {
        let outcome = Outcome::UpdateChatSucceeded {
            user_uid: Some("u1".into()),
            message_id: Some("m1".into()),
            snapshot: serde_json::json!({"text": "hi"}),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "UPDATE_CHAT_SUCCEEDED");
        assert_eq!(json["messageId"], "m1");
    }
}
