//! Error types for identity backend calls.

use thiserror::Error;

use crate::action::Failure;

/// Errors that can occur while talking to the identity backend.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Request never produced a usable response. The URL is stripped since
    /// it carries the API key.
    #[error("Identity request failed: {0}")]
    Transport(reqwest::Error),

    /// Configured base URL cannot be turned into an endpoint URL
    #[error("Invalid identity endpoint: {0}")]
    Endpoint(String),

    /// Backend rejected the request (bad credential, duplicate email, ...)
    #[error("{message}")]
    Rejected { code: &'static str, message: String },

    /// Interactive flow was abandoned before a credential was obtained
    #[error("The popup has been closed by the user before finalizing the operation.")]
    PopupClosed,

    /// Backend answered with a body we could not decode
    #[error("Malformed identity response: {0}")]
    Decode(String),
}

impl IdentityError {
    /// Stable error code in the `auth/...` namespace.
    pub fn code(&self) -> &'static str {
        match self {
            IdentityError::Transport(_) => "auth/network-request-failed",
            IdentityError::Rejected { code, .. } => *code,
            IdentityError::PopupClosed => "auth/popup-closed-by-user",
            IdentityError::Endpoint(_) | IdentityError::Decode(_) => "auth/internal-error",
        }
    }

    /// Build a rejection from the backend's error message (e.g. "EMAIL_EXISTS"
    /// or "WEAK_PASSWORD : Password should be at least 6 characters").
    pub fn from_backend_message(raw: &str) -> Self {
        let (reason, detail) = match raw.split_once(" : ") {
            Some((reason, detail)) => (reason.trim(), Some(detail.trim())),
            None => (raw.trim(), None),
        };

        let (code, message) = match reason {
            "EMAIL_EXISTS" => (
                "auth/email-already-in-use",
                "The email address is already in use by another account.",
            ),
            "WEAK_PASSWORD" => (
                "auth/weak-password",
                "Password should be at least 6 characters.",
            ),
            "INVALID_EMAIL" => ("auth/invalid-email", "The email address is badly formatted."),
            "EMAIL_NOT_FOUND" => (
                "auth/user-not-found",
                "There is no user record corresponding to this identifier.",
            ),
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => (
                "auth/wrong-password",
                "The password is invalid or the user does not have a password.",
            ),
            "USER_DISABLED" => (
                "auth/user-disabled",
                "The user account has been disabled by an administrator.",
            ),
            "TOO_MANY_ATTEMPTS_TRY_LATER" => (
                "auth/too-many-requests",
                "Access to this account has been temporarily disabled. Try again later.",
            ),
            "OPERATION_NOT_ALLOWED" => (
                "auth/operation-not-allowed",
                "This sign-in method is disabled for this project.",
            ),
            "INVALID_IDP_RESPONSE" => (
                "auth/invalid-credential",
                "The supplied auth credential is malformed or has expired.",
            ),
            _ => ("auth/internal-error", ""),
        };

        let message = match (message.is_empty(), detail) {
            (false, _) => message.to_string(),
            (true, Some(detail)) => detail.to_string(),
            (true, None) => reason.to_string(),
        };

        IdentityError::Rejected { code, message }
    }
}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        IdentityError::Transport(err.without_url())
    }
}

impl From<&IdentityError> for Failure {
    fn from(err: &IdentityError) -> Self {
        Failure::new(Some(err.code().to_string()), err.to_string())
    }
}
