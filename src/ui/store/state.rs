use std::collections::BTreeMap;

use serde_json::Value;

use crate::action::NewAccount;
use crate::ui::mvi::UiState;

/// Editable fields of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Username,
    Password,
    Image,
    Terms,
}

impl FormField {
    /// Key used in `UserUpdate` intents.
    pub fn key(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Username => "username",
            FormField::Password => "password",
            FormField::Image => "image",
            FormField::Terms => "terms",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "firstName" => Some(FormField::FirstName),
            "lastName" => Some(FormField::LastName),
            "email" => Some(FormField::Email),
            "username" => Some(FormField::Username),
            "password" => Some(FormField::Password),
            "image" => Some(FormField::Image),
            "terms" => Some(FormField::Terms),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email Address",
            FormField::Username => "Username",
            FormField::Password => "Password",
            FormField::Image => "Image URL",
            FormField::Terms => "I have read terms and conditions",
        }
    }
}

/// Values currently typed into the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub image: String,
    pub terms: bool,
}

impl SignUpForm {
    /// Text value of `field` (`"true"`/`"false"` for the terms checkbox).
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::FirstName => self.first_name.clone(),
            FormField::LastName => self.last_name.clone(),
            FormField::Email => self.email.clone(),
            FormField::Username => self.username.clone(),
            FormField::Password => self.password.clone(),
            FormField::Image => self.image.clone(),
            FormField::Terms => self.terms.to_string(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Username => self.username = value,
            FormField::Password => self.password = value,
            FormField::Image => self.image = value,
            FormField::Terms => self.terms = value == "true",
        }
    }

    /// Payload for the `CreateAccount` intent emitted on submit.
    pub fn to_new_account(&self) -> NewAccount {
        NewAccount {
            email: non_empty(&self.email),
            password: non_empty(&self.password),
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            image: non_empty(&self.image),
            username: non_empty(&self.username),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    SignedOut,
    SignedIn {
        uid: String,
    },
}

/// Global client state driven by coordinator actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStore {
    pub form: SignUpForm,
    /// Profile record returned by the user service.
    pub user: Option<Value>,
    pub status: AuthStatus,
    pub last_error: Option<String>,
    /// Most recent message-submission result.
    pub last_posted: Option<Value>,
    /// Chat snapshots keyed by message id.
    pub chat: BTreeMap<String, Value>,
}

impl UiState for UserStore {}

impl UserStore {
    /// `userUid` of the stored profile record, if any.
    pub fn user_uid(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.get("userUid"))
            .and_then(Value::as_str)
    }
}
