//! Intents: requests to start a workflow.

use serde::Serialize;

use super::payload::{
    ChatMessage, ChatUpdate, Credentials, NewAccount, SocialSignIn, UserProfile, UserQuery,
};

/// The fixed set of workflow triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntentKind {
    CreateAccount,
    SignIn,
    SignInSocial,
    SignOut,
    FetchUser,
    PostMessage,
    UpdateChatState,
    CreateUserRecord,
}

impl IntentKind {
    /// Every kind, in registration order.
    pub const ALL: [IntentKind; 8] = [
        IntentKind::CreateAccount,
        IntentKind::SignIn,
        IntentKind::SignInSocial,
        IntentKind::SignOut,
        IntentKind::FetchUser,
        IntentKind::UpdateChatState,
        IntentKind::PostMessage,
        IntentKind::CreateUserRecord,
    ];

    /// Action label used on the wire and in logs.
    pub fn label(self) -> &'static str {
        match self {
            IntentKind::CreateAccount => "CREATE_USER_WITH_EMAIL_AND_PASSWORD",
            IntentKind::SignIn => "SIGN_IN_WITH_EMAIL_AND_PASSWORD",
            IntentKind::SignInSocial => "SIGN_IN_WITH_SOCIAL",
            IntentKind::SignOut => "SIGN_OUT",
            IntentKind::FetchUser => "FETCH_USER",
            IntentKind::PostMessage => "POST_MESSAGE",
            IntentKind::UpdateChatState => "UPDATE_CHAT",
            IntentKind::CreateUserRecord => "CREATE_USER_DB",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A request to run one workflow, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Intent {
    #[serde(rename = "CREATE_USER_WITH_EMAIL_AND_PASSWORD")]
    CreateAccount(NewAccount),
    #[serde(rename = "SIGN_IN_WITH_EMAIL_AND_PASSWORD")]
    SignIn(Credentials),
    #[serde(rename = "SIGN_IN_WITH_SOCIAL")]
    SignInSocial(SocialSignIn),
    #[serde(rename = "SIGN_OUT")]
    SignOut,
    #[serde(rename = "FETCH_USER")]
    FetchUser(UserQuery),
    #[serde(rename = "POST_MESSAGE")]
    PostMessage(ChatMessage),
    #[serde(rename = "UPDATE_CHAT")]
    UpdateChatState(ChatUpdate),
    #[serde(rename = "CREATE_USER_DB")]
    CreateUserRecord(UserProfile),
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::CreateAccount(_) => IntentKind::CreateAccount,
            Intent::SignIn(_) => IntentKind::SignIn,
            Intent::SignInSocial(_) => IntentKind::SignInSocial,
            Intent::SignOut => IntentKind::SignOut,
            Intent::FetchUser(_) => IntentKind::FetchUser,
            Intent::PostMessage(_) => IntentKind::PostMessage,
            Intent::UpdateChatState(_) => IntentKind::UpdateChatState,
            Intent::CreateUserRecord(_) => IntentKind::CreateUserRecord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_kinds_are_distinct() {
        let labels: HashSet<_> = IntentKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), IntentKind::ALL.len());
    }

    #[test]
    fn serialized_intent_carries_label() {
        let intent = Intent::CreateUserRecord(UserProfile {
            user_uid: "u1".into(),
            ..Default::default()
        });
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["type"], "CREATE_USER_DB");
        assert_eq!(json["userUid"], "u1");
        assert_eq!(intent.kind(), IntentKind::CreateUserRecord);
    }
}
