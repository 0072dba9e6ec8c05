//! Workflow handlers, one per intent kind.
//!
//! Each handler suspends on at most one adapter call, then emits its
//! outcome(s) through [`Workflow::put`]. Adapter errors are converted to
//! failure outcomes here and never escape a handler.

use std::sync::Arc;

use tracing::Instrument;

use crate::action::{
    Action, ChatMessage, ChatUpdate, Credentials, Failure, Intent, NewAccount, Outcome,
    SocialSignIn, UserProfile, UserQuery,
};
use crate::api::{is_falsy, RemoteApi};
use crate::identity::{AuthResponse, IdentityBackend, IdentityError, SocialProvider};

use super::coordinator::Shared;
use super::invocation::{Completion, Invocation};
use super::profile::derive_profile;

/// Everything a handler needs: both adapters and the output side of the
/// action channel.
pub(super) struct Workflow {
    pub(super) identity: Arc<dyn IdentityBackend>,
    pub(super) api: Arc<dyn RemoteApi>,
    pub(super) shared: Arc<Shared>,
}

/// Settles the pending count when an invocation ends, even by panic.
struct SettleGuard<'a>(&'a Shared);

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            tracing::error!("Invocation panicked before reaching a terminal state");
        }
        self.0.settle();
    }
}

impl Workflow {
    /// Publish an action; derived intents are routed back into the coordinator.
    fn put(&self, action: impl Into<Action>) {
        self.shared.publish(action.into());
    }

    /// Run one invocation of the handler matching `intent` to completion.
    pub(super) async fn invoke(&self, intent: Intent) {
        let _settle = SettleGuard(&self.shared);
        let mut invocation = Invocation::new(intent.kind());
        let span = tracing::debug_span!(
            "invocation",
            kind = %invocation.kind(),
            id = %invocation.id()
        );

        async {
            if let Err(err) = invocation.begin() {
                tracing::error!(error = %err, "Invocation could not start");
                return;
            }

            let completion = self.run(intent).await;

            match invocation.finish(completion) {
                Ok(()) => tracing::debug!(state = ?invocation.state(), "Invocation finished"),
                Err(err) => tracing::error!(error = %err, "Invocation finished twice"),
            }
        }
        .instrument(span)
        .await;
    }

    async fn run(&self, intent: Intent) -> Completion {
        match intent {
            Intent::CreateAccount(account) => self.create_account(account).await,
            Intent::CreateUserRecord(profile) => self.create_user_record(profile).await,
            Intent::SignIn(credentials) => self.sign_in(credentials).await,
            Intent::SignInSocial(request) => self.sign_in_social(request).await,
            Intent::SignOut => self.sign_out().await,
            Intent::FetchUser(query) => self.fetch_user(query).await,
            Intent::PostMessage(message) => self.post_message(message).await,
            Intent::UpdateChatState(update) => self.update_chat_state(update),
        }
    }

    async fn create_account(&self, account: NewAccount) -> Completion {
        tracing::debug!("Creating account");
        let Some((email, password)) = account.credentials() else {
            tracing::debug!("Missing email or password; skipping account creation");
            return Completion::NoOp;
        };

        match self.identity.create_account(email, password).await {
            Ok(response) => {
                let profile = UserProfile {
                    user_uid: response.uid().to_string(),
                    email: account.email.clone(),
                    first_name: account.first_name,
                    last_name: account.last_name,
                    image: account.image,
                    username: account.username,
                };
                self.put(Intent::CreateUserRecord(profile));
                Completion::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, code = err.code(), "Account creation failed");
                self.put(Outcome::CreateAccountFailed {
                    error: Failure::from(&err),
                });
                Completion::Failed
            }
        }
    }

    async fn create_user_record(&self, profile: UserProfile) -> Completion {
        tracing::debug!(uid = %profile.user_uid, "Creating user record");
        match self.api.upsert_user(&profile).await {
            Ok(response) => {
                self.put(Outcome::CreateUserRecordSucceeded { response });
                Completion::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, "Profile upsert failed");
                self.put(Outcome::CreateUserRecordFailed {
                    error: Failure::from(&err),
                });
                Completion::Failed
            }
        }
    }

    async fn sign_in(&self, credentials: Credentials) -> Completion {
        tracing::debug!("Signing in with credentials");
        let Some((email, password)) = credentials.credentials() else {
            tracing::debug!("Missing email or password; skipping sign-in");
            return Completion::NoOp;
        };

        let result = self.identity.sign_in_with_credentials(email, password).await;
        self.finish_sign_in(result)
    }

    async fn sign_in_social(&self, request: SocialSignIn) -> Completion {
        tracing::debug!(provider = %request.provider, "Signing in with provider");
        let Some(provider) = SocialProvider::parse(&request.provider) else {
            tracing::debug!(provider = %request.provider, "Unrecognized provider; skipping");
            return Completion::NoOp;
        };

        let result = self.identity.sign_in_interactive(provider).await;
        self.finish_sign_in(result)
    }

    fn finish_sign_in(&self, result: Result<AuthResponse, IdentityError>) -> Completion {
        match result {
            Ok(response) => {
                tracing::info!(uid = %response.uid(), "Signed in");
                self.put(Outcome::SignInSucceeded { response });
                Completion::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, code = err.code(), "Sign-in failed");
                self.put(Outcome::SignInFailed {
                    error: Failure::from(&err),
                });
                Completion::Failed
            }
        }
    }

    async fn sign_out(&self) -> Completion {
        tracing::debug!("Signing out");
        match self.identity.sign_out().await {
            Ok(()) => {
                self.put(Outcome::SignOutSucceeded);
                Completion::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-out failed");
                self.put(Outcome::SignOutFailed {
                    error: Failure::from(&err),
                });
                Completion::Failed
            }
        }
    }

    async fn fetch_user(&self, query: UserQuery) -> Completion {
        tracing::debug!("Fetching user");
        match self.api.query_user(&query).await {
            Ok(Some(data)) => {
                self.put(Outcome::UserFetchSucceeded { data: data.clone() });
                self.put(Outcome::CurrentUserSet { data });
                Completion::Succeeded
            }
            Ok(None) => match self.identity.current_session() {
                Some(session) => {
                    tracing::debug!(uid = %session.uid, "No user record; creating one from session");
                    self.put(Intent::CreateUserRecord(derive_profile(&session)));
                    Completion::Succeeded
                }
                None => Completion::NoOp,
            },
            Err(err) => {
                tracing::warn!(error = %err, "User lookup failed");
                self.put(Outcome::UserFetchFailed {
                    message: err.to_string(),
                });
                Completion::Failed
            }
        }
    }

    async fn post_message(&self, message: ChatMessage) -> Completion {
        tracing::debug!(channel = %message.channel, "Posting message");
        match self.api.post_message(&message).await {
            Ok(result) => {
                self.put(Outcome::PostMessageSucceeded { result });
                Completion::Succeeded
            }
            Err(err) => {
                tracing::warn!(error = %err, "Message submission failed");
                self.put(Outcome::PostMessageFailed {
                    message: err.to_string(),
                });
                Completion::Failed
            }
        }
    }

    /// Local transform only. A missing or falsy snapshot ends quietly.
    fn update_chat_state(&self, update: ChatUpdate) -> Completion {
        tracing::debug!("Updating chat state");
        let ChatUpdate {
            message_id,
            snapshot,
            user_uid,
        } = update;

        match snapshot.filter(|snapshot| !is_falsy(snapshot)) {
            Some(snapshot) => {
                self.put(Outcome::UpdateChatSucceeded {
                    user_uid,
                    message_id,
                    snapshot,
                });
                Completion::Succeeded
            }
            None => Completion::NoOp,
        }
    }
}
