//! In-memory adapters with scripted results and call counters.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use yac::action::{ChatMessage, UserProfile, UserQuery};
use yac::api::{ApiError, RemoteApi};
use yac::identity::{AuthResponse, IdentityBackend, IdentityError, Session, SocialProvider};

/// Session for `uid` with the given display name and email.
pub fn session(uid: &str, display_name: Option<&str>, email: Option<&str>) -> Session {
    Session {
        uid: uid.to_string(),
        email: email.map(str::to_string),
        display_name: display_name.map(str::to_string),
        photo_url: None,
        provider_id: "password".to_string(),
        id_token: format!("token-{}", uid),
        refresh_token: None,
    }
}

pub fn auth_response(uid: &str) -> AuthResponse {
    AuthResponse {
        user: session(uid, None, None),
        is_new_user: true,
    }
}

pub fn rejected(code: &'static str, message: &str) -> IdentityError {
    IdentityError::Rejected {
        code,
        message: message.to_string(),
    }
}

/// Identity backend whose results are queued by the test.
///
/// An unscripted call succeeds with uid `"u1"`.
#[derive(Default)]
pub struct FakeIdentity {
    results: Mutex<VecDeque<Result<AuthResponse, IdentityError>>>,
    session: Mutex<Option<Session>>,
    sign_out_error: Mutex<Option<IdentityError>>,
    delay: Mutex<Option<Duration>>,
    pub create_calls: AtomicUsize,
    pub sign_in_calls: AtomicUsize,
    pub interactive_calls: Mutex<Vec<SocialProvider>>,
    pub sign_out_calls: AtomicUsize,
}

impl FakeIdentity {
    pub fn push_result(&self, result: Result<AuthResponse, IdentityError>) {
        self.results.lock().push_back(result);
    }

    pub fn set_session(&self, session: Option<Session>) {
        *self.session.lock() = session;
    }

    pub fn fail_sign_out(&self, err: IdentityError) {
        *self.sign_out_error.lock() = Some(err);
    }

    /// Delay every sign-in style call.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    pub fn calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
            + self.sign_in_calls.load(Ordering::SeqCst)
            + self.interactive_calls.lock().len()
            + self.sign_out_calls.load(Ordering::SeqCst)
    }

    async fn next(&self) -> Result<AuthResponse, IdentityError> {
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let result = self
            .results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(auth_response("u1")));
        if let Ok(response) = &result {
            *self.session.lock() = Some(response.user.clone());
        }
        result
    }
}

#[async_trait]
impl IdentityBackend for FakeIdentity {
    async fn create_account(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AuthResponse, IdentityError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.next().await
    }

    async fn sign_in_with_credentials(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AuthResponse, IdentityError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        self.next().await
    }

    async fn sign_in_interactive(
        &self,
        provider: SocialProvider,
    ) -> Result<AuthResponse, IdentityError> {
        self.interactive_calls.lock().push(provider);
        self.next().await
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        match self.sign_out_error.lock().take() {
            Some(err) => Err(err),
            None => {
                *self.session.lock() = None;
                Ok(())
            }
        }
    }

    fn current_session(&self) -> Option<Session> {
        self.session.lock().clone()
    }
}

/// Remote API recording every call.
///
/// Unscripted calls succeed: upsert echoes the profile, query returns `None`,
/// post returns `{"ok": true}`.
#[derive(Default)]
pub struct FakeApi {
    upsert_results: Mutex<VecDeque<Result<Value, ApiError>>>,
    query_results: Mutex<VecDeque<Result<Option<Value>, ApiError>>>,
    post_results: Mutex<VecDeque<Result<Value, ApiError>>>,
    pub upserts: Mutex<Vec<UserProfile>>,
    pub queries: Mutex<Vec<UserQuery>>,
    pub posts: Mutex<Vec<ChatMessage>>,
}

impl FakeApi {
    pub fn push_upsert(&self, result: Result<Value, ApiError>) {
        self.upsert_results.lock().push_back(result);
    }

    pub fn push_query(&self, result: Result<Option<Value>, ApiError>) {
        self.query_results.lock().push_back(result);
    }

    pub fn push_post(&self, result: Result<Value, ApiError>) {
        self.post_results.lock().push_back(result);
    }

    pub fn calls(&self) -> usize {
        self.upserts.lock().len() + self.queries.lock().len() + self.posts.lock().len()
    }
}

#[async_trait]
impl RemoteApi for FakeApi {
    async fn upsert_user(&self, profile: &UserProfile) -> Result<Value, ApiError> {
        self.upserts.lock().push(profile.clone());
        let scripted = self.upsert_results.lock().pop_front();
        match scripted {
            Some(result) => result,
            None => serde_json::to_value(profile).map_err(|e| ApiError::Decode(e.to_string())),
        }
    }

    async fn query_user(&self, query: &UserQuery) -> Result<Option<Value>, ApiError> {
        self.queries.lock().push(query.clone());
        self.query_results.lock().pop_front().unwrap_or(Ok(None))
    }

    async fn post_message(&self, message: &ChatMessage) -> Result<Value, ApiError> {
        self.posts.lock().push(message.clone());
        self.post_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({"ok": true})))
    }
}
