//! Identity Toolkit compatible REST client.
//!
//! Account creation and sign-in go through the `accounts:*` endpoints; the
//! resulting session is cached locally and dropped again on sign-out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;

use super::error::IdentityError;
use super::provider::SocialProvider;
use super::session::{AuthResponse, Session};
use super::token_source::FederatedTokenSource;
use super::IdentityBackend;

const PASSWORD_PROVIDER: &str = "password";

pub struct RestIdentityBackend {
    client: Client,
    base_url: String,
    api_key: String,
    request_uri: String,
    tokens: Arc<dyn FederatedTokenSource>,
    session: RwLock<Option<Session>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_secure_token: bool,
    return_idp_credential: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    is_new_user: bool,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestIdentityBackend {
    pub fn new(
        config: &IdentityConfig,
        tokens: Arc<dyn FederatedTokenSource>,
    ) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            request_uri: config.request_uri.clone(),
            tokens,
            session: RwLock::new(None),
        })
    }

    async fn call<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<AccountResponse, IdentityError> {
        let mut url = Url::parse(&format!("{}/v1/accounts:{}", self.base_url, endpoint))
            .map_err(|e| IdentityError::Endpoint(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        tracing::debug!(endpoint = %endpoint, "Sending identity request");

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = %status, endpoint = %endpoint, "Identity backend rejected request");
            return Err(match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => IdentityError::from_backend_message(&envelope.error.message),
                Err(_) => IdentityError::Decode(format!("HTTP {}: {}", status.as_u16(), text)),
            });
        }

        serde_json::from_str(&text).map_err(|e| IdentityError::Decode(e.to_string()))
    }

    /// Cache the session described by `account` and build the response.
    fn establish(
        &self,
        account: AccountResponse,
        provider_id: &str,
        is_new_user: bool,
    ) -> AuthResponse {
        let session = Session {
            uid: account.local_id,
            email: account.email,
            display_name: account.display_name,
            photo_url: account.photo_url,
            provider_id: provider_id.to_string(),
            id_token: account.id_token,
            refresh_token: account.refresh_token,
        };

        *self.session.write() = Some(session.clone());

        AuthResponse {
            user: session,
            is_new_user: is_new_user || account.is_new_user,
        }
    }

    fn idp_post_body(token: &str, provider: SocialProvider) -> Result<String, IdentityError> {
        let mut url = Url::parse("http://localhost/")
            .map_err(|e| IdentityError::Decode(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("access_token", token)
            .append_pair("providerId", provider.provider_id());
        Ok(url.query().unwrap_or_default().to_string())
    }
}

#[async_trait]
impl IdentityBackend for RestIdentityBackend {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, IdentityError> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let account = self.call("signUp", &body).await?;
        Ok(self.establish(account, PASSWORD_PROVIDER, true))
    }

    async fn sign_in_with_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, IdentityError> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let account = self.call("signInWithPassword", &body).await?;
        Ok(self.establish(account, PASSWORD_PROVIDER, false))
    }

    async fn sign_in_interactive(
        &self,
        provider: SocialProvider,
    ) -> Result<AuthResponse, IdentityError> {
        let token = self.tokens.access_token(provider).await?;
        let body = IdpRequest {
            post_body: Self::idp_post_body(&token, provider)?,
            request_uri: &self.request_uri,
            return_secure_token: true,
            return_idp_credential: true,
        };
        let account = self.call("signInWithIdp", &body).await?;
        Ok(self.establish(account, provider.provider_id(), false))
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        if let Some(session) = self.session.write().take() {
            tracing::debug!(uid = %session.uid, "Session cleared");
        }
        Ok(())
    }

    fn current_session(&self) -> Option<Session> {
        self.session.read().clone()
    }
}
