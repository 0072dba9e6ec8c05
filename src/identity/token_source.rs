use async_trait::async_trait;

use super::error::IdentityError;
use super::provider::SocialProvider;

/// Supplies provider access tokens for interactive sign-in.
///
/// A browser popup, device-code prompt or pre-provisioned token all fit
/// behind this trait; the identity backend only needs the resulting token.
#[async_trait]
pub trait FederatedTokenSource: Send + Sync {
    /// Obtain an access token for `provider`.
    ///
    /// Returns `IdentityError::PopupClosed` when the user abandons the flow.
    async fn access_token(&self, provider: SocialProvider) -> Result<String, IdentityError>;
}

/// Reads provider tokens from `YAC_GOOGLE_TOKEN`, `YAC_FACEBOOK_TOKEN`
/// and `YAC_GITHUB_TOKEN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvTokenSource;

impl EnvTokenSource {
    pub fn env_var(provider: SocialProvider) -> &'static str {
        match provider {
            SocialProvider::Google => "YAC_GOOGLE_TOKEN",
            SocialProvider::Facebook => "YAC_FACEBOOK_TOKEN",
            SocialProvider::GitHub => "YAC_GITHUB_TOKEN",
        }
    }
}

#[async_trait]
impl FederatedTokenSource for EnvTokenSource {
    async fn access_token(&self, provider: SocialProvider) -> Result<String, IdentityError> {
        match std::env::var(Self::env_var(provider)) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(IdentityError::PopupClosed),
        }
    }
}
