//! Identity backend adapter.
//!
//! Wraps an external authentication provider: email/password accounts,
//! federated sign-in, sign-out and the current-session lookup.

mod error;
mod provider;
mod rest;
mod session;
mod token_source;

use async_trait::async_trait;

pub use error::IdentityError;
pub use provider::SocialProvider;
pub use rest::RestIdentityBackend;
pub use session::{AuthResponse, Session};
pub use token_source::{EnvTokenSource, FederatedTokenSource};

/// Contract between the workflow coordinator and an identity provider.
///
/// The provider owns the session; callers only observe it through
/// [`IdentityBackend::current_session`]. Concurrent sign-in and sign-out calls
/// are not serialized here.
#[async_trait]
pub trait IdentityBackend: Send + Sync {
    /// Create an email/password credential and sign it in.
    async fn create_account(&self, email: &str, password: &str)
        -> Result<AuthResponse, IdentityError>;

    /// Verify an email/password credential.
    async fn sign_in_with_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, IdentityError>;

    /// Run the interactive federated flow for `provider`.
    async fn sign_in_interactive(
        &self,
        provider: SocialProvider,
    ) -> Result<AuthResponse, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Currently signed-in principal, if any. Never blocks on I/O.
    fn current_session(&self) -> Option<Session>;
}
