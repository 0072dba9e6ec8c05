//! Remote API adapter for the backend user/message service.

mod error;
mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::action::{ChatMessage, UserProfile, UserQuery};

pub use error::ApiError;
pub use http::HttpRemoteApi;
pub(crate) use http::is_falsy;

/// Calls the coordinator makes against the user/message service.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Persist a profile; returns the service's response body.
    async fn upsert_user(&self, profile: &UserProfile) -> Result<Value, ApiError>;

    /// Look up a user. `Ok(None)` means the service had no data.
    async fn query_user(&self, query: &UserQuery) -> Result<Option<Value>, ApiError>;

    /// Submit a chat message.
    async fn post_message(&self, message: &ChatMessage) -> Result<Value, ApiError>;
}
