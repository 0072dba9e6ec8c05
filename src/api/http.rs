use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::action::{ChatMessage, UserProfile, UserQuery};
use crate::config::ApiConfig;

use super::error::ApiError;
use super::RemoteApi;

/// JSON-over-HTTP client for the user/message service.
pub struct HttpRemoteApi {
    client: Client,
    base_url: String,
    user_path: String,
    message_path: String,
}

/// Wire shape of a submitted chat message.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageBody<'a> {
    username: &'a str,
    user_uid: &'a str,
    message: &'a str,
    channel: &'a str,
}

impl HttpRemoteApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| ApiError::Transport {
                endpoint: config.base_url.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_path: config.user_path.clone(),
            message_path: config.message_path.clone(),
        })
    }

    /// POST `body` as JSON to `path`; `None` when the response body is empty.
    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let transport = |source| ApiError::Transport {
            endpoint: url.clone(),
            source,
        };

        tracing::debug!(url = %url, "Sending API request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let text = response.text().await.map_err(transport)?;

        if !status.is_success() {
            tracing::warn!(status = %status, url = %url, "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Whether a decoded body counts as "no data".
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[async_trait]
impl RemoteApi for HttpRemoteApi {
    async fn upsert_user(&self, profile: &UserProfile) -> Result<Value, ApiError> {
        let body = self.post(&self.user_path, profile).await?;
        Ok(body.unwrap_or(Value::Null))
    }

    async fn query_user(&self, query: &UserQuery) -> Result<Option<Value>, ApiError> {
        let body = self.post(&self.user_path, query).await?;
        Ok(body.filter(|value| !is_falsy(value)))
    }

    async fn post_message(&self, message: &ChatMessage) -> Result<Value, ApiError> {
        let body = MessageBody {
            username: &message.username,
            user_uid: &message.user_uid,
            message: &message.current_message,
            channel: &message.channel,
        };
        let response = self.post(&self.message_path, &body).await?;
        Ok(response.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!("")));
        assert!(is_falsy(&json!(0)));
        assert!(!is_falsy(&json!({})));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({"uid": "u1"})));
    }

    #[test]
    fn message_body_shape() {
        let body = MessageBody {
            username: "jane",
            user_uid: "u1",
            message: "hello",
            channel: "general",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"username": "jane", "userUid": "u1", "message": "hello", "channel": "general"})
        );
    }
}
