use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub coordinator: CoordinatorConfig,
}

/// Backend user/message service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service (e.g., "http://localhost:3001").
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Path for profile upsert and lookup.
    #[serde(default = "default_user_path")]
    pub user_path: String,
    /// Path for message submission.
    #[serde(default = "default_message_path")]
    pub message_path: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Identity provider (Identity Toolkit compatible REST API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_base_url")]
    pub base_url: String,
    /// Web API key appended to every request. `YAC_API_KEY` overrides it.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Redirect URI reported for federated sign-in.
    #[serde(default = "default_request_uri")]
    pub request_uri: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Workflow coordinator settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Log every published action at info level.
    #[serde(default)]
    pub log_actions: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_user_path() -> String {
    "/user".to_string()
}

fn default_message_path() -> String {
    "/message".to_string()
}

fn default_identity_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

fn default_request_uri() -> String {
    "http://localhost".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            user_path: default_user_path(),
            message_path: default_message_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: default_identity_base_url(),
            api_key: None,
            request_uri: default_request_uri(),
            timeout_seconds: default_timeout(),
        }
    }
}
