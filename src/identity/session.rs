use serde::Serialize;

/// Authenticated principal held by an identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Provider that issued the credential ("password", "google.com", ...).
    pub provider_id: String,
    #[serde(skip_serializing)]
    pub id_token: String,
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
}

/// Result of a successful account creation or sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: Session,
    pub is_new_user: bool,
}

impl AuthResponse {
    pub fn uid(&self) -> &str {
        &self.user.uid
    }
}
