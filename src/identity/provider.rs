/// Federated identity providers supported for interactive sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    Google,
    Facebook,
    GitHub,
}

impl SocialProvider {
    /// Parse a provider name such as "GOOGLE" (case-insensitive).
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "GOOGLE" => Some(SocialProvider::Google),
            "FACEBOOK" => Some(SocialProvider::Facebook),
            "GITHUB" => Some(SocialProvider::GitHub),
            _ => None,
        }
    }

    /// Provider id understood by the identity backend.
    pub fn provider_id(self) -> &'static str {
        match self {
            SocialProvider::Google => "google.com",
            SocialProvider::Facebook => "facebook.com",
            SocialProvider::GitHub => "github.com",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SocialProvider::Google => "GOOGLE",
            SocialProvider::Facebook => "FACEBOOK",
            SocialProvider::GitHub => "GITHUB",
        }
    }
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
