use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Email and password against the voting API.
    #[default]
    Password,
    Google,
    Facebook,
    Github,
}

impl AuthProvider {
    pub const OAUTH: [AuthProvider; 3] = [Self::Google, Self::Facebook, Self::Github];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::Github => "github",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Password => "Email",
            Self::Google => "Google",
            Self::Facebook => "Facebook",
            Self::Github => "GitHub",
        }
    }

    pub fn is_oauth(&self) -> bool {
        !matches!(self, Self::Password)
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password" => Ok(Self::Password),
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            "github" => Ok(Self::Github),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub provider: AuthProvider,
}

/// Logged-in user plus the opaque token handed out at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user: User,
    pub token: String,
}

impl UserSession {
    pub fn new(user: User, token: String) -> Self {
        Self { user, token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_user_defaults_to_password_provider() {
        let json = r#"{"id": "user_1_ab", "email": "a@b.co", "name": "Aye"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.provider, AuthProvider::Password);
        assert_eq!(user.picture, None);
    }

    #[test]
    fn test_provider_names_round_trip() {
        for provider in AuthProvider::OAUTH {
            assert!(provider.is_oauth());
            assert_eq!(provider.as_str().parse::<AuthProvider>(), Ok(provider));
        }
        assert!("twitter".parse::<AuthProvider>().is_err());
    }
}
