use crate::domain::{AuthProvider, User, UserSession};
use chrono::Utc;
use voting_errors::AppError;

const PLACEHOLDER_PICTURE: &str = "https://via.placeholder.com/40";
const GITHUB_PICTURE: &str = "https://github.com/identicons/user.png";

/// Stand-in for a real OAuth handshake: signs the browser in as a generic
/// account of the chosen provider without contacting anyone.
#[derive(Clone, Default)]
pub struct SimulatedOAuth;

impl SimulatedOAuth {
    pub fn new() -> Self {
        Self
    }

    pub fn sign_in(&self, provider: AuthProvider) -> Result<UserSession, AppError> {
        self.sign_in_at(provider, Utc::now().timestamp_millis())
    }

    fn sign_in_at(&self, provider: AuthProvider, now_millis: i64) -> Result<UserSession, AppError> {
        let (email, picture) = match provider {
            AuthProvider::Google => ("user@gmail.com", PLACEHOLDER_PICTURE),
            AuthProvider::Facebook => ("user@facebook.com", PLACEHOLDER_PICTURE),
            AuthProvider::Github => ("user@github.com", GITHUB_PICTURE),
            AuthProvider::Password => {
                return Err(AppError::Validation(
                    "Password accounts sign in with email and password".to_string(),
                ))
            }
        };

        let user = User {
            id: format!("{}_{now_millis}", provider.as_str()),
            email: email.to_string(),
            name: format!("{} User", provider.display_name()),
            picture: Some(picture.to_string()),
            provider,
        };

        tracing::info!(provider = provider.as_str(), "simulated OAuth sign-in");
        Ok(UserSession::new(user, format!("oauth_token_{now_millis}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_sign_in() {
        let session = SimulatedOAuth::new()
            .sign_in_at(AuthProvider::Github, 1_700_000_000_000)
            .unwrap();

        assert_eq!(session.user.id, "github_1700000000000");
        assert_eq!(session.user.email, "user@github.com");
        assert_eq!(session.user.name, "GitHub User");
        assert_eq!(session.user.picture.as_deref(), Some(GITHUB_PICTURE));
        assert_eq!(session.token, "oauth_token_1700000000000");
    }

    #[test]
    fn test_each_oauth_provider_mints_prefixed_identity() {
        let oauth = SimulatedOAuth::new();
        for provider in AuthProvider::OAUTH {
            let session = oauth.sign_in(provider).unwrap();
            assert!(session.user.id.starts_with(&format!("{}_", provider.as_str())));
            assert!(session.token.starts_with("oauth_token_"));
            assert_eq!(session.user.provider, provider);
        }
    }

    #[test]
    fn test_password_provider_is_refused() {
        assert!(SimulatedOAuth::new().sign_in(AuthProvider::Password).is_err());
    }
}
