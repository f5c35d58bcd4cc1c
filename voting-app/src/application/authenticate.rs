use crate::domain::{AuthProvider, UserSession};
use crate::infrastructure::api::VotingApiClient;
use crate::infrastructure::auth::SimulatedOAuth;
use crate::infrastructure::security::InputSanitizer;
use voting_errors::AppError;

pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created! Please login.";

pub struct Authenticate {
    client: VotingApiClient,
    oauth: SimulatedOAuth,
}

impl Authenticate {
    pub fn new(client: VotingApiClient) -> Self {
        Self {
            client,
            oauth: SimulatedOAuth::new(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserSession, AppError> {
        let email = InputSanitizer::validate_email(email)?;
        InputSanitizer::validate_login_password(password)?;

        let session = self.client.login(&email, password).await?;
        tracing::info!(user_id = %session.user.id, "password login");
        Ok(session)
    }

    /// Registration does not sign the user in; the caller sends them back to
    /// the login form with the returned message.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<String, AppError> {
        let email = InputSanitizer::validate_email(email)?;
        InputSanitizer::validate_new_password(password)?;
        let name = InputSanitizer::validate_display_name(name)?;

        let ack = self.client.register(&email, password, &name).await?;
        if !ack.success {
            return Err(AppError::Rejected(ack.message));
        }

        tracing::info!("account registered");
        Ok(ACCOUNT_CREATED_MESSAGE.to_string())
    }

    pub fn oauth_login(&self, provider: AuthProvider) -> Result<UserSession, AppError> {
        self.oauth.sign_in(provider)
    }

    /// Always succeeds locally. Simulated OAuth sessions never touch the API;
    /// a failed API logout is logged and otherwise ignored.
    pub async fn logout(&self, session: &UserSession) {
        if session.user.provider.is_oauth() {
            return;
        }

        match self.client.logout(&session.token).await {
            Ok(ack) if ack.success => tracing::info!(user_id = %session.user.id, "logged out"),
            Ok(ack) => tracing::warn!("logout not acknowledged: {}", ack.message),
            Err(e) => tracing::warn!("logout request failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::test_support::{spawn_fake_api, unreachable_api};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_login_validates_before_calling_api() {
        let auth = Authenticate::new(unreachable_api().await);

        assert!(matches!(
            auth.login("not-an-email", "pw").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            auth.login("a@b.co", "").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_register_maps_server_refusal() {
        let router = Router::new().route(
            "/api/v1/register",
            post(|Json(body): Json<Value>| async move {
                if body["email"] == "taken@example.com" {
                    Json(json!({"success": false, "message": "Email already registered"}))
                } else {
                    Json(json!({"success": true, "message": "Account created successfully"}))
                }
            }),
        );
        let auth = Authenticate::new(spawn_fake_api(router).await);

        assert_eq!(
            auth.register("new@example.com", "secret1", "Nandar")
                .await
                .unwrap(),
            ACCOUNT_CREATED_MESSAGE
        );
        assert_eq!(
            auth.register("taken@example.com", "secret1", "Nandar")
                .await
                .unwrap_err(),
            AppError::Rejected("Email already registered".to_string())
        );
        assert!(matches!(
            auth.register("new@example.com", "123", "Nandar").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_oauth_logout_stays_local() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counted = hits.clone();
        let router = Router::new().route(
            "/api/v1/logout",
            post(move || {
                let counted = counted.clone();
                async move {
                    counted.fetch_add(1, Ordering::SeqCst);
                    Json(json!({"success": true, "message": "ok"}))
                }
            }),
        );
        let auth = Authenticate::new(spawn_fake_api(router).await);

        let oauth_session = auth.oauth_login(AuthProvider::Google).unwrap();
        auth.logout(&oauth_session).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        let password_session = UserSession::new(
            User {
                id: "user_1_aa".to_string(),
                email: "a@b.co".to_string(),
                name: "A".to_string(),
                picture: None,
                provider: AuthProvider::Password,
            },
            "tok".to_string(),
        );
        auth.logout(&password_session).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_logout_survives_unreachable_api() {
        let auth = Authenticate::new(unreachable_api().await);
        let session = UserSession::new(
            User {
                id: "user_2_bb".to_string(),
                email: "b@c.co".to_string(),
                name: "B".to_string(),
                picture: None,
                provider: AuthProvider::Password,
            },
            "tok".to_string(),
        );
        auth.logout(&session).await;
    }
}
