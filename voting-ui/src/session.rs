//! Per-browser state kept in the server session.
//!
//! The browser only holds the session cookie. Everything the voting client
//! used to keep in local storage lives here under the keys below.

use leptos::prelude::*;
use server_fn::ServerFnError;
use voting_app::domain::User;
use voting_errors::AppError;

/// [`voting_app::domain::DeviceIdentity`] of this browser.
pub const DEVICE_IDENTITY_KEY: &str = "voting_device";
/// [`voting_app::domain::UserSession`] of the logged-in user, if any.
pub const USER_SESSION_KEY: &str = "voting_user";

/// Turns a server function failure into the text shown on screen.
pub fn error_text(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => match msg.parse::<AppError>() {
            Ok(app_error) => app_error.user_message(),
            Err(never) => match never {},
        },
        _ => "Network connection failed".to_string(),
    }
}

#[server(CurrentUserFn, "/api", endpoint = "current_user")]
pub async fn current_user() -> Result<Option<User>, ServerFnError> {
    let session = ssr::session().await?;
    Ok(ssr::load_user(&session).await.map(|s| s.user))
}

#[server(LogoutFn, "/api", endpoint = "logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    let ctx = ssr::app_context()?;
    let session = ssr::session().await?;

    if let Some(user_session) = ssr::load_user(&session).await {
        ctx.authenticate.logout(&user_session).await;
    }

    session
        .remove::<voting_app::domain::UserSession>(USER_SESSION_KEY)
        .await
        .map_err(|e| AppError::Internal(e.to_string()).into_server_error())?;

    leptos_axum::redirect("/");
    Ok(())
}

#[cfg(feature = "ssr")]
pub mod ssr {
    use super::{DEVICE_IDENTITY_KEY, USER_SESSION_KEY};
    use leptos::prelude::*;
    use server_fn::ServerFnError;
    use tower_sessions::Session;
    use voting_app::domain::{DeviceIdentity, UserSession};
    use voting_app::AppContext;
    use voting_errors::AppError;

    pub fn app_context() -> Result<AppContext, ServerFnError> {
        use_context::<AppContext>()
            .ok_or_else(|| AppError::Internal("AppContext missing".to_string()).into_server_error())
    }

    pub async fn session() -> Result<Session, ServerFnError> {
        leptos_axum::extract::<Session>()
            .await
            .map_err(|e| AppError::Internal(e.to_string()).into_server_error())
    }

    pub async fn load_user(session: &Session) -> Option<UserSession> {
        match session.get::<UserSession>(USER_SESSION_KEY).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to read user session: {}", e);
                None
            }
        }
    }

    pub async fn store_user(session: &Session, user: &UserSession) -> Result<(), ServerFnError> {
        // New login, new session id.
        session
            .cycle_id()
            .await
            .map_err(|e| AppError::Internal(e.to_string()).into_server_error())?;
        session
            .insert(USER_SESSION_KEY, user)
            .await
            .map_err(|e| AppError::Internal(e.to_string()).into_server_error())
    }

    pub async fn load_device(session: &Session) -> Result<DeviceIdentity, ServerFnError> {
        session
            .get::<DeviceIdentity>(DEVICE_IDENTITY_KEY)
            .await
            .map_err(|e| AppError::Internal(e.to_string()).into_server_error())?
            .ok_or_else(|| {
                AppError::Validation(
                    "This browser has no device token yet. Reload the page.".to_string(),
                )
                .into_server_error()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Same text `AppError::into_server_error` puts on the wire.
    fn server_error(err: AppError) -> ServerFnError {
        ServerFnError::ServerError(err.to_string())
    }

    #[test]
    fn test_validation_message_reaches_the_page_unchanged() {
        let err = server_error(AppError::Validation("Please enter a name first!".to_string()));
        assert_eq!(error_text(&err), "Please enter a name first!");
    }

    #[test]
    fn test_rate_limit_keeps_its_wait() {
        let err = server_error(AppError::RateLimited(42));
        assert_eq!(error_text(&err), "Slow down! Try again in 42 seconds.");
    }

    #[test]
    fn test_transport_failure_reads_as_network_error() {
        let err: ServerFnError = ServerFnError::Request("connection reset".to_string());
        assert_eq!(error_text(&err), "Network connection failed");
    }
}
