use axum::body::Body;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;
use tower_sessions::Session;
use voting_app::domain::{ClientHints, DeviceIdentity};
use voting_app::infrastructure::security::DeviceIdentityManager;
use voting_ui::session::DEVICE_IDENTITY_KEY;

/// Probes and monitors never get an identity.
const NO_IDENTITY_PATHS: &[&str] = &["/healthz"];

/// Gives every browser a device identity before the page renders, so the
/// session cookie goes out with the first response. Once stored, the identity
/// and its session key stay put until the session expires.
pub async fn ensure_device_identity(
    session: Session,
    request: Request<Body>,
    next: Next,
) -> Response {
    if NO_IDENTITY_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    let stored = match session.get::<DeviceIdentity>(DEVICE_IDENTITY_KEY).await {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!("Failed to read device identity: {}", e);
            None
        }
    };

    if stored.is_none() {
        let identity = DeviceIdentityManager::initialize(None, &client_hints(request.headers()));
        tracing::info!(device_id = %identity.device_id, "new voting device");

        if let Err(e) = session.insert(DEVICE_IDENTITY_KEY, &identity).await {
            tracing::error!("Failed to store device identity: {}", e);
        }
    }

    next.run(request).await
}

/// Only what a request carries; screen and hardware traits stay unknown.
fn client_hints(headers: &HeaderMap) -> ClientHints {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };

    let language = header_text(header::ACCEPT_LANGUAGE)
        .split(',')
        .next()
        .map(|tag| tag.split(';').next().unwrap_or_default().trim().to_string())
        .unwrap_or_default();

    ClientHints {
        user_agent: header_text(header::USER_AGENT),
        language,
        ..ClientHints::default()
    }
}
