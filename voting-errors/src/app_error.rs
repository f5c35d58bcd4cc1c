use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Network connection failed: {0}")]
    Network(String),

    #[error("Voting API returned status {0}")]
    Api(u16),

    #[error("Unexpected response from voting API: {0}")]
    InvalidResponse(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Too many requests: retry in {0} seconds")]
    RateLimited(u64),

    #[error("Not logged in")]
    Unauthorized,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Prefixes of the `Display` output above, used to recover the variant from a
/// server function error message.
const VALIDATION_PREFIX: &str = "Invalid input: ";
const NETWORK_PREFIX: &str = "Network connection failed: ";
const API_PREFIX: &str = "Voting API returned status ";
const INVALID_RESPONSE_PREFIX: &str = "Unexpected response from voting API: ";
const REJECTED_PREFIX: &str = "Request rejected: ";
const RATE_LIMITED_PREFIX: &str = "Too many requests: retry in ";
const CONFIG_PREFIX: &str = "Invalid configuration: ";
const INTERNAL_PREFIX: &str = "Internal error: ";

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let owned = |rest: &str| rest.to_string();

        if let Some(rest) = s.strip_prefix(VALIDATION_PREFIX) {
            Ok(AppError::Validation(owned(rest)))
        } else if let Some(rest) = s.strip_prefix(NETWORK_PREFIX) {
            Ok(AppError::Network(owned(rest)))
        } else if let Some(rest) = s.strip_prefix(API_PREFIX) {
            Ok(rest
                .trim()
                .parse()
                .map(AppError::Api)
                .unwrap_or_else(|_| AppError::Internal(s.to_string())))
        } else if let Some(rest) = s.strip_prefix(INVALID_RESPONSE_PREFIX) {
            Ok(AppError::InvalidResponse(owned(rest)))
        } else if let Some(rest) = s.strip_prefix(REJECTED_PREFIX) {
            Ok(AppError::Rejected(owned(rest)))
        } else if let Some(rest) = s.strip_prefix(RATE_LIMITED_PREFIX) {
            let secs = rest
                .split_whitespace()
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(60);
            Ok(AppError::RateLimited(secs))
        } else if s == "Not logged in" {
            Ok(AppError::Unauthorized)
        } else if let Some(rest) = s.strip_prefix(CONFIG_PREFIX) {
            Ok(AppError::Config(owned(rest)))
        } else if let Some(rest) = s.strip_prefix(INTERNAL_PREFIX) {
            Ok(AppError::Internal(owned(rest)))
        } else {
            Ok(AppError::Internal(s.to_string()))
        }
    }
}

impl AppError {
    /// Text shown next to the control that triggered the failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Rejected(msg) => msg.clone(),
            Self::Network(_) => "Network connection failed".to_string(),
            Self::Api(status) => format!("Voting server error ({status}). Try again."),
            Self::InvalidResponse(_) => "The voting server sent an unexpected reply.".to_string(),
            Self::RateLimited(secs) => {
                format!("Slow down! Try again in {secs} seconds.")
            }
            Self::Unauthorized => "Please log in first.".to_string(),
            Self::Config(_) | Self::Internal(_) => {
                "Something went wrong on our side. Try again later.".to_string()
            }
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use server_fn::ServerFnError;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl AppError {
        /// Carries the full `Display` text so the browser can rebuild the
        /// variant with `FromStr`.
        pub fn into_server_error(self) -> ServerFnError {
            ServerFnError::new(self.to_string())
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::Validation(_) => StatusCode::BAD_REQUEST,
                AppError::Rejected(_) => StatusCode::CONFLICT,
                AppError::Network(_) | AppError::Api(_) | AppError::InvalidResponse(_) => {
                    StatusCode::BAD_GATEWAY
                }
                AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                AppError::Unauthorized => StatusCode::UNAUTHORIZED,
                AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = self.user_message();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        let errors = [
            AppError::Validation("Please enter a name first!".to_string()),
            AppError::Network("connection refused".to_string()),
            AppError::Api(503),
            AppError::Rejected("Already voted for this category".to_string()),
            AppError::RateLimited(42),
            AppError::Unauthorized,
        ];
        for err in errors {
            let parsed: AppError = err.to_string().parse().unwrap();
            assert_eq!(parsed, err);
        }
    }

    #[test]
    fn test_unknown_message_becomes_internal() {
        let parsed: AppError = "boom".parse().unwrap();
        assert_eq!(parsed, AppError::Internal("boom".to_string()));
    }

    #[test]
    fn test_user_message_hides_transport_detail() {
        let err = AppError::Network("dns error: no such host".to_string());
        assert_eq!(err.user_message(), "Network connection failed");

        let err = AppError::Rejected("Already voted for this category".to_string());
        assert_eq!(err.user_message(), "Already voted for this category");
    }

    #[test]
    fn test_serializes_for_transport() {
        let json = serde_json::to_string(&AppError::Api(500)).unwrap();
        let back: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AppError::Api(500));
    }
}
