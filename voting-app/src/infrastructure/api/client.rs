use super::types::{
    LoginRequest, LoginResponse, LogoutRequest, RegisterRequest, VoteRequest, VoteResponse,
};
use crate::config::ApiConfig;
use crate::domain::{
    ApiAck, Category, LiveResults, UserSession, UserStats, VoteCounts, VoteOutcome,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use voting_errors::AppError;

/// HTTP client for the voting REST API.
///
/// Transport failures and non-2xx statuses become errors. A well-formed
/// `success: false` answer is not an error: it comes back as a rejected
/// outcome carrying the server's message.
#[derive(Clone)]
pub struct VotingApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl VotingApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_counts(&self) -> Result<VoteCounts, AppError> {
        self.get_json("/api/v1/counts").await
    }

    pub async fn get_results(&self) -> Result<LiveResults, AppError> {
        self.get_json("/api/v1/results").await
    }

    pub async fn user_stats(&self) -> Result<UserStats, AppError> {
        self.get_json("/api/v1/users").await
    }

    pub async fn cast_vote(
        &self,
        device_token: &str,
        category: Category,
        candidate_name: &str,
    ) -> Result<VoteOutcome, AppError> {
        let request = VoteRequest {
            device_token,
            category,
            candidate_name,
        };
        let response: VoteResponse = self.post_json("/api/v1/vote", &request, None).await?;

        if response.success {
            Ok(VoteOutcome::Recorded {
                category,
                candidate: candidate_name.to_string(),
            })
        } else {
            tracing::warn!(%category, "vote rejected: {}", response.message);
            Ok(VoteOutcome::Rejected {
                message: response.message,
            })
        }
    }

    pub async fn reset_votes(&self) -> Result<ApiAck, AppError> {
        self.post_json("/api/v1/reset", &serde_json::json!({}), None)
            .await
    }

    /// Returns the session on success, or the server's message as
    /// [`AppError::Rejected`].
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSession, AppError> {
        let request = LoginRequest { email, password };
        let response: LoginResponse = self.post_json("/api/v1/login", &request, None).await?;

        if !response.success {
            return Err(AppError::Rejected(response.message));
        }

        match (response.user, response.token) {
            (Some(user), Some(token)) => Ok(UserSession::new(user, token)),
            _ => Err(AppError::InvalidResponse(
                "login succeeded without user or token".to_string(),
            )),
        }
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<ApiAck, AppError> {
        let request = RegisterRequest {
            email,
            password,
            name,
        };
        self.post_json("/api/v1/register", &request, None).await
    }

    pub async fn logout(&self, token: &str) -> Result<ApiAck, AppError> {
        let request = LogoutRequest { token };
        self.post_json("/api/v1/logout", &request, Some(token)).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http_client
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Self::decode(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, AppError> {
        let mut request = self.http_client.post(self.endpoint(path)).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Voting API error on {}: {} - {}", path, status, body);
            return Err(AppError::Api(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::InvalidResponse(e.to_string()))
    }
}
