use crate::domain::VoteCounts;
use crate::infrastructure::api::VotingApiClient;
use voting_errors::AppError;

pub struct ResetVotes {
    client: VotingApiClient,
}

impl ResetVotes {
    pub fn new(client: VotingApiClient) -> Self {
        Self { client }
    }

    /// Returns the counts after the reset, all zero when the server omits them.
    pub async fn execute(&self) -> Result<VoteCounts, AppError> {
        let ack = self.client.reset_votes().await?;

        if !ack.success {
            tracing::error!("reset refused: {}", ack.message);
            return Err(AppError::Rejected(ack.message));
        }

        tracing::warn!("all votes have been reset");
        Ok(ack.counts.unwrap_or_else(VoteCounts::zeroed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_fake_api;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_reset_returns_counts() {
        let router = Router::new().route(
            "/api/v1/reset",
            post(|| async {
                Json(json!({"success": true, "message": "All votes have been reset"}))
            }),
        );
        let reset = ResetVotes::new(spawn_fake_api(router).await);

        assert_eq!(reset.execute().await.unwrap(), VoteCounts::zeroed());
    }

    #[tokio::test]
    async fn test_refused_reset_carries_server_message() {
        let router = Router::new().route(
            "/api/v1/reset",
            post(|| async { Json(json!({"success": false, "message": "Error: disk full"})) }),
        );
        let reset = ResetVotes::new(spawn_fake_api(router).await);

        assert_eq!(
            reset.execute().await.unwrap_err(),
            AppError::Rejected("Error: disk full".to_string())
        );
    }
}
