use crate::domain::{Category, VoteOutcome};
use crate::infrastructure::api::VotingApiClient;
use crate::infrastructure::security::{InputSanitizer, VoteThrottle};
use voting_errors::AppError;

pub struct CastVote {
    client: VotingApiClient,
    throttle: VoteThrottle,
}

impl CastVote {
    pub fn new(client: VotingApiClient, throttle: VoteThrottle) -> Self {
        Self { client, throttle }
    }

    /// Validation and throttling happen before anything goes over the wire.
    pub async fn execute(
        &self,
        device_token: &str,
        category: Category,
        candidate_name: &str,
    ) -> Result<VoteOutcome, AppError> {
        let candidate = InputSanitizer::validate_candidate_name(candidate_name)?;

        if device_token.trim().is_empty() {
            return Err(AppError::Validation(
                "This browser has no device token yet. Reload the page.".to_string(),
            ));
        }

        self.throttle.check(device_token)?;

        let outcome = self
            .client
            .cast_vote(device_token, category, &candidate)
            .await?;

        if outcome.is_recorded() {
            tracing::info!(%category, "vote recorded");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::security::EMPTY_CANDIDATE_MESSAGE;
    use crate::test_support::{spawn_fake_api, unreachable_api};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_vote_api(hits: Arc<AtomicUsize>) -> Router {
        Router::new().route(
            "/api/v1/vote",
            post(move |Json(body): Json<Value>| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({
                        "success": true,
                        "message": "Vote recorded",
                        "candidate": body["candidate_name"]
                    }))
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_empty_name_never_reaches_api() {
        let hits = Arc::new(AtomicUsize::new(0));
        let client = spawn_fake_api(counting_vote_api(hits.clone())).await;
        let cast_vote = CastVote::new(client, VoteThrottle::new());

        let err = cast_vote
            .execute("device-1-abc", Category::King, "   ")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::Validation(EMPTY_CANDIDATE_MESSAGE.to_string())
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_trimmed_name_is_submitted() {
        let hits = Arc::new(AtomicUsize::new(0));
        let client = spawn_fake_api(counting_vote_api(hits.clone())).await;
        let cast_vote = CastVote::new(client, VoteThrottle::new());

        let outcome = cast_vote
            .execute("device-1-abc", Category::Queen, "  Su Su  ")
            .await
            .unwrap();

        assert_eq!(outcome.message(), "Vote recorded for Su Su in Queen!");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_device_token_is_refused() {
        let cast_vote = CastVote::new(unreachable_api().await, VoteThrottle::new());
        let err = cast_vote
            .execute("", Category::Prince, "Zaw")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_throttle_applies_per_device() {
        let hits = Arc::new(AtomicUsize::new(0));
        let client = spawn_fake_api(counting_vote_api(hits.clone())).await;
        let cast_vote = CastVote::new(client, VoteThrottle::with_limits(1, 10));

        assert!(cast_vote
            .execute("device-a", Category::King, "Min")
            .await
            .is_ok());
        assert!(matches!(
            cast_vote.execute("device-a", Category::Queen, "Mya").await,
            Err(AppError::RateLimited(_))
        ));
        assert!(cast_vote
            .execute("device-b", Category::Queen, "Mya")
            .await
            .is_ok());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let cast_vote = CastVote::new(unreachable_api().await, VoteThrottle::new());
        assert!(matches!(
            cast_vote.execute("device-a", Category::King, "Min").await,
            Err(AppError::Network(_))
        ));
    }
}
