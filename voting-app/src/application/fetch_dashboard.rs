use crate::domain::{DashboardSnapshot, UserStats};
use crate::infrastructure::api::VotingApiClient;
use voting_errors::AppError;

pub struct FetchDashboard {
    client: VotingApiClient,
}

impl FetchDashboard {
    pub fn new(client: VotingApiClient) -> Self {
        Self { client }
    }

    /// Counts and results are requested together; if either fails the whole
    /// snapshot fails and the caller keeps what it already shows.
    pub async fn execute(&self) -> Result<DashboardSnapshot, AppError> {
        let (counts, results) =
            tokio::try_join!(self.client.get_counts(), self.client.get_results())?;

        Ok(DashboardSnapshot::new(counts, results))
    }
}

pub struct FetchUserStats {
    client: VotingApiClient,
}

impl FetchUserStats {
    pub fn new(client: VotingApiClient) -> Self {
        Self { client }
    }

    pub async fn execute(&self) -> Result<UserStats, AppError> {
        self.client.user_stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::test_support::spawn_fake_api;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    fn counts_route() -> Router {
        Router::new().route(
            "/api/v1/counts",
            get(|| async { Json(json!({"Princess": 5, "total": 5})) }),
        )
    }

    #[tokio::test]
    async fn test_snapshot_combines_counts_and_results() {
        let router = counts_route().route(
            "/api/v1/results",
            get(|| async {
                Json(json!({
                    "Princess": {"leading_candidate": "Tie: Ei, Wai", "votes": 2,
                                 "total_votes": 5, "percentage": 40.0,
                                 "all_candidates": {"Ei": 2, "Wai": 2, "Nu": 1}}
                }))
            }),
        );
        let fetch = FetchDashboard::new(spawn_fake_api(router).await);

        let snapshot = fetch.execute().await.unwrap();
        assert_eq!(snapshot.counts.get(Category::Princess), 5);
        assert_eq!(snapshot.counts.share_percent(Category::Princess), 100);
        assert!(snapshot.results.get(Category::Princess).unwrap().is_tie());
    }

    #[tokio::test]
    async fn test_one_failed_request_fails_snapshot() {
        let router = counts_route().route(
            "/api/v1/results",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let fetch = FetchDashboard::new(spawn_fake_api(router).await);

        assert_eq!(fetch.execute().await.unwrap_err(), AppError::Api(500));
    }

    #[tokio::test]
    async fn test_user_stats() {
        let router = Router::new().route(
            "/api/v1/users",
            get(|| async { Json(json!({"concurrent_users": 12, "total_votes": 40})) }),
        );
        let stats = FetchUserStats::new(spawn_fake_api(router).await)
            .execute()
            .await
            .unwrap();
        assert_eq!(
            stats,
            UserStats {
                concurrent_users: 12,
                total_votes: 40
            }
        );
    }
}
