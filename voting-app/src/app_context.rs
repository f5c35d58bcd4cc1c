use crate::application::{Authenticate, CastVote, FetchDashboard, FetchUserStats, ResetVotes};
use crate::config::ApiConfig;
use crate::infrastructure::api::VotingApiClient;
use crate::infrastructure::security::VoteThrottle;
use std::sync::Arc;
use voting_errors::AppError;

#[derive(Clone)]
pub struct AppContext {
    pub cast_vote: Arc<CastVote>,
    pub fetch_dashboard: Arc<FetchDashboard>,
    pub fetch_user_stats: Arc<FetchUserStats>,
    pub authenticate: Arc<Authenticate>,
    pub reset_votes: Arc<ResetVotes>,
    pub api_base_url: String,
}

impl AppContext {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = VotingApiClient::new(config)?;

        Ok(Self {
            cast_vote: Arc::new(CastVote::new(client.clone(), VoteThrottle::new())),
            fetch_dashboard: Arc::new(FetchDashboard::new(client.clone())),
            fetch_user_stats: Arc::new(FetchUserStats::new(client.clone())),
            authenticate: Arc::new(Authenticate::new(client.clone())),
            reset_votes: Arc::new(ResetVotes::new(client)),
            api_base_url: config.base_url.clone(),
        })
    }

    pub fn from_env() -> Result<Self, AppError> {
        let config = ApiConfig::from_env()?;
        tracing::info!("Using voting API at {}", config.base_url);
        Self::new(&config)
    }
}
