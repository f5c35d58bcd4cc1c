mod authenticate;
mod cast_vote;
mod fetch_dashboard;
mod reset_votes;

pub use authenticate::{Authenticate, ACCOUNT_CREATED_MESSAGE};
pub use cast_vote::CastVote;
pub use fetch_dashboard::{FetchDashboard, FetchUserStats};
pub use reset_votes::ResetVotes;
