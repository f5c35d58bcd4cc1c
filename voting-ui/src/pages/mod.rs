mod login;
mod results;
mod voting;

pub use login::{LoginFn, LoginPage, OAuthLoginFn, RegisterFn};
pub use results::{DashboardFn, ResetVotesFn, ResultsPage, UserStatsFn};
pub use voting::{CastVoteFn, DeviceIdentityFn, VotingPage};
