mod category;
mod counts;
mod dashboard;
mod device;
mod results;
mod user;
mod vote;

pub use category::{Category, UnknownCategory};
pub use counts::VoteCounts;
pub use dashboard::{DashboardSnapshot, POLL_INTERVAL};
pub use device::{ClientHints, DeviceIdentity, SecurityData};
pub use results::{CategoryResult, LiveResults, NO_VOTES_YET};
pub use user::{AuthProvider, User, UserSession};
pub use vote::{ApiAck, UserStats, VoteOutcome};
