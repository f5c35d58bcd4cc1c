mod device_identity;
mod input_sanitizer;
mod rate_limiter;

pub use device_identity::{DeviceIdentityManager, STALE_SESSION_MESSAGE};
pub use input_sanitizer::{InputSanitizer, EMPTY_CANDIDATE_MESSAGE};
pub use rate_limiter::VoteThrottle;
