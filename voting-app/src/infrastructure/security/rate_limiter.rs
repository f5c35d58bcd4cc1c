use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use voting_errors::AppError;

const MAX_VOTES_PER_MINUTE: u32 = 10;
const MAX_VOTES_PER_HOUR: u32 = 60;
const CLEANUP_INTERVAL_SECS: u64 = 300;

#[derive(Clone)]
struct SubmissionRecord {
    minute_count: u32,
    hour_count: u32,
    minute_start: Instant,
    hour_start: Instant,
}

impl SubmissionRecord {
    fn starting_at(now: Instant) -> Self {
        Self {
            minute_count: 0,
            hour_count: 0,
            minute_start: now,
            hour_start: now,
        }
    }
}

/// Per-device throttle on vote submissions, kept in memory only.
#[derive(Clone)]
pub struct VoteThrottle {
    submissions: Arc<DashMap<String, SubmissionRecord>>,
    last_cleanup: Arc<std::sync::Mutex<Instant>>,
    per_minute: u32,
    per_hour: u32,
}

impl VoteThrottle {
    pub fn new() -> Self {
        Self::with_limits(MAX_VOTES_PER_MINUTE, MAX_VOTES_PER_HOUR)
    }

    pub fn with_limits(per_minute: u32, per_hour: u32) -> Self {
        Self {
            submissions: Arc::new(DashMap::new()),
            last_cleanup: Arc::new(std::sync::Mutex::new(Instant::now())),
            per_minute,
            per_hour,
        }
    }

    pub fn check(&self, device_id: &str) -> Result<(), AppError> {
        self.check_at(device_id, Instant::now())
    }

    fn check_at(&self, device_id: &str, now: Instant) -> Result<(), AppError> {
        self.maybe_cleanup(now);

        let mut record = self
            .submissions
            .entry(device_id.to_string())
            .or_insert_with(|| SubmissionRecord::starting_at(now));

        if now.duration_since(record.minute_start) >= Duration::from_secs(60) {
            record.minute_count = 0;
            record.minute_start = now;
        }

        if now.duration_since(record.hour_start) >= Duration::from_secs(3600) {
            record.hour_count = 0;
            record.hour_start = now;
        }

        if record.minute_count >= self.per_minute {
            let wait_secs = 60 - now.duration_since(record.minute_start).as_secs();
            tracing::warn!(device_id, "vote throttled for {}s", wait_secs);
            return Err(AppError::RateLimited(wait_secs));
        }

        if record.hour_count >= self.per_hour {
            let wait_secs = 3600 - now.duration_since(record.hour_start).as_secs();
            tracing::warn!(device_id, "vote throttled for {}s", wait_secs);
            return Err(AppError::RateLimited(wait_secs));
        }

        record.minute_count += 1;
        record.hour_count += 1;

        Ok(())
    }

    fn maybe_cleanup(&self, now: Instant) {
        let Ok(mut last_cleanup) = self.last_cleanup.lock() else {
            return;
        };
        if now.duration_since(*last_cleanup) > Duration::from_secs(CLEANUP_INTERVAL_SECS) {
            self.submissions
                .retain(|_, v| now.duration_since(v.hour_start) < Duration::from_secs(3600));
            *last_cleanup = now;
        }
    }
}

impl Default for VoteThrottle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_after_minute_limit() {
        let throttle = VoteThrottle::with_limits(3, 100);
        let now = Instant::now();

        for _ in 0..3 {
            assert!(throttle.check_at("device-a", now).is_ok());
        }
        assert!(matches!(
            throttle.check_at("device-a", now),
            Err(AppError::RateLimited(60))
        ));
        assert!(throttle.check_at("device-b", now).is_ok());
    }

    #[test]
    fn test_minute_window_resets() {
        let throttle = VoteThrottle::with_limits(1, 100);
        let now = Instant::now();

        assert!(throttle.check_at("device-a", now).is_ok());
        assert!(throttle.check_at("device-a", now).is_err());
        assert!(throttle
            .check_at("device-a", now + Duration::from_secs(61))
            .is_ok());
    }

    #[test]
    fn test_hour_limit_outlasts_minute_window() {
        let throttle = VoteThrottle::with_limits(10, 2);
        let now = Instant::now();

        assert!(throttle.check_at("device-a", now).is_ok());
        assert!(throttle.check_at("device-a", now).is_ok());
        assert!(throttle
            .check_at("device-a", now + Duration::from_secs(120))
            .is_err());
    }
}
