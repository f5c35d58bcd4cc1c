use std::time::Duration;
use voting_errors::AppError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Where the voting REST API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout,
        })
    }

    /// Reads `VOTING_API_URL` and `VOTING_API_TIMEOUT_SECS`, falling back to
    /// the defaults when unset.
    pub fn from_env() -> Result<Self, AppError> {
        let base_url =
            std::env::var("VOTING_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = match std::env::var("VOTING_API_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("VOTING_API_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        if timeout_secs == 0 {
            return Err(AppError::Config(
                "VOTING_API_TIMEOUT_SECS must be positive".to_string(),
            ));
        }

        Self::new(&base_url, Duration::from_secs(timeout_secs))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let raw = raw.trim();

    let parsed = url::Url::parse(raw)
        .map_err(|e| AppError::Config(format!("VOTING_API_URL is not a URL ({e}): {raw}")))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(AppError::Config(format!(
            "VOTING_API_URL must be http or https: {raw}"
        )));
    }

    if parsed.host_str().is_none() {
        return Err(AppError::Config(format!("VOTING_API_URL has no host: {raw}")));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
