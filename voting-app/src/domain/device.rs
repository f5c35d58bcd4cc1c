use serde::{Deserialize, Serialize};

/// Browser traits that feed the device fingerprint. Unknown values stay at
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientHints {
    pub user_agent: String,
    pub language: String,
    pub screen: Option<(u32, u32)>,
    /// Minutes, as reported by the browser (`UTC - local`).
    pub timezone_offset_minutes: i32,
    pub hardware_concurrency: u32,
    pub device_memory_gb: u32,
}

/// Identity of one browser. The device id is the vote deduplication key; the
/// session key is minted with the identity and lasts as long as the browser
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub device_id: String,
    pub session_key: String,
    pub fingerprint: String,
}

/// Identity snapshot attached to outgoing calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityData {
    pub device_id: String,
    pub session_key: String,
    pub fingerprint: String,
    pub timestamp: i64,
}
