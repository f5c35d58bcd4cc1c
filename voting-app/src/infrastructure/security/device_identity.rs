use crate::domain::{ClientHints, DeviceIdentity, SecurityData};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;
use voting_errors::AppError;

pub const STALE_SESSION_MESSAGE: &str =
    "Your voting session has changed. Reload the page and try again.";

const FINGERPRINT_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_9b7d_4c3a_8e52_d01f_b7a9_e364);
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DEVICE_SUFFIX_LEN: usize = 9;
const FINGERPRINT_PREFIX_LEN: usize = 8;
const SESSION_KEY_BYTES: usize = 32;
const MAX_DEVICE_ID_LEN: usize = 128;

/// Mints and checks the per-browser identity used as the vote
/// deduplication key. Nothing here is a security boundary: the fingerprint
/// only tags the device id so that ids from the same browser look alike.
pub struct DeviceIdentityManager;

impl DeviceIdentityManager {
    /// 32 hex chars, stable for equal hints.
    pub fn fingerprint(hints: &ClientHints) -> String {
        let (width, height) = hints.screen.unwrap_or((0, 0));
        let joined = [
            hints.user_agent.clone(),
            hints.language.clone(),
            format!("{width}x{height}"),
            hints.timezone_offset_minutes.to_string(),
            hints.hardware_concurrency.to_string(),
            hints.device_memory_gb.to_string(),
        ]
        .join("|");

        Uuid::new_v5(&FINGERPRINT_NAMESPACE, joined.as_bytes())
            .simple()
            .to_string()
    }

    /// Keeps `stored_device_id` when it looks usable, otherwise mints a new
    /// one. The session key is always fresh.
    pub fn initialize(stored_device_id: Option<&str>, hints: &ClientHints) -> DeviceIdentity {
        Self::initialize_at(stored_device_id, hints, Utc::now().timestamp_millis())
    }

    fn initialize_at(
        stored_device_id: Option<&str>,
        hints: &ClientHints,
        now_millis: i64,
    ) -> DeviceIdentity {
        let fingerprint = Self::fingerprint(hints);

        let device_id = match stored_device_id.map(str::trim) {
            Some(id) if Self::is_usable_device_id(id) => id.to_string(),
            _ => Self::mint_device_id(&fingerprint, now_millis),
        };

        DeviceIdentity {
            device_id,
            session_key: Self::generate_session_key(),
            fingerprint,
        }
    }

    pub fn security_data(identity: &DeviceIdentity) -> SecurityData {
        SecurityData {
            device_id: identity.device_id.clone(),
            session_key: identity.session_key.clone(),
            fingerprint: identity.fingerprint.clone(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn is_valid_session(identity: &DeviceIdentity, presented_key: &str) -> bool {
        !identity.session_key.is_empty() && identity.session_key == presented_key
    }

    /// Refuses a vote whose page was rendered for another session key.
    pub fn verify_session(identity: &DeviceIdentity, presented_key: &str) -> Result<(), AppError> {
        if Self::is_valid_session(identity, presented_key) {
            Ok(())
        } else {
            tracing::warn!(device_id = %identity.device_id, "stale voting session key");
            Err(AppError::Validation(STALE_SESSION_MESSAGE.to_string()))
        }
    }

    fn is_usable_device_id(id: &str) -> bool {
        !id.is_empty()
            && id.len() <= MAX_DEVICE_ID_LEN
            && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// `device-{millis}-{9 base36 chars}-{fingerprint prefix}`
    fn mint_device_id(fingerprint: &str, now_millis: i64) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..DEVICE_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        let prefix: String = fingerprint.chars().take(FINGERPRINT_PREFIX_LEN).collect();

        format!("device-{now_millis}-{suffix}-{prefix}")
    }

    fn generate_session_key() -> String {
        let mut bytes = [0u8; SESSION_KEY_BYTES];
        rand::thread_rng().fill(&mut bytes[..]);
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
