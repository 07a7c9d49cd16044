// --- File: crates/bumble_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory the landing page is served from.
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: "static".to_string(),
        }
    }
}

// --- Google Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct GcalConfig {
    /// OAuth client secret file for the installed-app flow.
    pub credentials_path: String,
    /// Where obtained/refreshed tokens are persisted between runs.
    pub token_cache_path: String,
    /// The one calendar all bookings live on. Mandatory at startup.
    pub calendar_id: Option<String>,
    /// IANA zone the slot times are interpreted in.
    pub time_zone: String,
    /// The fixed daily slot offering, in order.
    pub slot_times: Vec<String>,
    pub booking_duration_minutes: i64,
    /// Length of the rolling summary window, in calendar days.
    pub summary_days: u32,
}

impl Default for GcalConfig {
    fn default() -> Self {
        Self {
            credentials_path: "credentials.json".to_string(),
            token_cache_path: "token_cache.json".to_string(),
            calendar_id: None,
            time_zone: "Europe/London".to_string(),
            slot_times: default_slot_times(),
            booking_duration_minutes: 60,
            summary_days: 45,
        }
    }
}

fn default_slot_times() -> Vec<String> {
    ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// --- Gmail Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct GmailConfig {
    /// OAuth client secret file; usually the same file as the calendar's.
    pub credentials_path: String,
    pub token_cache_path: String,
    /// Signature line used in the confirmation body.
    pub from_name: String,
}

impl Default for GmailConfig {
    fn default() -> Self {
        Self {
            credentials_path: "credentials.json".to_string(),
            token_cache_path: "token_cache.json".to_string(),
            from_name: "The Bumblebee Gardening Team".to_string(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gcal: GcalConfig,
    pub gmail: GmailConfig,
}
