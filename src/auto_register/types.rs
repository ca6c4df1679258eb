//! AutoRegister type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================
// Constants
// ============================================================

/// Firmware version reported to the backend
pub const FIRMWARE_VERSION: &str = "1.0.0";

/// Heartbeat status value; the backend knows no other
pub const STATUS_ONLINE: &str = "online";

/// Registration endpoint path under the backend base URL
pub const AUTO_REGISTER_PATH: &str = "/api/devices/auto-register";

/// Heartbeat endpoint path under the backend base URL
pub const HEARTBEAT_PATH: &str = "/api/devices/heartbeat";

// ============================================================
// Types
// ============================================================

/// Registration lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationPhase {
    /// No attempt has concluded successfully and none is being debounced
    Unregistered,
    /// An attempt was made and is inside the debounce window
    Pending,
    /// Backend accepted the device; terminal until process restart
    Registered,
}

impl Default for RegistrationPhase {
    fn default() -> Self {
        Self::Unregistered
    }
}

/// Body of POST /api/devices/auto-register
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub mac_address: String,
    pub firmware_version: String,
}

/// Body of POST /api/devices/heartbeat
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatPayload {
    pub ip_address: String,
    pub status: String,
}

/// Controller status snapshot for logging/diagnostics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    pub registered: bool,
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_payload_wire_keys() {
        let payload = RegisterPayload {
            name: "ESP32_Relay_Device_01".to_string(),
            device_type: "relay".to_string(),
            ip_address: "192.168.1.42".to_string(),
            mac_address: "1a:02:ff:00:11:09".to_string(),
            firmware_version: FIRMWARE_VERSION.to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["name"], "ESP32_Relay_Device_01");
        assert_eq!(value["deviceType"], "relay");
        assert_eq!(value["ipAddress"], "192.168.1.42");
        assert_eq!(value["macAddress"], "1a:02:ff:00:11:09");
        assert_eq!(value["firmwareVersion"], "1.0.0");
    }

    #[test]
    fn test_heartbeat_payload_wire_keys() {
        let payload = HeartbeatPayload {
            ip_address: "192.168.1.42".to_string(),
            status: STATUS_ONLINE.to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["ipAddress"], "192.168.1.42");
        assert_eq!(value["status"], "online");
    }

    #[test]
    fn test_default_phase_is_unregistered() {
        assert_eq!(RegistrationPhase::default(), RegistrationPhase::Unregistered);
    }
}
