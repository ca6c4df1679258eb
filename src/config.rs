//! Agent configuration
//!
//! All settings are read from the environment (with `.env` support via
//! dotenvy in main). Values fall back to the compiled-in defaults so a bare
//! binary still points at the development backend.

use std::path::PathBuf;

/// Agent configuration
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Backend API base URL (no trailing slash)
    pub backend_url: String,
    /// Device display name
    pub device_name: String,
    /// Device type tag (light, sensor, actuator, relay)
    pub device_type: String,
    /// Registration retry interval in milliseconds
    pub retry_interval_ms: u64,
    /// Minimum spacing between consecutive registration attempts
    pub attempt_debounce_ms: u64,
    /// Heartbeat cadence in milliseconds
    pub heartbeat_interval_ms: u64,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
    /// Optional root CA override (PEM file) for the cloud endpoint
    pub ca_cert_path: Option<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://192.168.1.100:3000".to_string()),
            device_name: std::env::var("DEVICE_NAME")
                .unwrap_or_else(|_| "ESP32_Relay_Device_01".to_string()),
            device_type: std::env::var("DEVICE_TYPE")
                .unwrap_or_else(|_| "relay".to_string()),
            retry_interval_ms: std::env::var("REGISTER_RETRY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60_000),
            attempt_debounce_ms: std::env::var("REGISTER_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5_000),
            heartbeat_interval_ms: std::env::var("HEARTBEAT_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            ca_cert_path: std::env::var("CA_CERT_PATH").ok().map(PathBuf::from),
        }
    }
}

impl AgentConfig {
    /// Validate the loaded configuration
    ///
    /// The backend URL must carry a scheme; everything else has sane
    /// numeric defaults already applied by `Default`.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(crate::Error::Config(format!(
                "BACKEND_URL must start with http:// or https://: {}",
                self.backend_url
            )));
        }
        if self.backend_url.ends_with('/') {
            return Err(crate::Error::Config(
                "BACKEND_URL must not have a trailing slash".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_url() {
        let config = AgentConfig {
            backend_url: "http://10.0.0.5:3000".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_scheme() {
        let config = AgentConfig {
            backend_url: "192.168.1.100:3000".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_trailing_slash() {
        let config = AgentConfig {
            backend_url: "http://192.168.1.100:3000/".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    fn base_config() -> AgentConfig {
        AgentConfig {
            backend_url: "http://localhost:3000".to_string(),
            device_name: "test-device".to_string(),
            device_type: "relay".to_string(),
            retry_interval_ms: 60_000,
            attempt_debounce_ms: 5_000,
            heartbeat_interval_ms: 30_000,
            http_timeout_secs: 10,
            ca_cert_path: None,
        }
    }
}
