//! AutoRegister Service
//!
//! Registration lifecycle controller. Owns the three pieces of registration
//! state (`attempted`, `succeeded`, `last_attempt_ms`) and drives the two
//! backend calls over the injected transport.
//!
//! ## Timing rules
//! - An attempt is issued only if `attempted` is still false or at least the
//!   debounce floor (default 5000 ms) has passed since the last attempt.
//! - `periodic_check` re-arms a failed registration only after the retry
//!   interval (default 60000 ms).
//! - Once `succeeded` is true no registration POST is ever issued again;
//!   only heartbeats go out.
//!
//! ## Failure policy
//! Registration failures are logged with status and body, then retried on
//! schedule. Heartbeat failures are discarded: heartbeat loss is non-fatal
//! and self-heals on the next interval.

use super::clock::MonotonicClock;
use super::transport::BackendTransport;
use super::types::{
    HeartbeatPayload, RegisterPayload, RegistrationPhase, RegistrationStatus, AUTO_REGISTER_PATH,
    HEARTBEAT_PATH, STATUS_ONLINE,
};
use crate::config::AgentConfig;
use crate::connectivity::LinkProbe;
use crate::identity::DeviceIdentity;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Registration lifecycle controller
pub struct AutoRegisterService<T, C, L> {
    backend_url: String,
    retry_interval_ms: u64,
    debounce_ms: u64,
    identity: DeviceIdentity,
    transport: T,
    clock: C,
    link: L,
    attempted: bool,
    succeeded: bool,
    last_attempt_ms: u64,
    attempts: u32,
    registered_at: Option<DateTime<Utc>>,
}

impl<T, C, L> AutoRegisterService<T, C, L>
where
    T: BackendTransport,
    C: MonotonicClock,
    L: LinkProbe,
{
    /// Create a new controller in the `Unregistered` phase
    pub fn new(
        config: &AgentConfig,
        identity: DeviceIdentity,
        transport: T,
        clock: C,
        link: L,
    ) -> Self {
        Self {
            backend_url: config.backend_url.clone(),
            retry_interval_ms: config.retry_interval_ms,
            debounce_ms: config.attempt_debounce_ms,
            identity,
            transport,
            clock,
            link,
            attempted: false,
            succeeded: false,
            last_attempt_ms: 0,
            attempts: 0,
            registered_at: None,
        }
    }

    /// Attempt one device registration
    ///
    /// No-op when already registered, when inside the debounce window, or
    /// when the link is down. HTTP failures are logged, never returned.
    pub async fn attempt_registration(&mut self) {
        if self.succeeded {
            return;
        }

        let now = self.clock.now_ms();
        if self.attempted && now.saturating_sub(self.last_attempt_ms) < self.debounce_ms {
            return;
        }

        if !self.link.is_up() {
            debug!("Link down, skipping registration attempt");
            return;
        }

        self.last_attempt_ms = now;
        self.attempted = true;
        self.attempts += 1;

        let payload = RegisterPayload {
            name: self.identity.name.clone(),
            device_type: self.identity.device_type.clone(),
            ip_address: self.identity.ip_address.clone(),
            mac_address: self.identity.mac_address.clone(),
            firmware_version: self.identity.firmware_version.clone(),
        };

        let body = match serde_json::to_string(&payload) {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to serialize registration payload");
                return;
            }
        };

        let url = format!("{}{}", self.backend_url, AUTO_REGISTER_PATH);
        info!(
            url = %url,
            mac = %self.identity.mac_address,
            ip = %self.identity.ip_address,
            attempt = self.attempts,
            "Attempting device registration"
        );

        match self.transport.post_json(&url, body).await {
            Ok(reply) if reply.status == 200 || reply.status == 201 => {
                self.succeeded = true;
                self.registered_at = Some(Utc::now());
                info!(
                    status = reply.status,
                    body = %reply.body,
                    "Device registration successful"
                );
            }
            Ok(reply) => {
                warn!(
                    status = reply.status,
                    body = %reply.body,
                    "Device registration rejected by backend"
                );
            }
            Err(e) => {
                warn!(error = %e, "Device registration request failed");
            }
        }
    }

    /// One pass of the external drive loop
    ///
    /// Re-arms and retries registration once the retry interval has elapsed
    /// since the last attempt. Idempotent at any call frequency.
    pub async fn periodic_check(&mut self) {
        if self.succeeded {
            return;
        }

        let now = self.clock.now_ms();
        if now.saturating_sub(self.last_attempt_ms) > self.retry_interval_ms {
            self.attempted = false;
            self.attempt_registration().await;
        }
    }

    /// Fire-and-forget "online" heartbeat
    ///
    /// Only sent once registered and while the link is up. The response is
    /// not inspected and failures are discarded.
    pub async fn send_heartbeat(&mut self) {
        if !self.succeeded || !self.link.is_up() {
            return;
        }

        let payload = HeartbeatPayload {
            ip_address: self.identity.ip_address.clone(),
            status: STATUS_ONLINE.to_string(),
        };

        let body = match serde_json::to_string(&payload) {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "Failed to serialize heartbeat payload");
                return;
            }
        };

        let url = format!("{}{}", self.backend_url, HEARTBEAT_PATH);
        if let Err(e) = self.transport.post_json(&url, body).await {
            debug!(error = %e, "Heartbeat dropped");
        }
    }

    /// Whether the backend has accepted this device
    pub fn is_registered(&self) -> bool {
        self.succeeded
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> RegistrationPhase {
        if self.succeeded {
            RegistrationPhase::Registered
        } else if self.attempted {
            RegistrationPhase::Pending
        } else {
            RegistrationPhase::Unregistered
        }
    }

    /// Status snapshot for logging/diagnostics
    pub fn status(&self) -> RegistrationStatus {
        RegistrationStatus {
            registered: self.succeeded,
            attempts: self.attempts,
            registered_at: self.registered_at,
        }
    }
}
