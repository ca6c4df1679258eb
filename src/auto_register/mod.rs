//! AutoRegister Module
//!
//! Self-registration of this device with the backend, plus the post-success
//! heartbeat. The controller retries registration until the backend accepts
//! the device, with a debounce floor between attempts, then switches to
//! periodic best-effort "online" heartbeats.
//!
//! ## Module layout
//! - `types`: payloads, phases, constants
//! - `clock`: monotonic clock capability
//! - `transport`: HTTP POST capability (reqwest in production)
//! - `service`: the lifecycle controller itself
//!
//! ## Lifecycle
//! ```text
//! Unregistered --attempt (link up)--> Pending
//! Pending --HTTP 200/201--> Registered (terminal, heartbeats only)
//! Pending --other status / transport error--> Unregistered (retry later)
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use uplink_agent::auto_register::{AutoRegisterService, ReqwestTransport, SystemClock};
//! use uplink_agent::connectivity::SysfsLinkProbe;
//!
//! let mut agent = AutoRegisterService::new(
//!     &config,
//!     identity,
//!     ReqwestTransport::new(Duration::from_secs(10), None),
//!     SystemClock::new(),
//!     SysfsLinkProbe::new(),
//! );
//!
//! agent.attempt_registration().await;
//! loop {
//!     agent.periodic_check().await;
//!     // heartbeat on its own cadence once agent.is_registered()
//! }
//! ```

pub mod clock;
pub mod service;
pub mod transport;
pub mod types;

// Re-exports
pub use clock::{MonotonicClock, SystemClock};
pub use service::AutoRegisterService;
pub use transport::{BackendTransport, HttpReply, ReqwestTransport};
pub use types::*;
