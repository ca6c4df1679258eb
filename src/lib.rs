//! Device Uplink Agent
//!
//! Self-registration and heartbeat agent for IoT devices.
//!
//! ## Architecture (5 components)
//!
//! 1. AutoRegister - registration lifecycle controller (retry/debounce/heartbeat)
//! 2. Identity - MAC/IP device identity queries
//! 3. Connectivity - network link probe
//! 4. Tls - cloud endpoint certificate material
//! 5. Config - environment-driven agent configuration
//!
//! ## Design Principles
//!
//! - Injected capabilities: transport, clock and link probe are traits so the
//!   controller is deterministic under test
//! - Single cooperative driver: one tick loop, no locks, no shared state
//! - Registration/heartbeat failures are logged, never fatal

pub mod auto_register;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod identity;
pub mod tls;

pub use error::{Error, Result};
