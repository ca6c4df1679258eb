//! Device Uplink Agent - main entry point

use std::time::{Duration, Instant};
use uplink_agent::{
    auto_register::{AutoRegisterService, ReqwestTransport, SystemClock},
    config::AgentConfig,
    connectivity::SysfsLinkProbe,
    identity::{self, DeviceIdentity},
    tls,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uplink_agent=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting uplink agent v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AgentConfig::default();
    config.validate()?;
    tracing::info!(
        backend_url = %config.backend_url,
        device_name = %config.device_name,
        device_type = %config.device_type,
        retry_interval_ms = config.retry_interval_ms,
        heartbeat_interval_ms = config.heartbeat_interval_ms,
        http_timeout_secs = config.http_timeout_secs,
        "Configuration loaded"
    );

    // Resolve device identity
    let mac_address = identity::primary_mac_address()?;
    let ip_address = identity::local_ip_address()?;
    let identity = DeviceIdentity {
        name: config.device_name.clone(),
        device_type: config.device_type.clone(),
        mac_address,
        ip_address,
        firmware_version: uplink_agent::auto_register::FIRMWARE_VERSION.to_string(),
    };
    tracing::info!(
        mac = %identity.mac_address,
        ip = %identity.ip_address,
        "Device identity resolved"
    );

    // Build the backend transport
    let root_ca = tls::load_root_certificate(config.ca_cert_path.as_deref())?;
    if root_ca.is_some() {
        tracing::info!("Custom root CA active for backend TLS");
    }
    let transport = ReqwestTransport::new(Duration::from_secs(config.http_timeout_secs), root_ca);

    let mut agent = AutoRegisterService::new(
        &config,
        identity,
        transport,
        SystemClock::new(),
        SysfsLinkProbe::new(),
    );

    // First attempt right away, then hand over to the drive loop
    agent.attempt_registration().await;

    let heartbeat_interval = Duration::from_millis(config.heartbeat_interval_ms);
    let mut last_heartbeat = Instant::now();
    let mut tick = tokio::time::interval(Duration::from_secs(1));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tick.tick().await;
        agent.periodic_check().await;

        if agent.is_registered() && last_heartbeat.elapsed() >= heartbeat_interval {
            agent.send_heartbeat().await;
            last_heartbeat = Instant::now();
        }
    }
}
