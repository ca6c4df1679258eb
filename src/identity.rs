//! Device identity queries
//!
//! MAC and local IP lookups used to build the registration payload.
//!
//! ## MAC format
//! Six colon-separated lowercase hex octets, zero-padded:
//! `[0x1A, 0x02, 0xFF, 0x00, 0x11, 0x09]` -> `"1a:02:ff:00:11:09"`

/// Identity fields sent to the backend on registration
#[derive(Debug, Clone)]
pub struct DeviceIdentity {
    /// Device display name
    pub name: String,
    /// Device type tag (light, sensor, actuator, relay)
    pub device_type: String,
    /// MAC address, colon-separated lowercase hex
    pub mac_address: String,
    /// Local IP address, dotted quad
    pub ip_address: String,
    /// Firmware version string
    pub firmware_version: String,
}

/// Format raw MAC bytes as six colon-separated lowercase hex octets
pub fn format_mac(bytes: [u8; 6]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Normalize a MAC string (any separator, any case) to the wire format
///
/// Returns Err if the input does not contain exactly 12 hex digits.
pub fn normalize_mac(mac: &str) -> crate::Result<String> {
    let digits: Vec<char> = mac
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .collect();

    if digits.len() != 12 {
        return Err(crate::Error::Identity(format!(
            "Invalid MAC address: expected 12 hex digits, got {}",
            digits.len()
        )));
    }

    let lower: String = digits.iter().collect::<String>().to_lowercase();
    Ok(lower
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(":"))
}

/// Get the primary MAC address of this device
///
/// Scans network interfaces in priority order, then falls back to the first
/// non-loopback interface with a usable address.
pub fn primary_mac_address() -> crate::Result<String> {
    #[cfg(target_os = "linux")]
    {
        // Priority: wired first, then wireless
        let interfaces = ["eth0", "enp0s3", "enp0s31f6", "wlan0"];

        for iface in &interfaces {
            let path = format!("/sys/class/net/{}/address", iface);
            if let Ok(mac) = std::fs::read_to_string(&path) {
                let mac = mac.trim();
                if !mac.is_empty() && mac != "00:00:00:00:00:00" {
                    tracing::info!(iface = %iface, mac = %mac, "Found MAC address");
                    return normalize_mac(mac);
                }
            }
        }

        // No known interface name matched; scan the directory
        let net_dir = std::fs::read_dir("/sys/class/net")?;
        for entry in net_dir.flatten() {
            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if name_str == "lo" {
                continue;
            }

            let path = format!("/sys/class/net/{}/address", name_str);
            if let Ok(mac) = std::fs::read_to_string(&path) {
                let mac = mac.trim();
                if !mac.is_empty() && mac != "00:00:00:00:00:00" {
                    tracing::info!(iface = %name_str, mac = %mac, "Found MAC address");
                    return normalize_mac(mac);
                }
            }
        }

        Err(crate::Error::Identity(
            "No valid network interface found".to_string(),
        ))
    }

    #[cfg(not(target_os = "linux"))]
    {
        Err(crate::Error::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "MAC address retrieval not supported on this platform",
        )))
    }
}

/// Get the local IP address as a dotted-quad string
///
/// Uses a connected UDP socket to resolve the outbound interface address.
/// No packet is sent by `connect` on a datagram socket.
pub fn local_ip_address() -> crate::Result<String> {
    let socket = std::net::UdpSocket::bind("0.0.0.0:0")?;
    socket.connect("8.8.8.8:80")?;
    let addr = socket.local_addr()?;
    Ok(addr.ip().to_string())
}
