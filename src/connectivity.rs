//! Network link probe
//!
//! The registration controller never issues HTTP calls while the link is
//! down; it asks this probe at every decision point. The probe is a trait so
//! tests can script link availability.

/// Boolean "is the network link up" capability
pub trait LinkProbe {
    fn is_up(&self) -> bool;
}

/// Link probe backed by `/sys/class/net/<iface>/operstate`
///
/// An interface counts as up when its operstate reads `up`. Loopback is
/// ignored. On non-Linux targets the probe optimistically reports up and the
/// HTTP timeout bounds the damage.
#[derive(Debug, Clone, Default)]
pub struct SysfsLinkProbe;

impl SysfsLinkProbe {
    pub fn new() -> Self {
        Self
    }
}

impl LinkProbe for SysfsLinkProbe {
    fn is_up(&self) -> bool {
        #[cfg(target_os = "linux")]
        {
            let net_dir = match std::fs::read_dir("/sys/class/net") {
                Ok(dir) => dir,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read /sys/class/net, assuming link down");
                    return false;
                }
            };

            for entry in net_dir.flatten() {
                let name = entry.file_name();
                let name_str = name.to_string_lossy();

                if name_str == "lo" {
                    continue;
                }

                let path = format!("/sys/class/net/{}/operstate", name_str);
                if let Ok(state) = std::fs::read_to_string(&path) {
                    if state.trim() == "up" {
                        return true;
                    }
                }
            }

            false
        }

        #[cfg(not(target_os = "linux"))]
        {
            true
        }
    }
}

/// Fixed-answer probe, for wiring the agent in environments without sysfs
#[derive(Debug, Clone)]
pub struct StaticLinkProbe(pub bool);

impl LinkProbe for StaticLinkProbe {
    fn is_up(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_probe_reports_fixed_answer() {
        assert!(StaticLinkProbe(true).is_up());
        assert!(!StaticLinkProbe(false).is_up());
    }
}
