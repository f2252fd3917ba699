//! Device status for the portal's status screen.
//!
//! We ship two providers:
//! - SystemStatus  (host numbers via `sysinfo`)
//! - FixedStatus   (canned values for tests and offline page dumps)

use std::sync::Mutex;

use sysinfo::System;

/// Snapshot of the host shown on `/status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatus {
    pub host_name: String,
    pub os: String,
    pub uptime_secs: u64,
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
}

impl DeviceStatus {
    /// Memory in use as a whole percentage, 0 when the total is unknown.
    pub fn memory_percent(&self) -> u64 {
        if self.memory_total_bytes == 0 {
            return 0;
        }
        (self.memory_used_bytes.min(self.memory_total_bytes) * 100) / self.memory_total_bytes
    }
}

/// General interface for anything that supplies device status.
pub trait StatusProvider: Send + Sync {
    fn snapshot(&self) -> DeviceStatus;
}

/// Status backed by the host OS via `sysinfo`.
pub struct SystemStatus {
    sys: Mutex<System>,
}

impl SystemStatus {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Self {
            sys: Mutex::new(sys),
        }
    }
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusProvider for SystemStatus {
    fn snapshot(&self) -> DeviceStatus {
        let mut sys = self.sys.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sys.refresh_memory();

        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{name} {version}"),
            (Some(name), None) => name,
            _ => "unknown".to_string(),
        };

        DeviceStatus {
            host_name: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            os,
            uptime_secs: System::uptime(),
            memory_used_bytes: sys.used_memory(),
            memory_total_bytes: sys.total_memory(),
        }
    }
}

/// Always reports the same status.
#[derive(Debug, Clone)]
pub struct FixedStatus(pub DeviceStatus);

impl Default for FixedStatus {
    fn default() -> Self {
        Self(DeviceStatus {
            host_name: "device".to_string(),
            os: "embedded".to_string(),
            uptime_secs: 0,
            memory_used_bytes: 0,
            memory_total_bytes: 0,
        })
    }
}

impl StatusProvider for FixedStatus {
    fn snapshot(&self) -> DeviceStatus {
        self.0.clone()
    }
}

/// `3725` → `"1h 2m 5s"`.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Bytes as MiB with one decimal.
pub fn format_mib(bytes: u64) -> String {
    format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_percent() {
        let mut status = FixedStatus::default().0;
        assert_eq!(status.memory_percent(), 0);

        status.memory_total_bytes = 8_000;
        status.memory_used_bytes = 2_000;
        assert_eq!(status.memory_percent(), 25);

        status.memory_used_bytes = 9_000;
        assert_eq!(status.memory_percent(), 100);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(61), "1m 1s");
        assert_eq!(format_uptime(3_725), "1h 2m 5s");
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
    }

    #[test]
    fn test_format_mib() {
        assert_eq!(format_mib(0), "0.0 MiB");
        assert_eq!(format_mib(1_572_864), "1.5 MiB");
    }

    #[test]
    fn test_fixed_status_is_stable() {
        let provider = FixedStatus::default();
        assert_eq!(provider.snapshot(), provider.snapshot());
    }

    #[test]
    fn test_system_status_memory_percent_in_range() {
        let status = SystemStatus::new().snapshot();
        assert!(status.memory_percent() <= 100);
    }
}
