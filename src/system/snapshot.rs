use std::net::IpAddr;
use std::time::Duration;

use chrono::{DateTime, Local};

use super::provider::MacAddress;

/// One complete capture of host state. Built in a single collection pass and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemSnapshot {
    pub os_name: String,
    pub node_name: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    pub processor: Option<String>,
    pub boot_time: DateTime<Local>,
    pub uptime: Duration,
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    pub cpu_usage_percent: f32,
    pub memory_total: u64,
    pub memory_available: u64,
    pub memory_used: u64,
    pub memory_percent: f32,
    pub disks: Vec<VolumeInfo>,
    pub hostname: String,
    pub ip_address: Option<IpAddr>,
    pub mac_address: Option<MacAddress>,
    pub current_user: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VolumeInfo {
    pub device: String,
    pub mount_point: String,
    pub file_system: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f32,
}

/// `part / whole` as a percentage clamped to `[0, 100]`. A zero `whole`
/// yields zero.
pub fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    ((part as f64 / whole as f64) * 100.0).clamp(0.0, 100.0) as f32
}
