//! Turns a snapshot into what the user sees: grouped rows for the tabs, or
//! the flat text report.

pub mod render;
pub mod report;

pub use render::{Category, DisplayModel, Row, VolumeNode, render};
pub use report::{DEFAULT_REPORT_FILE, serialize, write_report};

use crate::format::{
    format_cpu_percent, format_gib, format_percent, format_timestamp, format_uptime, or_unknown,
};
use crate::system::snapshot::{SystemSnapshot, VolumeInfo};

pub const SYSTEM: &str = "System";
pub const NODE_NAME: &str = "Node Name";
pub const RELEASE: &str = "Release";
pub const VERSION: &str = "Version";
pub const MACHINE: &str = "Machine";
pub const PROCESSOR: &str = "Processor";
pub const BOOT_TIME: &str = "Boot Time";
pub const PHYSICAL_CORES: &str = "Physical Cores";
pub const TOTAL_CORES: &str = "Total Cores";
pub const CPU_USAGE: &str = "CPU Usage";
pub const TOTAL_MEMORY: &str = "Total Memory";
pub const AVAILABLE_MEMORY: &str = "Available Memory";
pub const USED_MEMORY: &str = "Used Memory";
pub const MEMORY_PERCENTAGE: &str = "Memory Percentage";
pub const HOSTNAME: &str = "Hostname";
pub const IP_ADDRESS: &str = "IP Address";
pub const MAC_ADDRESS: &str = "MAC Address";
pub const CURRENT_USER: &str = "Current User";
pub const SYSTEM_UPTIME: &str = "System Uptime";

pub const DEVICE: &str = "Device";
pub const MOUNTPOINT: &str = "Mountpoint";
pub const FILE_SYSTEM: &str = "File System";
pub const TOTAL_SIZE: &str = "Total Size";
pub const USED: &str = "Used";
pub const FREE: &str = "Free";
pub const PERCENTAGE: &str = "Percentage";

/// One position in the snapshot's natural property order.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry<'a> {
    Scalar(&'static str, String),
    Disks(&'a [VolumeInfo]),
}

pub fn entries(snapshot: &SystemSnapshot) -> Vec<Entry<'_>> {
    vec![
        Entry::Scalar(SYSTEM, snapshot.os_name.clone()),
        Entry::Scalar(NODE_NAME, snapshot.node_name.clone()),
        Entry::Scalar(RELEASE, snapshot.release.clone()),
        Entry::Scalar(VERSION, snapshot.version.clone()),
        Entry::Scalar(MACHINE, snapshot.machine.clone()),
        Entry::Scalar(PROCESSOR, or_unknown(snapshot.processor.as_deref())),
        Entry::Scalar(BOOT_TIME, format_timestamp(&snapshot.boot_time)),
        Entry::Scalar(PHYSICAL_CORES, or_unknown(snapshot.physical_cores)),
        Entry::Scalar(TOTAL_CORES, snapshot.logical_cores.to_string()),
        Entry::Scalar(CPU_USAGE, format_cpu_percent(snapshot.cpu_usage_percent)),
        Entry::Scalar(TOTAL_MEMORY, format_gib(snapshot.memory_total)),
        Entry::Scalar(AVAILABLE_MEMORY, format_gib(snapshot.memory_available)),
        Entry::Scalar(USED_MEMORY, format_gib(snapshot.memory_used)),
        Entry::Scalar(MEMORY_PERCENTAGE, format_percent(snapshot.memory_percent)),
        Entry::Disks(&snapshot.disks),
        Entry::Scalar(HOSTNAME, snapshot.hostname.clone()),
        Entry::Scalar(IP_ADDRESS, or_unknown(snapshot.ip_address)),
        Entry::Scalar(MAC_ADDRESS, or_unknown(snapshot.mac_address)),
        Entry::Scalar(CURRENT_USER, or_unknown(snapshot.current_user.as_deref())),
        Entry::Scalar(SYSTEM_UPTIME, format_uptime(snapshot.uptime)),
    ]
}

pub fn volume_fields(volume: &VolumeInfo) -> [(&'static str, String); 7] {
    [
        (DEVICE, volume.device.clone()),
        (MOUNTPOINT, volume.mount_point.clone()),
        (FILE_SYSTEM, volume.file_system.clone()),
        (TOTAL_SIZE, format_gib(volume.total)),
        (USED, format_gib(volume.used)),
        (FREE, format_gib(volume.free)),
        (PERCENTAGE, format_percent(volume.percent)),
    ]
}
