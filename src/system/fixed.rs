//! Deterministic provider for exercising the collector and the front end
//! without touching the host.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use chrono::{Local, TimeZone};

use super::error::ProviderError;
use super::provider::{
    CpuStats, MacAddress, MemoryStats, OsIdentity, Partition, SystemProvider, VolumeUsage,
};
use super::snapshot::{SystemSnapshot, VolumeInfo};

const GIB: u64 = 1024 * 1024 * 1024;
const GB: u64 = 1_000_000_000;

/// Serves fixed values. A `None` field makes the matching query fail.
#[derive(Clone, Debug)]
pub struct FixedProvider {
    pub os: Option<OsIdentity>,
    pub boot_time: Option<u64>,
    pub cpu: Option<CpuStats>,
    pub memory: Option<MemoryStats>,
    pub partitions: Option<Vec<(Partition, Option<VolumeUsage>)>>,
    pub hostname: Option<String>,
    pub ip_address: Option<IpAddr>,
    pub mac_address: Option<MacAddress>,
    pub current_user: Option<String>,
}

impl FixedProvider {
    /// A small workstation: TestOS, 4/8 cores at 37 %, 16 GiB with 8 GiB
    /// used, one half-full 500 GB NTFS volume.
    pub fn example() -> Self {
        FixedProvider {
            os: Some(OsIdentity {
                name: "TestOS".to_string(),
                node_name: "host1".to_string(),
                release: "10".to_string(),
                version: "10.0.19045".to_string(),
                machine: "x86_64".to_string(),
                processor: Some("Test CPU @ 3.00GHz".to_string()),
            }),
            boot_time: Some(1_767_225_600),
            cpu: Some(CpuStats {
                physical_cores: Some(4),
                logical_cores: 8,
                usage_percent: 37.0,
            }),
            memory: Some(MemoryStats {
                total: 16 * GIB,
                available: 8 * GIB,
                used: 8 * GIB,
            }),
            partitions: Some(vec![(
                Partition {
                    device: "C:".to_string(),
                    mount_point: "C:\\".to_string(),
                    file_system: "ntfs".to_string(),
                },
                Some(VolumeUsage {
                    total: 500 * GB,
                    used: 250 * GB,
                    free: 250 * GB,
                }),
            )]),
            hostname: Some("host1".to_string()),
            ip_address: Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))),
            mac_address: Some(MacAddress([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])),
            current_user: Some("tester".to_string()),
        }
    }
}

impl SystemProvider for FixedProvider {
    fn os_identity(&mut self) -> Result<OsIdentity, ProviderError> {
        self.os
            .clone()
            .ok_or(ProviderError::unavailable("OS information"))
    }

    fn boot_time(&mut self) -> Result<u64, ProviderError> {
        self.boot_time.ok_or(ProviderError::unavailable("boot time"))
    }

    fn cpu(&mut self, _sample: Duration) -> Result<CpuStats, ProviderError> {
        self.cpu.ok_or(ProviderError::unavailable("CPU metrics"))
    }

    fn memory(&mut self) -> Result<MemoryStats, ProviderError> {
        self.memory.ok_or(ProviderError::unavailable("memory metrics"))
    }

    fn partitions(&mut self) -> Result<Vec<Partition>, ProviderError> {
        self.partitions
            .as_ref()
            .map(|entries| entries.iter().map(|(p, _)| p.clone()).collect())
            .ok_or(ProviderError::unavailable("partition list"))
    }

    fn volume_usage(&mut self, partition: &Partition) -> Result<VolumeUsage, ProviderError> {
        self.partitions
            .as_ref()
            .and_then(|entries| entries.iter().find(|(p, _)| p == partition))
            .and_then(|(_, usage)| *usage)
            .ok_or_else(|| ProviderError::query("volume usage", partition.mount_point.clone()))
    }

    fn hostname(&mut self) -> Result<String, ProviderError> {
        self.hostname
            .clone()
            .ok_or(ProviderError::unavailable("host name"))
    }

    fn ip_address(&mut self, _hostname: &str) -> Result<IpAddr, ProviderError> {
        self.ip_address
            .ok_or(ProviderError::unavailable("IP address"))
    }

    fn mac_address(&mut self) -> Result<MacAddress, ProviderError> {
        self.mac_address
            .ok_or(ProviderError::unavailable("MAC address"))
    }

    fn current_user(&mut self) -> Result<String, ProviderError> {
        self.current_user
            .clone()
            .ok_or(ProviderError::unavailable("current user"))
    }
}

/// The snapshot `FixedProvider::example()` collects to, with the boot time
/// pinned to 2026-01-01 08:00:00 local time and an uptime of 1 day, 2:03:04.
pub fn example_snapshot() -> SystemSnapshot {
    let boot_time = Local
        .with_ymd_and_hms(2026, 1, 1, 8, 0, 0)
        .earliest()
        .unwrap_or_else(Local::now);
    SystemSnapshot {
        os_name: "TestOS".to_string(),
        node_name: "host1".to_string(),
        release: "10".to_string(),
        version: "10.0.19045".to_string(),
        machine: "x86_64".to_string(),
        processor: Some("Test CPU @ 3.00GHz".to_string()),
        boot_time,
        uptime: Duration::from_secs(86_400 + 2 * 3_600 + 3 * 60 + 4),
        physical_cores: Some(4),
        logical_cores: 8,
        cpu_usage_percent: 37.0,
        memory_total: 16 * GIB,
        memory_available: 8 * GIB,
        memory_used: 8 * GIB,
        memory_percent: 50.0,
        disks: vec![VolumeInfo {
            device: "C:".to_string(),
            mount_point: "C:\\".to_string(),
            file_system: "ntfs".to_string(),
            total: 500 * GB,
            used: 250 * GB,
            free: 250 * GB,
            percent: 50.0,
        }],
        hostname: "host1".to_string(),
        ip_address: Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))),
        mac_address: Some(MacAddress([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])),
        current_user: Some("tester".to_string()),
    }
}
