use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

use super::error::ProviderError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OsIdentity {
    pub name: String,
    pub node_name: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    pub processor: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CpuStats {
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    pub usage_percent: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryStats {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

/// A mounted partition as enumerated, before its usage is queried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    pub device: String,
    pub mount_point: String,
    pub file_system: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VolumeUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub fn is_unspecified(&self) -> bool {
        self.0 == [0; 6]
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Read-only view of the host the collector queries. Each call reads live
/// state; implementations must not cache between calls.
pub trait SystemProvider {
    fn os_identity(&mut self) -> Result<OsIdentity, ProviderError>;

    /// Boot time in seconds since the Unix epoch.
    fn boot_time(&mut self) -> Result<u64, ProviderError>;

    /// Blocks for `sample` to measure utilization.
    fn cpu(&mut self, sample: Duration) -> Result<CpuStats, ProviderError>;

    fn memory(&mut self) -> Result<MemoryStats, ProviderError>;

    fn partitions(&mut self) -> Result<Vec<Partition>, ProviderError>;

    fn volume_usage(&mut self, partition: &Partition) -> Result<VolumeUsage, ProviderError>;

    fn hostname(&mut self) -> Result<String, ProviderError>;

    fn ip_address(&mut self, hostname: &str) -> Result<IpAddr, ProviderError>;

    fn mac_address(&mut self) -> Result<MacAddress, ProviderError>;

    fn current_user(&mut self) -> Result<String, ProviderError>;
}
