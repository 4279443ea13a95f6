use std::net::{IpAddr, ToSocketAddrs};
use std::time::Duration;

use sysinfo::{
    Disks, MINIMUM_CPU_UPDATE_INTERVAL, Networks, ProcessRefreshKind, ProcessesToUpdate, System,
    UpdateKind, Users,
};

use super::error::ProviderError;
use super::platform;
use super::provider::{
    CpuStats, MacAddress, MemoryStats, OsIdentity, Partition, SystemProvider, VolumeUsage,
};

/// Live provider backed by `sysinfo`, with std name resolution for the IP
/// address and the platform module for the processor description.
pub struct SysinfoProvider {
    sys: System,
    disks: Disks,
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoProvider {
    pub fn new() -> Self {
        SysinfoProvider {
            sys: System::new(),
            disks: Disks::new(),
        }
    }
}

impl SystemProvider for SysinfoProvider {
    fn os_identity(&mut self) -> Result<OsIdentity, ProviderError> {
        let name = System::name().ok_or(ProviderError::unavailable("OS name"))?;
        let node_name = System::host_name().unwrap_or_default();
        let release = System::kernel_version().unwrap_or_default();
        let version = System::long_os_version()
            .or_else(System::os_version)
            .unwrap_or_default();
        let machine = System::cpu_arch();

        let processor = platform::processor_description().or_else(|| {
            self.sys.refresh_cpu_usage();
            self.sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().trim().to_string())
                .filter(|brand| !brand.is_empty())
        });

        Ok(OsIdentity {
            name,
            node_name,
            release,
            version,
            machine,
            processor,
        })
    }

    fn boot_time(&mut self) -> Result<u64, ProviderError> {
        match System::boot_time() {
            0 => Err(ProviderError::unavailable("boot time")),
            secs => Ok(secs),
        }
    }

    fn cpu(&mut self, sample: Duration) -> Result<CpuStats, ProviderError> {
        // Usage is a delta between two refreshes.
        self.sys.refresh_cpu_usage();
        std::thread::sleep(sample.max(MINIMUM_CPU_UPDATE_INTERVAL));
        self.sys.refresh_cpu_usage();

        let logical_cores = self.sys.cpus().len();
        if logical_cores == 0 {
            return Err(ProviderError::unavailable("CPU metrics"));
        }

        Ok(CpuStats {
            physical_cores: System::physical_core_count(),
            logical_cores,
            usage_percent: self.sys.global_cpu_usage(),
        })
    }

    fn memory(&mut self) -> Result<MemoryStats, ProviderError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(ProviderError::unavailable("memory metrics"));
        }
        Ok(MemoryStats {
            total,
            available: self.sys.available_memory(),
            used: self.sys.used_memory(),
        })
    }

    fn partitions(&mut self) -> Result<Vec<Partition>, ProviderError> {
        self.disks = Disks::new_with_refreshed_list();
        Ok(self
            .disks
            .list()
            .iter()
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().into_owned(),
                mount_point: disk.mount_point().to_string_lossy().into_owned(),
                file_system: disk.file_system().to_string_lossy().into_owned(),
            })
            .collect())
    }

    fn volume_usage(&mut self, partition: &Partition) -> Result<VolumeUsage, ProviderError> {
        let disk = self
            .disks
            .list()
            .iter()
            .find(|disk| disk.mount_point().to_string_lossy() == partition.mount_point.as_str())
            .ok_or_else(|| {
                ProviderError::query("volume usage", format!("{} vanished", partition.mount_point))
            })?;

        Ok(usage_from_space(disk.total_space(), disk.available_space()))
    }

    fn hostname(&mut self) -> Result<String, ProviderError> {
        System::host_name().ok_or(ProviderError::unavailable("host name"))
    }

    fn ip_address(&mut self, hostname: &str) -> Result<IpAddr, ProviderError> {
        let resolved = (hostname, 0)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.find(|addr| addr.is_ipv4()))
            .map(|addr| addr.ip());
        if let Some(ip) = resolved {
            return Ok(ip);
        }

        // Hosts without a resolvable name still have interface addresses.
        let networks = Networks::new_with_refreshed_list();
        let mut names: Vec<&String> = networks.keys().collect();
        names.sort();
        names
            .into_iter()
            .filter_map(|name| networks.get(name))
            .flat_map(|data| data.ip_networks().iter().map(|net| net.addr))
            .find(|ip| ip.is_ipv4() && !ip.is_loopback())
            .ok_or_else(|| ProviderError::query("IP address", format!("cannot resolve {hostname}")))
    }

    fn mac_address(&mut self) -> Result<MacAddress, ProviderError> {
        let networks = Networks::new_with_refreshed_list();
        let mut candidates: Vec<(bool, &String, MacAddress)> = networks
            .iter()
            .map(|(name, data)| {
                let has_ip = data.ip_networks().iter().any(|net| !net.addr.is_loopback());
                (has_ip, name, MacAddress(data.mac_address().0))
            })
            .filter(|(_, _, mac)| !mac.is_unspecified())
            .collect();
        // Interfaces carrying an address first, then by name.
        candidates.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        candidates
            .first()
            .map(|(_, _, mac)| *mac)
            .ok_or(ProviderError::unavailable("MAC address"))
    }

    fn current_user(&mut self) -> Result<String, ProviderError> {
        let from_process = sysinfo::get_current_pid().ok().and_then(|pid| {
            self.sys.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                false,
                ProcessRefreshKind::nothing().with_user(UpdateKind::OnlyIfNotSet),
            );
            let uid = self.sys.process(pid)?.user_id()?.clone();
            let users = Users::new_with_refreshed_list();
            users.get_user_by_id(&uid).map(|user| user.name().to_string())
        });

        from_process
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .filter(|name| !name.is_empty())
            .ok_or(ProviderError::unavailable("current user"))
    }
}

/// Free space is what the current user may still write; everything else
/// counts as used. Zero-capacity volumes come out as all zeros.
fn usage_from_space(total: u64, available: u64) -> VolumeUsage {
    let free = available.min(total);
    VolumeUsage {
        total,
        used: total - free,
        free,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_queries_do_not_panic() {
        let mut provider = SysinfoProvider::new();
        let _ = provider.os_identity();
        let _ = provider.boot_time();
        let _ = provider.memory();
        let _ = provider.hostname();
        let _ = provider.mac_address();
        let _ = provider.current_user();
    }

    #[test]
    fn listed_partitions_resolve_their_usage() {
        let mut provider = SysinfoProvider::new();
        let partitions = provider.partitions().unwrap();
        for partition in &partitions {
            assert!(
                provider.volume_usage(partition).is_ok(),
                "{} was listed but its usage did not resolve",
                partition.mount_point
            );
        }
    }

    #[test]
    fn zero_capacity_volume_is_kept_with_zero_usage() {
        assert_eq!(usage_from_space(0, 0), VolumeUsage::default());
        assert_eq!(usage_from_space(0, 4096), VolumeUsage::default());
    }

    #[test]
    fn available_space_beyond_capacity_is_capped() {
        let usage = usage_from_space(1_000, 250);
        assert_eq!((usage.used, usage.free), (750, 250));
        let usage = usage_from_space(1_000, 5_000);
        assert_eq!((usage.used, usage.free), (0, 1_000));
    }

    #[test]
    fn unknown_mount_point_is_a_query_error() {
        let mut provider = SysinfoProvider::new();
        let _ = provider.partitions();
        let missing = Partition {
            device: "none".to_string(),
            mount_point: "/definitely/not/mounted/here".to_string(),
            file_system: "none".to_string(),
        };
        assert!(matches!(
            provider.volume_usage(&missing),
            Err(ProviderError::Query { .. })
        ));
    }
}
