use std::time::Duration;

use chrono::{DateTime, Local};

use super::error::{CollectionError, ProviderError};
use super::provider::SystemProvider;
use super::snapshot::{SystemSnapshot, VolumeInfo, percent_of};
use super::sysinfo_provider::SysinfoProvider;

pub const DEFAULT_CPU_SAMPLE: Duration = Duration::from_millis(1000);

pub struct Collector {
    provider: Box<dyn SystemProvider>,
    cpu_sample: Duration,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(DEFAULT_CPU_SAMPLE)
    }
}

impl Collector {
    pub fn new(cpu_sample: Duration) -> Self {
        Self::with_provider(Box::new(SysinfoProvider::new()), cpu_sample)
    }

    pub fn with_provider(provider: Box<dyn SystemProvider>, cpu_sample: Duration) -> Self {
        Collector {
            provider,
            cpu_sample,
        }
    }

    pub fn cpu_sample(&self) -> Duration {
        self.cpu_sample
    }

    /// Runs one full collection pass. Blocks for the CPU sample window.
    ///
    /// A volume whose usage cannot be read is left out. Processor, IP, MAC,
    /// user and physical core count are optional and come back as `None` on
    /// failure. Any other failure aborts the pass.
    pub fn collect(&mut self) -> Result<SystemSnapshot, CollectionError> {
        #[cfg(feature = "trace-log")]
        let _collect_span = tracing::debug_span!("collector.collect").entered();

        let os = self
            .provider
            .os_identity()
            .map_err(|e| CollectionError::new("OS identity", e))?;

        let boot_secs = self
            .provider
            .boot_time()
            .map_err(|e| CollectionError::new("boot time", e))?;
        let boot_time = local_time(boot_secs)?;
        let uptime = Local::now()
            .signed_duration_since(boot_time)
            .to_std()
            .unwrap_or(Duration::ZERO);

        let cpu = {
            #[cfg(feature = "trace-log")]
            let _cpu_span = tracing::debug_span!("collector.cpu").entered();
            self.provider
                .cpu(self.cpu_sample)
                .map_err(|e| CollectionError::new("CPU", e))?
        };

        let memory = self
            .provider
            .memory()
            .map_err(|e| CollectionError::new("memory", e))?;

        let disks = self.collect_volumes()?;

        let hostname = self
            .provider
            .hostname()
            .map_err(|e| CollectionError::new("host name", e))?;
        let ip_address = optional("IP address", self.provider.ip_address(&hostname));
        let mac_address = optional("MAC address", self.provider.mac_address())
            .filter(|mac| !mac.is_unspecified());
        let current_user = optional("current user", self.provider.current_user());

        Ok(SystemSnapshot {
            os_name: os.name,
            node_name: os.node_name,
            release: os.release,
            version: os.version,
            machine: os.machine,
            processor: os.processor.filter(|p| !p.trim().is_empty()),
            boot_time,
            uptime,
            physical_cores: cpu.physical_cores,
            logical_cores: cpu.logical_cores,
            cpu_usage_percent: clamp_percent(cpu.usage_percent),
            memory_total: memory.total,
            memory_available: memory.available,
            memory_used: memory.used,
            memory_percent: percent_of(
                memory.total.saturating_sub(memory.available),
                memory.total,
            ),
            disks,
            hostname,
            ip_address,
            mac_address,
            current_user,
        })
    }

    fn collect_volumes(&mut self) -> Result<Vec<VolumeInfo>, CollectionError> {
        #[cfg(feature = "trace-log")]
        let _disks_span = tracing::debug_span!("collector.volumes").entered();

        let partitions = self
            .provider
            .partitions()
            .map_err(|e| CollectionError::new("disk partitions", e))?;

        let mut volumes = Vec::with_capacity(partitions.len());
        for partition in partitions {
            let usage = match self.provider.volume_usage(&partition) {
                Ok(usage) => usage,
                Err(_err) => {
                    #[cfg(feature = "trace-log")]
                    tracing::debug!(
                        mount_point = %partition.mount_point,
                        error = %_err,
                        "skipping volume"
                    );
                    continue;
                }
            };
            volumes.push(VolumeInfo {
                device: partition.device,
                mount_point: partition.mount_point,
                file_system: partition.file_system,
                total: usage.total,
                used: usage.used,
                free: usage.free,
                percent: percent_of(usage.used, usage.used.saturating_add(usage.free)),
            });
        }
        Ok(volumes)
    }
}

fn local_time(unix_secs: u64) -> Result<DateTime<Local>, CollectionError> {
    i64::try_from(unix_secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| {
            CollectionError::new(
                "boot time",
                ProviderError::query("boot time", format!("{unix_secs} is out of range")),
            )
        })
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn optional<T>(_property: &'static str, result: Result<T, ProviderError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_err) => {
            #[cfg(feature = "trace-log")]
            tracing::debug!(property = _property, error = %_err, "optional property unavailable");
            None
        }
    }
}
