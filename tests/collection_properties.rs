use std::collections::HashSet;

use pcinfo::present::{Entry, entries, render, serialize, volume_fields};
use pcinfo::system::collector::{Collector, DEFAULT_CPU_SAMPLE};
use pcinfo::system::fixed::FixedProvider;
use pcinfo::system::provider::{CpuStats, MemoryStats, Partition, VolumeUsage};
use pcinfo::system::snapshot::SystemSnapshot;
use proptest::prelude::*;

fn arb_usage() -> impl Strategy<Value = Option<VolumeUsage>> {
    proptest::option::weighted(
        0.8,
        (any::<u64>(), any::<u64>(), any::<u64>())
            .prop_map(|(total, used, free)| VolumeUsage { total, used, free }),
    )
}

fn arb_provider() -> impl Strategy<Value = FixedProvider> {
    (
        any::<f32>(),
        1usize..512,
        any::<u64>(),
        any::<u64>(),
        any::<u64>(),
        proptest::collection::vec(arb_usage(), 0..6),
    )
        .prop_map(|(usage, logical, total, available, used, volumes)| {
            let mut provider = FixedProvider::example();
            provider.cpu = Some(CpuStats {
                physical_cores: None,
                logical_cores: logical,
                usage_percent: usage,
            });
            provider.memory = Some(MemoryStats {
                total,
                available,
                used,
            });
            provider.partitions = Some(
                volumes
                    .into_iter()
                    .enumerate()
                    .map(|(i, usage)| {
                        // Distinct devices: C:, D:, ...
                        let device = format!("{}:", char::from(b'C' + i as u8));
                        let partition = Partition {
                            mount_point: format!("{device}\\"),
                            file_system: "ntfs".to_string(),
                            device,
                        };
                        (partition, usage)
                    })
                    .collect(),
            );
            provider
        })
}

/// Reads the volume blocks back out of a report: one `(field, value)` list
/// per blank-line-separated block under `Disk Information:`.
fn parse_disk_blocks(text: &str) -> Vec<Vec<(String, String)>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    let section = text
        .lines()
        .skip_while(|line| *line != "Disk Information:")
        .skip(1)
        .take_while(|line| line.is_empty() || line.starts_with("  "));
    for line in section {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some((field, value)) = line.trim_start_matches("  ").split_once(": ") {
            current.push((field.to_string(), value.to_string()));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn collect(provider: FixedProvider) -> SystemSnapshot {
    Collector::with_provider(Box::new(provider), DEFAULT_CPU_SAMPLE)
        .collect()
        .unwrap()
}

proptest! {
    #[test]
    fn percentages_stay_in_range(provider in arb_provider()) {
        let snapshot = collect(provider);
        prop_assert!((0.0..=100.0).contains(&snapshot.cpu_usage_percent));
        prop_assert!((0.0..=100.0).contains(&snapshot.memory_percent));
        for volume in &snapshot.disks {
            prop_assert!((0.0..=100.0).contains(&volume.percent));
        }
    }

    #[test]
    fn failed_volumes_are_the_only_ones_dropped(provider in arb_provider()) {
        let expected: Vec<String> = provider
            .partitions
            .iter()
            .flatten()
            .filter(|(_, usage)| usage.is_some())
            .map(|(p, _)| p.device.clone())
            .collect();
        let snapshot = collect(provider);
        let devices: Vec<String> = snapshot.disks.iter().map(|d| d.device.clone()).collect();
        prop_assert_eq!(devices, expected);
    }

    #[test]
    fn render_is_idempotent(provider in arb_provider()) {
        let snapshot = collect(provider);
        prop_assert_eq!(render(&snapshot), render(&snapshot));
    }

    #[test]
    fn serialized_report_reads_back(provider in arb_provider()) {
        let snapshot = collect(provider);
        let text = serialize(&snapshot);
        let lines: HashSet<&str> = text.lines().collect();

        for entry in entries(&snapshot) {
            match entry {
                Entry::Scalar(name, value) => {
                    let line = format!("{name}: {value}");
                    prop_assert!(lines.contains(line.as_str()), "missing {}", line);
                }
                Entry::Disks(volumes) => {
                    let expected: Vec<Vec<(String, String)>> = volumes
                        .iter()
                        .map(|volume| {
                            volume_fields(volume)
                                .into_iter()
                                .map(|(field, value)| (field.to_string(), value))
                                .collect()
                        })
                        .collect();
                    prop_assert_eq!(parse_disk_blocks(&text), expected);
                }
            }
        }
    }
}
