use pcinfo::present::{DEFAULT_REPORT_FILE, write_report};
use pcinfo::system::collector::{Collector, DEFAULT_CPU_SAMPLE};
use pcinfo::system::error::ReportError;
use pcinfo::system::fixed::FixedProvider;

fn collector(provider: FixedProvider) -> Collector {
    Collector::with_provider(Box::new(provider), DEFAULT_CPU_SAMPLE)
}

#[test]
fn example_host_exports_expected_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_REPORT_FILE);

    let mut collector = collector(FixedProvider::example());
    write_report(&path, collector.collect()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "System: TestOS");
    assert!(lines.contains(&"Physical Cores: 4"));
    assert!(lines.contains(&"Total Cores: 8"));
    assert!(lines.contains(&"Available Memory: 8.00 GB"));
    assert!(lines.contains(&"  File System: ntfs"));
    assert!(lines.contains(&"  Total Size: 465.66 GB"));
    assert!(lines.contains(&"Current User: tester"));

    let disk_header = lines.iter().position(|l| *l == "Disk Information:").unwrap();
    let hostname = lines.iter().position(|l| *l == "Hostname: host1").unwrap();
    assert_eq!(lines[disk_header - 1], "");
    assert!(disk_header < hostname);
}

#[test]
fn unavailable_metrics_export_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_REPORT_FILE);

    let mut provider = FixedProvider::example();
    provider.cpu = None;
    let mut collector = collector(provider);

    let err = write_report(&path, collector.collect()).unwrap_err();
    assert!(matches!(err, ReportError::Collection(_)));
    assert!(err.to_string().starts_with("CPU"));
    assert!(!path.exists());
}

#[test]
fn optional_fields_export_as_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_REPORT_FILE);

    let mut provider = FixedProvider::example();
    provider.ip_address = None;
    provider.mac_address = None;
    provider.current_user = None;
    let mut collector = collector(provider);
    write_report(&path, collector.collect()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("IP Address: Unknown\n"));
    assert!(text.contains("MAC Address: Unknown\n"));
    assert!(text.contains("Current User: Unknown\n"));
}
