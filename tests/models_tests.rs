// Snapshot JSON shape: snake_case keys, empty domains as {}, optional blocks omitted

use chrono::Utc;
use hostsnap::models::*;
use std::collections::BTreeMap;

fn cpu() -> CpuMetrics {
    CpuMetrics {
        timestamp: Utc::now(),
        overall_percent: 12.5,
        per_core_percent: vec![10.0, 15.0],
        logical_cores: 2,
        physical_cores: 1,
        frequency: CpuFrequencyMhz::default(),
    }
}

fn network(interfaces: Vec<InterfaceMetrics>) -> NetworkMetrics {
    NetworkMetrics {
        timestamp: Utc::now(),
        interfaces,
        io_stats: None,
        connections_summary: BTreeMap::new(),
    }
}

#[test]
fn test_cpu_metrics_serialization_snake_case() {
    let json = serde_json::to_value(cpu()).unwrap();
    assert_eq!(json["overall_percent"], 12.5);
    assert_eq!(json["per_core_percent"], serde_json::json!([10.0, 15.0]));
    assert_eq!(json["logical_cores"], 2);
    assert_eq!(
        json["frequency"],
        serde_json::json!({"current_mhz": 0.0, "min_mhz": 0.0, "max_mhz": 0.0})
    );
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_snapshot_with_failed_domains() {
    let snapshot = MetricSnapshot {
        timestamp: Utc::now(),
        cpu: DomainOutcome::Collected(cpu()),
        memory: DomainOutcome::failed("virtual memory unavailable"),
        disk: DomainOutcome::failed("partitions unavailable"),
        network: DomainOutcome::Collected(network(vec![])),
    };
    assert_eq!(snapshot.failed_domains(), vec!["memory", "disk"]);

    let json = serde_json::to_value(&snapshot).unwrap();
    let keys: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for key in ["timestamp", "cpu", "memory", "disk", "network"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(json["memory"], serde_json::json!({}));
    assert_eq!(json["disk"], serde_json::json!({}));
    assert_eq!(json["network"]["connections_summary"], serde_json::json!({}));
    assert!(json["network"].get("io_stats").is_none());
}

#[test]
fn test_summary_from_snapshot_copies_partitions() {
    let partition = PartitionMetrics {
        device: "/dev/nvme0n1p2".into(),
        mountpoint: "/home".into(),
        fstype: "btrfs".into(),
        total_gb: 931.51,
        used_gb: 200.25,
        free_gb: 731.26,
        percent_used: 21.5,
    };
    let snapshot = MetricSnapshot {
        timestamp: Utc::now(),
        cpu: DomainOutcome::failed("cpu"),
        memory: DomainOutcome::failed("memory"),
        disk: DomainOutcome::Collected(DiskMetrics {
            timestamp: Utc::now(),
            partitions: vec![partition],
            io_stats: None,
        }),
        network: DomainOutcome::Collected(network(vec![InterfaceMetrics {
            name: "wlan0".into(),
            is_up: false,
            speed_mbps: 0,
            mtu: 1500,
            packets_sent: 0,
            packets_recv: 0,
            errors_in: 0,
            errors_out: 0,
            drops_in: 0,
            drops_out: 0,
        }])),
    };
    let summary = SystemSummary::from_snapshot(&snapshot);
    assert_eq!(summary.timestamp, snapshot.timestamp);
    assert_eq!(summary.cpu_usage_percent, 0.0);
    assert_eq!(
        summary.disk_usage_summary["/home"],
        PartitionUsage {
            used_gb: 200.25,
            total_gb: 931.51,
            percent_used: 21.5,
        }
    );
    // Any interface record counts, up or not.
    assert_eq!(summary.network_status, NetworkStatus::Active);
}

#[test]
fn test_network_status_lowercase() {
    assert_eq!(
        serde_json::to_string(&NetworkStatus::Inactive).unwrap(),
        "\"inactive\""
    );
    assert_eq!(NetworkStatus::Active.to_string(), "active");
}
