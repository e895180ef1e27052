// Live smoke test against the host provider

use hostsnap::collectors::CpuSampling;
use hostsnap::history::HistoryCapacity;
use hostsnap::monitor::{MonitorConfig, SystemMonitor};
use hostsnap::provider::{MetricsProvider, SysinfoProvider};
use std::time::Duration;

const TOLERANCE_GB: f64 = 0.02;

fn live_monitor() -> SystemMonitor<SysinfoProvider> {
    SystemMonitor::new(
        SysinfoProvider::new(),
        MonitorConfig {
            sample_interval: Duration::from_millis(10),
            cpu_sampling: CpuSampling::Shared,
            history_capacity: HistoryCapacity::Unbounded,
        },
    )
}

#[test]
fn live_snapshot_memory_is_consistent() {
    let mut m = live_monitor();
    let snapshot = m.collect_all_metrics();
    let mem = snapshot.memory.collected().expect("memory domain");
    let vm = mem.virtual_memory;
    assert!(vm.total_gb > 0.0);
    assert!(vm.used_gb >= 0.0 && vm.available_gb >= 0.0);
    assert!(vm.used_gb <= vm.total_gb + TOLERANCE_GB);
    assert!((0.0..=100.0).contains(&vm.percent_used));
}

#[test]
fn live_snapshot_cpu_is_in_range() {
    let mut m = live_monitor();
    let snapshot = m.collect_all_metrics();
    let cpu = snapshot.cpu.collected().expect("cpu domain");
    assert!((0.0..=100.0).contains(&cpu.overall_percent));
    assert_eq!(cpu.per_core_percent.len(), cpu.logical_cores);
    assert!(cpu.per_core_percent.iter().all(|p| (0.0..=100.0).contains(p)));
}

#[test]
fn live_partitions_used_plus_free_within_total() {
    let mut m = live_monitor();
    let snapshot = m.collect_all_metrics();
    if let Some(disk) = snapshot.disk.collected() {
        for p in &disk.partitions {
            assert!(p.used_gb >= 0.0 && p.free_gb >= 0.0, "{}", p.mountpoint);
            assert!(
                p.used_gb + p.free_gb <= p.total_gb + TOLERANCE_GB,
                "{}: {} + {} > {}",
                p.mountpoint,
                p.used_gb,
                p.free_gb,
                p.total_gb
            );
        }
    }
}

#[test]
fn live_provider_reports_at_least_one_logical_core() {
    let provider = SysinfoProvider::new();
    assert!(provider.cpu_counts().unwrap().logical >= 1);
}
