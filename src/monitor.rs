// Snapshot orchestration: run the collectors, keep history, project and export

use crate::collectors::{
    CollectError, CpuSampling, collect_cpu, collect_disk, collect_memory, collect_network,
};
use crate::export;
use crate::history::{HistoryCapacity, MetricsHistory};
use crate::models::{
    CpuMetrics, DiskMetrics, DomainOutcome, MemoryMetrics, MetricSnapshot, NetworkMetrics,
    SystemSummary,
};
use crate::provider::MetricsProvider;
use chrono::Utc;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Length of one CPU sampling window.
    pub sample_interval: Duration,
    pub cpu_sampling: CpuSampling,
    pub history_capacity: HistoryCapacity,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_interval: Duration::from_secs(1),
            cpu_sampling: CpuSampling::PerFigure,
            history_capacity: HistoryCapacity::Unbounded,
        }
    }
}

/// Owns the provider and the snapshot history. Single-threaded: every call
/// runs on the caller's thread and CPU collection blocks for the sampling window.
pub struct SystemMonitor<P: MetricsProvider> {
    provider: P,
    config: MonitorConfig,
    history: MetricsHistory,
}

/// Turn a collector result into a domain outcome, logging the failure.
fn resolve<T>(result: Result<T, CollectError>) -> DomainOutcome<T> {
    if let Err(e) = &result {
        error!(domain = %e.domain(), error = %e, "Domain collection failed");
    }
    result.into()
}

impl<P: MetricsProvider> SystemMonitor<P> {
    pub fn new(provider: P, config: MonitorConfig) -> Self {
        Self {
            provider,
            history: MetricsHistory::new(config.history_capacity),
            config,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn history(&self) -> &MetricsHistory {
        &self.history
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn get_cpu_metrics(&mut self) -> DomainOutcome<CpuMetrics> {
        resolve(collect_cpu(
            &mut self.provider,
            self.config.sample_interval,
            self.config.cpu_sampling,
        ))
    }

    pub fn get_memory_metrics(&mut self) -> DomainOutcome<MemoryMetrics> {
        resolve(collect_memory(&mut self.provider))
    }

    pub fn get_disk_metrics(&mut self) -> DomainOutcome<DiskMetrics> {
        resolve(collect_disk(&mut self.provider))
    }

    pub fn get_network_metrics(&mut self) -> DomainOutcome<NetworkMetrics> {
        resolve(collect_network(&mut self.provider))
    }

    /// Collect CPU, memory, disk and network in that order and append the result
    /// to history. Never fails; a domain that could not be read is `Failed`.
    #[instrument(skip(self), fields(operation = "collect_all_metrics"))]
    pub fn collect_all_metrics(&mut self) -> MetricSnapshot {
        let timestamp = Utc::now();
        let snapshot = MetricSnapshot {
            timestamp,
            cpu: self.get_cpu_metrics(),
            memory: self.get_memory_metrics(),
            disk: self.get_disk_metrics(),
            network: self.get_network_metrics(),
        };

        let failed = snapshot.failed_domains();
        if failed.is_empty() {
            info!("All system metrics collected successfully");
        } else {
            warn!(failed_domains = ?failed, "System metrics collected with empty domains");
        }

        if self.history.push(snapshot.clone()).is_some() {
            debug!(
                history_len = self.history.len(),
                "Oldest snapshot evicted from history"
            );
        }
        snapshot
    }

    /// Headline figures from a fresh collection (which is also appended to history).
    pub fn get_system_summary(&mut self) -> SystemSummary {
        let snapshot = self.collect_all_metrics();
        SystemSummary::from_snapshot(&snapshot)
    }

    /// Export the latest snapshot, collecting one first if history is empty.
    /// Returns the JSON text, or `{}` on failure.
    pub fn export_metrics_json(&mut self, path: Option<&Path>) -> String {
        if self.history.is_empty() {
            self.collect_all_metrics();
        }
        match self.history.latest() {
            Some(latest) => export::export_snapshot(latest, path),
            None => export::EMPTY_ENCODING.to_string(),
        }
    }
}
