// Condensed view derived from one snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::MetricSnapshot;

/// Serializes to lowercase JSON ("active" / "inactive").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    Active,
    Inactive,
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkStatus::Active => f.write_str("active"),
            NetworkStatus::Inactive => f.write_str("inactive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartitionUsage {
    pub used_gb: f64,
    pub total_gb: f64,
    pub percent_used: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSummary {
    pub timestamp: DateTime<Utc>,
    pub cpu_usage_percent: f64,
    pub memory_usage_percent: f64,
    pub available_memory_gb: f64,
    /// Keyed by mountpoint.
    pub disk_usage_summary: BTreeMap<String, PartitionUsage>,
    pub network_status: NetworkStatus,
}

impl SystemSummary {
    /// Project headline figures out of a snapshot. Empty domains yield zeros,
    /// an empty partition map and an inactive network.
    pub fn from_snapshot(snapshot: &MetricSnapshot) -> Self {
        let cpu_usage_percent = snapshot
            .cpu
            .collected()
            .map(|cpu| cpu.overall_percent)
            .unwrap_or(0.0);
        let (memory_usage_percent, available_memory_gb) = snapshot
            .memory
            .collected()
            .map(|m| (m.virtual_memory.percent_used, m.virtual_memory.available_gb))
            .unwrap_or((0.0, 0.0));

        let disk_usage_summary = snapshot
            .disk
            .collected()
            .map(|disk| {
                disk.partitions
                    .iter()
                    .map(|p| {
                        (
                            p.mountpoint.clone(),
                            PartitionUsage {
                                used_gb: p.used_gb,
                                total_gb: p.total_gb,
                                percent_used: p.percent_used,
                            },
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();

        let network_status = match snapshot.network.collected() {
            Some(net) if !net.interfaces.is_empty() => NetworkStatus::Active,
            _ => NetworkStatus::Inactive,
        };

        Self {
            timestamp: snapshot.timestamp,
            cpu_usage_percent,
            memory_usage_percent,
            available_memory_gb,
            disk_usage_summary,
            network_status,
        }
    }
}
