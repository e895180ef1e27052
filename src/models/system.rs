// CPU, memory and snapshot envelope models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DiskMetrics, DomainOutcome, NetworkMetrics};

/// Frequency triple in MHz, rounded to 2 decimals. All zero when the platform reports none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuFrequencyMhz {
    pub current_mhz: f64,
    pub min_mhz: f64,
    pub max_mhz: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuMetrics {
    pub timestamp: DateTime<Utc>,
    pub overall_percent: f64,
    /// Indexed by logical core.
    pub per_core_percent: Vec<f64>,
    pub logical_cores: usize,
    pub physical_cores: usize,
    pub frequency: CpuFrequencyMhz,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualMemoryGb {
    pub total_gb: f64,
    pub available_gb: f64,
    pub used_gb: f64,
    pub percent_used: f64,
    pub active_gb: f64,
    pub inactive_gb: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapMemoryGb {
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub percent_used: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub timestamp: DateTime<Utc>,
    pub virtual_memory: VirtualMemoryGb,
    pub swap_memory: SwapMemoryGb,
}

/// One collection of all four domains. The envelope timestamp is taken before any
/// collector runs; each domain record carries its own, later, timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub timestamp: DateTime<Utc>,
    pub cpu: DomainOutcome<CpuMetrics>,
    pub memory: DomainOutcome<MemoryMetrics>,
    pub disk: DomainOutcome<DiskMetrics>,
    pub network: DomainOutcome<NetworkMetrics>,
}

impl MetricSnapshot {
    /// Names of the domains that resolved to an empty record.
    pub fn failed_domains(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.cpu.is_collected() {
            failed.push("cpu");
        }
        if !self.memory.is_collected() {
            failed.push("memory");
        }
        if !self.disk.is_collected() {
            failed.push("disk");
        }
        if !self.network.is_collected() {
            failed.push("network");
        }
        failed
    }
}
