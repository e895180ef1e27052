// Disk partition and I/O models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionMetrics {
    pub device: String,
    pub mountpoint: String,
    pub fstype: String,
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub percent_used: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskIoStats {
    pub read_count: u64,
    pub write_count: u64,
    pub read_bytes_gb: f64,
    pub write_bytes_gb: f64,
    pub read_time_ms: u64,
    pub write_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskMetrics {
    pub timestamp: DateTime<Utc>,
    pub partitions: Vec<PartitionMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_stats: Option<DiskIoStats>,
}
