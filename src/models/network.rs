// Network interface, I/O and connection models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceMetrics {
    pub name: String,
    pub is_up: bool,
    /// 0 when the link speed is unknown.
    pub speed_mbps: u64,
    pub mtu: u32,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errors_in: u64,
    pub errors_out: u64,
    pub drops_in: u64,
    pub drops_out: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetIoStats {
    pub bytes_sent_gb: f64,
    pub bytes_recv_gb: f64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errors_in: u64,
    pub errors_out: u64,
    pub drops_in: u64,
    pub drops_out: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub timestamp: DateTime<Utc>,
    pub interfaces: Vec<InterfaceMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_stats: Option<NetIoStats>,
    /// Connection state name -> count. Empty when the connection table is not readable.
    pub connections_summary: BTreeMap<String, u64>,
}
