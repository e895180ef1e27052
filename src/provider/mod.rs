// OS metrics provider: raw per-domain counters, before unit conversion

mod linux;
mod system;

pub use system::SysinfoProvider;

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} unavailable")]
    Unavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0} not supported on this platform")]
    Unsupported(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProviderError {
    /// Classify an I/O error, keeping access failures distinct from everything else.
    pub fn from_io(context: &str, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ProviderError::PermissionDenied(context.to_string())
        } else {
            ProviderError::Io(e)
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ProviderError::PermissionDenied(_))
    }
}

/// Utilization over one sampling window, percent with one decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuUsage {
    pub overall: f64,
    pub per_core: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuCounts {
    pub logical: usize,
    /// 0 when the platform does not report it.
    pub physical: usize,
}

/// MHz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuFrequency {
    pub current: f64,
    pub min: f64,
    pub max: f64,
}

/// Byte counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualMemory {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub active: u64,
    pub inactive: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMemory {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub device: String,
    pub mountpoint: String,
    pub fstype: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskIoCounters {
    pub read_count: u64,
    pub write_count: u64,
    pub read_bytes: u64,
    pub write_bytes: u64,
    pub read_time_ms: u64,
    pub write_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceStats {
    pub name: String,
    pub is_up: bool,
    /// Mbps, 0 when unknown.
    pub speed: u64,
    pub mtu: u32,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errin: u64,
    pub errout: u64,
    pub dropin: u64,
    pub dropout: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetIoCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub errin: u64,
    pub errout: u64,
    pub dropin: u64,
    pub dropout: u64,
}

/// One socket; only its state is of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub status: String,
}

/// Source of raw host figures. Calls that sample or refresh cached state take `&mut self`.
pub trait MetricsProvider {
    /// Blocks the calling thread for one sampling window of at least `interval`.
    fn cpu_usage(&mut self, interval: Duration) -> Result<CpuUsage, ProviderError>;

    fn cpu_counts(&self) -> Result<CpuCounts, ProviderError>;

    /// `None` when the platform exposes no frequency information.
    fn cpu_frequency(&mut self) -> Result<Option<CpuFrequency>, ProviderError>;

    fn virtual_memory(&mut self) -> Result<VirtualMemory, ProviderError>;

    fn swap_memory(&mut self) -> Result<SwapMemory, ProviderError>;

    fn disk_partitions(&mut self) -> Result<Vec<Partition>, ProviderError>;

    fn disk_usage(&self, mountpoint: &str) -> Result<DiskUsage, ProviderError>;

    fn disk_io_counters(&self) -> Result<Option<DiskIoCounters>, ProviderError>;

    fn net_if_stats(&mut self) -> Result<Vec<InterfaceStats>, ProviderError>;

    fn net_io_counters(&mut self) -> Result<Option<NetIoCounters>, ProviderError>;

    fn net_connections(&self) -> Result<Vec<Connection>, ProviderError>;
}

/// Percent with one decimal, 0 for an empty denominator.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    ((part as f64 / whole as f64) * 1000.0).round() / 10.0
}
