// Snapshot models: one record per domain plus the envelope and summary view

mod network;
mod outcome;
mod storage;
mod summary;
mod system;

pub use network::{InterfaceMetrics, NetIoStats, NetworkMetrics};
pub use outcome::DomainOutcome;
pub use storage::{DiskIoStats, DiskMetrics, PartitionMetrics};
pub use summary::{NetworkStatus, PartitionUsage, SystemSummary};
pub use system::{
    CpuFrequencyMhz, CpuMetrics, MemoryMetrics, MetricSnapshot, SwapMemoryGb, VirtualMemoryGb,
};
