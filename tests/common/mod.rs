// Shared test helpers: scripted provider with switchable failures

#![allow(dead_code)]

use hostsnap::provider::*;
use std::collections::HashMap;
use std::time::Duration;

pub const GB: u64 = 1 << 30;

/// Which error a scripted call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Denied,
    Unsupported,
    Unavailable,
    Io,
}

impl Failure {
    fn to_error(self, what: &str) -> ProviderError {
        match self {
            Failure::Denied => ProviderError::PermissionDenied(what.into()),
            Failure::Unsupported => ProviderError::Unsupported(what.into()),
            Failure::Unavailable => ProviderError::Unavailable(what.into()),
            Failure::Io => ProviderError::Io(std::io::Error::other(what.to_string())),
        }
    }
}

fn scripted<T>(failure: Option<Failure>, what: &str, value: T) -> Result<T, ProviderError> {
    match failure {
        Some(f) => Err(f.to_error(what)),
        None => Ok(value),
    }
}

#[derive(Debug, Clone)]
pub struct FakeProvider {
    /// Returned by successive `cpu_usage` calls; the last entry repeats.
    pub usage_windows: Vec<CpuUsage>,
    pub counts: CpuCounts,
    pub frequency: Option<CpuFrequency>,
    pub virtual_memory: VirtualMemory,
    pub swap: SwapMemory,
    pub partitions: Vec<Partition>,
    pub usage: HashMap<String, DiskUsage>,
    /// Mountpoints whose usage query is answered with this failure.
    pub usage_failures: HashMap<String, Failure>,
    pub disk_io: Option<DiskIoCounters>,
    pub interfaces: Vec<InterfaceStats>,
    pub net_io: Option<NetIoCounters>,
    pub connections: Vec<Connection>,

    pub cpu_failure: Option<Failure>,
    pub memory_failure: Option<Failure>,
    pub partitions_failure: Option<Failure>,
    pub interfaces_failure: Option<Failure>,
    pub connections_failure: Option<Failure>,

    /// Sampling windows requested so far.
    pub sampled: Vec<Duration>,
}

impl FakeProvider {
    /// Two cores at 10% and 20% (overall 15%), 16 GB RAM with 8 GB available,
    /// one 100 GB root partition 40% used, one interface that is up.
    pub fn scenario() -> Self {
        let mut usage = HashMap::new();
        usage.insert(
            "/".to_string(),
            DiskUsage {
                total: 100 * GB,
                used: 40 * GB,
                free: 60 * GB,
                percent: 40.0,
            },
        );
        Self {
            usage_windows: vec![CpuUsage {
                overall: 15.0,
                per_core: vec![10.0, 20.0],
            }],
            counts: CpuCounts {
                logical: 2,
                physical: 1,
            },
            frequency: Some(CpuFrequency {
                current: 2399.999,
                min: 800.0,
                max: 3600.0,
            }),
            virtual_memory: VirtualMemory {
                total: 16 * GB,
                available: 8 * GB,
                used: 8 * GB,
                active: 6 * GB,
                inactive: 2 * GB,
                percent: 50.0,
            },
            swap: SwapMemory {
                total: 2 * GB,
                used: GB / 2,
                free: GB + GB / 2,
                percent: 25.0,
            },
            partitions: vec![Partition {
                device: "/dev/sda1".into(),
                mountpoint: "/".into(),
                fstype: "ext4".into(),
            }],
            usage,
            usage_failures: HashMap::new(),
            disk_io: Some(DiskIoCounters {
                read_count: 1_000,
                write_count: 500,
                read_bytes: 3 * GB,
                write_bytes: GB,
                read_time_ms: 1_200,
                write_time_ms: 800,
            }),
            interfaces: vec![InterfaceStats {
                name: "eth0".into(),
                is_up: true,
                speed: 1000,
                mtu: 1500,
                packets_sent: 10,
                packets_recv: 20,
                errin: 0,
                errout: 0,
                dropin: 1,
                dropout: 0,
            }],
            net_io: Some(NetIoCounters {
                bytes_sent: GB,
                bytes_recv: 2 * GB,
                packets_sent: 10,
                packets_recv: 20,
                errin: 0,
                errout: 0,
                dropin: 1,
                dropout: 0,
            }),
            connections: vec![
                Connection {
                    status: "ESTABLISHED".into(),
                },
                Connection {
                    status: "LISTEN".into(),
                },
                Connection {
                    status: "ESTABLISHED".into(),
                },
            ],
            cpu_failure: None,
            memory_failure: None,
            partitions_failure: None,
            interfaces_failure: None,
            connections_failure: None,
            sampled: Vec::new(),
        }
    }

    /// Add a mounted partition with the given usage in whole GB.
    pub fn with_partition(mut self, device: &str, mountpoint: &str, total: u64, used: u64) -> Self {
        self.partitions.push(Partition {
            device: device.into(),
            mountpoint: mountpoint.into(),
            fstype: "xfs".into(),
        });
        self.usage.insert(
            mountpoint.to_string(),
            DiskUsage {
                total: total * GB,
                used: used * GB,
                free: (total - used) * GB,
                percent: percent(used, total),
            },
        );
        self
    }
}

impl MetricsProvider for FakeProvider {
    fn cpu_usage(&mut self, interval: Duration) -> Result<CpuUsage, ProviderError> {
        let idx = self.sampled.len().min(self.usage_windows.len().saturating_sub(1));
        self.sampled.push(interval);
        let window = self.usage_windows.get(idx).cloned().unwrap_or(CpuUsage {
            overall: 0.0,
            per_core: vec![],
        });
        scripted(self.cpu_failure, "cpu usage", window)
    }

    fn cpu_counts(&self) -> Result<CpuCounts, ProviderError> {
        scripted(self.cpu_failure, "cpu counts", self.counts)
    }

    fn cpu_frequency(&mut self) -> Result<Option<CpuFrequency>, ProviderError> {
        scripted(self.cpu_failure, "cpu frequency", self.frequency)
    }

    fn virtual_memory(&mut self) -> Result<VirtualMemory, ProviderError> {
        scripted(self.memory_failure, "virtual memory", self.virtual_memory)
    }

    fn swap_memory(&mut self) -> Result<SwapMemory, ProviderError> {
        scripted(self.memory_failure, "swap memory", self.swap)
    }

    fn disk_partitions(&mut self) -> Result<Vec<Partition>, ProviderError> {
        scripted(self.partitions_failure, "partitions", self.partitions.clone())
    }

    fn disk_usage(&self, mountpoint: &str) -> Result<DiskUsage, ProviderError> {
        if let Some(failure) = self.usage_failures.get(mountpoint) {
            return Err(failure.to_error(mountpoint));
        }
        self.usage
            .get(mountpoint)
            .copied()
            .ok_or_else(|| ProviderError::Unavailable(mountpoint.to_string()))
    }

    fn disk_io_counters(&self) -> Result<Option<DiskIoCounters>, ProviderError> {
        Ok(self.disk_io)
    }

    fn net_if_stats(&mut self) -> Result<Vec<InterfaceStats>, ProviderError> {
        scripted(self.interfaces_failure, "interfaces", self.interfaces.clone())
    }

    fn net_io_counters(&mut self) -> Result<Option<NetIoCounters>, ProviderError> {
        scripted(self.interfaces_failure, "network io", self.net_io)
    }

    fn net_connections(&self) -> Result<Vec<Connection>, ProviderError> {
        scripted(self.connections_failure, "connections", self.connections.clone())
    }
}
