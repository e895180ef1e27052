// Host provider backed by sysinfo, with Linux readers for the remaining fields

use super::linux;
use super::*;
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

pub struct SysinfoProvider {
    sys: System,
    disks: Disks,
    networks: Networks,
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();
        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl MetricsProvider for SysinfoProvider {
    #[instrument(skip(self), fields(provider = "sysinfo", operation = "cpu_usage"))]
    fn cpu_usage(&mut self, interval: Duration) -> Result<CpuUsage, ProviderError> {
        // Usage is a delta between two refreshes; the first one only sets the baseline.
        self.sys.refresh_cpu_usage();
        std::thread::sleep(interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        self.sys.refresh_cpu_usage();

        if self.sys.cpus().is_empty() {
            return Err(ProviderError::Unavailable("cpu usage".into()));
        }
        Ok(CpuUsage {
            overall: round1(self.sys.global_cpu_usage() as f64).clamp(0.0, 100.0),
            per_core: self
                .sys
                .cpus()
                .iter()
                .map(|c| round1(c.cpu_usage() as f64).clamp(0.0, 100.0))
                .collect(),
        })
    }

    fn cpu_counts(&self) -> Result<CpuCounts, ProviderError> {
        let logical = match self.sys.cpus().len() {
            0 => std::thread::available_parallelism()
                .map_err(|e| ProviderError::from_io("logical cpu count", e))?
                .get(),
            n => n,
        };
        Ok(CpuCounts {
            logical,
            physical: System::physical_core_count().unwrap_or(0),
        })
    }

    fn cpu_frequency(&mut self) -> Result<Option<CpuFrequency>, ProviderError> {
        self.sys.refresh_cpu_frequency();
        let freqs: Vec<u64> = self.sys.cpus().iter().map(|c| c.frequency()).collect();
        let current = if freqs.is_empty() {
            0.0
        } else {
            freqs.iter().sum::<u64>() as f64 / freqs.len() as f64
        };
        let limits = linux::read_cpu_freq_limits_mhz();
        if current == 0.0 && limits.is_none() {
            return Ok(None);
        }
        let (min, max) = limits.unwrap_or((0.0, 0.0));
        Ok(Some(CpuFrequency { current, min, max }))
    }

    fn virtual_memory(&mut self) -> Result<VirtualMemory, ProviderError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(ProviderError::Unavailable("virtual memory counters".into()));
        }
        let available = self.sys.available_memory();
        let (active, inactive) = linux::read_active_inactive().unwrap_or((0, 0));
        Ok(VirtualMemory {
            total,
            available,
            used: self.sys.used_memory(),
            active,
            inactive,
            percent: percent(total.saturating_sub(available), total),
        })
    }

    fn swap_memory(&mut self) -> Result<SwapMemory, ProviderError> {
        self.sys.refresh_memory();
        let total = self.sys.total_swap();
        let used = self.sys.used_swap();
        Ok(SwapMemory {
            total,
            used,
            free: self.sys.free_swap(),
            percent: percent(used, total),
        })
    }

    #[instrument(skip(self), fields(provider = "sysinfo", operation = "disk_partitions"))]
    fn disk_partitions(&mut self) -> Result<Vec<Partition>, ProviderError> {
        self.disks.refresh(true);
        Ok(self
            .disks
            .list()
            .iter()
            .map(|d| Partition {
                device: d.name().to_string_lossy().into_owned(),
                mountpoint: d.mount_point().to_string_lossy().into_owned(),
                fstype: d.file_system().to_string_lossy().into_owned(),
            })
            .collect())
    }

    #[cfg(unix)]
    fn disk_usage(&self, mountpoint: &str) -> Result<DiskUsage, ProviderError> {
        use nix::errno::Errno;

        let st = nix::sys::statvfs::statvfs(mountpoint).map_err(|errno| match errno {
            Errno::EACCES | Errno::EPERM => {
                ProviderError::PermissionDenied(mountpoint.to_string())
            }
            other => ProviderError::Io(std::io::Error::from(other)),
        })?;
        let frsize = st.fragment_size() as u64;
        let total = st.blocks() as u64 * frsize;
        let free = st.blocks_available() as u64 * frsize;
        let used = (st.blocks() as u64).saturating_sub(st.blocks_free() as u64) * frsize;
        // Reserved blocks belong to neither side of the ratio.
        Ok(DiskUsage {
            total,
            used,
            free,
            percent: percent(used, used + free),
        })
    }

    #[cfg(not(unix))]
    fn disk_usage(&self, mountpoint: &str) -> Result<DiskUsage, ProviderError> {
        let disk = self
            .disks
            .list()
            .iter()
            .find(|d| d.mount_point().to_string_lossy() == mountpoint)
            .ok_or_else(|| ProviderError::Unavailable(format!("usage of {}", mountpoint)))?;
        let total = disk.total_space();
        let free = disk.available_space();
        let used = total.saturating_sub(free);
        Ok(DiskUsage {
            total,
            used,
            free,
            percent: percent(used, total),
        })
    }

    fn disk_io_counters(&self) -> Result<Option<DiskIoCounters>, ProviderError> {
        linux::read_disk_io_counters()
    }

    #[instrument(skip(self), fields(provider = "sysinfo", operation = "net_if_stats"))]
    fn net_if_stats(&mut self) -> Result<Vec<InterfaceStats>, ProviderError> {
        self.networks.refresh(true);
        let mut entries: Vec<_> = self.networks.list().iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        Ok(entries
            .into_iter()
            .map(|(name, data)| InterfaceStats {
                name: name.clone(),
                is_up: linux::interface_is_up(name).unwrap_or(true),
                speed: linux::get_interface_speed_mbps(name),
                mtu: linux::read_interface_attr(name, "mtu")
                    .and_then(|v| u32::try_from(v).ok())
                    .unwrap_or(0),
                packets_sent: data.total_packets_transmitted(),
                packets_recv: data.total_packets_received(),
                errin: data.total_errors_on_received(),
                errout: data.total_errors_on_transmitted(),
                dropin: linux::interface_statistic(name, "rx_dropped").unwrap_or(0),
                dropout: linux::interface_statistic(name, "tx_dropped").unwrap_or(0),
            })
            .collect())
    }

    fn net_io_counters(&mut self) -> Result<Option<NetIoCounters>, ProviderError> {
        self.networks.refresh(true);
        if self.networks.list().is_empty() {
            return Ok(None);
        }
        let mut total = NetIoCounters::default();
        for (name, data) in self.networks.list() {
            total.bytes_sent += data.total_transmitted();
            total.bytes_recv += data.total_received();
            total.packets_sent += data.total_packets_transmitted();
            total.packets_recv += data.total_packets_received();
            total.errin += data.total_errors_on_received();
            total.errout += data.total_errors_on_transmitted();
            total.dropin += linux::interface_statistic(name, "rx_dropped").unwrap_or(0);
            total.dropout += linux::interface_statistic(name, "tx_dropped").unwrap_or(0);
        }
        Ok(Some(total))
    }

    fn net_connections(&self) -> Result<Vec<Connection>, ProviderError> {
        linux::read_connections()
    }
}
