// Disk collector: per-partition usage and aggregate I/O

use super::{CollectError, Domain, bytes_to_gb, provider_failure};
use crate::models::{DiskIoStats, DiskMetrics, PartitionMetrics};
use crate::provider::{MetricsProvider, ProviderError};
use chrono::Utc;
use tracing::{debug, warn};

/// A partition whose usage cannot be read for access reasons is left out;
/// any other provider failure fails the whole domain.
pub fn collect_disk<P: MetricsProvider + ?Sized>(
    provider: &mut P,
) -> Result<DiskMetrics, CollectError> {
    let failed = provider_failure(Domain::Disk);
    let mounted = provider.disk_partitions().map_err(&failed)?;

    let mut partitions = Vec::with_capacity(mounted.len());
    for partition in mounted {
        let usage = match provider.disk_usage(&partition.mountpoint) {
            Ok(usage) => usage,
            Err(ProviderError::PermissionDenied(_)) => {
                warn!(
                    mountpoint = %partition.mountpoint,
                    "Permission denied accessing partition, skipping"
                );
                continue;
            }
            Err(e) => return Err(failed(e)),
        };
        partitions.push(PartitionMetrics {
            device: partition.device,
            mountpoint: partition.mountpoint,
            fstype: partition.fstype,
            total_gb: bytes_to_gb(usage.total),
            used_gb: bytes_to_gb(usage.used),
            free_gb: bytes_to_gb(usage.free),
            percent_used: usage.percent,
        });
    }

    let io_stats = provider
        .disk_io_counters()
        .map_err(&failed)?
        .map(|io| DiskIoStats {
            read_count: io.read_count,
            write_count: io.write_count,
            read_bytes_gb: bytes_to_gb(io.read_bytes),
            write_bytes_gb: bytes_to_gb(io.write_bytes),
            read_time_ms: io.read_time_ms,
            write_time_ms: io.write_time_ms,
        });

    debug!(partitions = partitions.len(), "Disk metrics collected");
    Ok(DiskMetrics {
        timestamp: Utc::now(),
        partitions,
        io_stats,
    })
}
