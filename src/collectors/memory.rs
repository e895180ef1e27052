// Memory collector: virtual memory and swap in binary gigabytes

use super::{CollectError, Domain, bytes_to_gb, provider_failure};
use crate::models::{MemoryMetrics, SwapMemoryGb, VirtualMemoryGb};
use crate::provider::MetricsProvider;
use chrono::Utc;
use tracing::debug;

pub fn collect_memory<P: MetricsProvider + ?Sized>(
    provider: &mut P,
) -> Result<MemoryMetrics, CollectError> {
    let failed = provider_failure(Domain::Memory);
    let vm = provider.virtual_memory().map_err(&failed)?;
    let swap = provider.swap_memory().map_err(&failed)?;

    let metrics = MemoryMetrics {
        timestamp: Utc::now(),
        virtual_memory: VirtualMemoryGb {
            total_gb: bytes_to_gb(vm.total),
            available_gb: bytes_to_gb(vm.available),
            used_gb: bytes_to_gb(vm.used),
            percent_used: vm.percent,
            active_gb: bytes_to_gb(vm.active),
            inactive_gb: bytes_to_gb(vm.inactive),
        },
        swap_memory: SwapMemoryGb {
            total_gb: bytes_to_gb(swap.total),
            used_gb: bytes_to_gb(swap.used),
            free_gb: bytes_to_gb(swap.free),
            percent_used: swap.percent,
        },
    };
    debug!(
        percent_used = metrics.virtual_memory.percent_used,
        "Memory metrics collected"
    );
    Ok(metrics)
}
