// CPU collector: utilization, core counts, frequency

use super::{CollectError, Domain, provider_failure, round2};
use crate::models::{CpuFrequencyMhz, CpuMetrics};
use crate::provider::MetricsProvider;
use chrono::Utc;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// How many sampling windows a CPU collection spends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuSampling {
    /// One window for the overall figure, a second one for per-core figures.
    #[default]
    PerFigure,
    /// One window; both figures come from it.
    Shared,
}

pub fn collect_cpu<P: MetricsProvider + ?Sized>(
    provider: &mut P,
    interval: Duration,
    sampling: CpuSampling,
) -> Result<CpuMetrics, CollectError> {
    let failed = provider_failure(Domain::Cpu);

    let overall = provider.cpu_usage(interval).map_err(&failed)?;
    let counts = provider.cpu_counts().map_err(&failed)?;
    let frequency = provider
        .cpu_frequency()
        .map_err(&failed)?
        .map(|f| CpuFrequencyMhz {
            current_mhz: round2(f.current),
            min_mhz: round2(f.min),
            max_mhz: round2(f.max),
        })
        .unwrap_or_default();
    let per_core_percent = match sampling {
        CpuSampling::PerFigure => provider.cpu_usage(interval).map_err(&failed)?.per_core,
        CpuSampling::Shared => overall.per_core,
    };

    let metrics = CpuMetrics {
        timestamp: Utc::now(),
        overall_percent: overall.overall,
        per_core_percent,
        logical_cores: counts.logical,
        physical_cores: counts.physical,
        frequency,
    };
    debug!(overall_percent = metrics.overall_percent, "CPU metrics collected");
    Ok(metrics)
}
