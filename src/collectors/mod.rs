// Per-domain collectors: provider counters -> normalized records
//
// Each collector either returns a complete record or a CollectError; there is
// no partially filled record. Item-level access failures (one partition, the
// connection table) are absorbed inside the collector and logged.

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;

pub use cpu::{CpuSampling, collect_cpu};
pub use disk::collect_disk;
pub use memory::collect_memory;
pub use network::collect_network;

use crate::provider::ProviderError;
use std::fmt;
use thiserror::Error;

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Cpu,
    Memory,
    Disk,
    Network,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Domain::Cpu => "cpu",
            Domain::Memory => "memory",
            Domain::Disk => "disk",
            Domain::Network => "network",
        })
    }
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("error collecting {domain} metrics: {source}")]
    Provider {
        domain: Domain,
        source: ProviderError,
    },
}

impl CollectError {
    pub fn domain(&self) -> Domain {
        match self {
            CollectError::Provider { domain, .. } => *domain,
        }
    }
}

/// Wrap provider failures for `domain`, for use with `map_err`.
pub(crate) fn provider_failure(domain: Domain) -> impl Fn(ProviderError) -> CollectError {
    move |source| CollectError::Provider { domain, source }
}

/// Round to exactly two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Binary gigabytes (2^30 bytes), rounded to two decimals.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_GB)
}
