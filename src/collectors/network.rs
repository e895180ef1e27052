// Network collector: interfaces, aggregate I/O, connection states

use super::{CollectError, Domain, bytes_to_gb, provider_failure};
use crate::models::{InterfaceMetrics, NetIoStats, NetworkMetrics};
use crate::provider::{MetricsProvider, ProviderError};
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub fn collect_network<P: MetricsProvider + ?Sized>(
    provider: &mut P,
) -> Result<NetworkMetrics, CollectError> {
    let failed = provider_failure(Domain::Network);

    let interfaces: Vec<InterfaceMetrics> = provider
        .net_if_stats()
        .map_err(&failed)?
        .into_iter()
        .map(|s| InterfaceMetrics {
            name: s.name,
            is_up: s.is_up,
            speed_mbps: s.speed,
            mtu: s.mtu,
            packets_sent: s.packets_sent,
            packets_recv: s.packets_recv,
            errors_in: s.errin,
            errors_out: s.errout,
            drops_in: s.dropin,
            drops_out: s.dropout,
        })
        .collect();

    let io_stats = provider
        .net_io_counters()
        .map_err(&failed)?
        .map(|io| NetIoStats {
            bytes_sent_gb: bytes_to_gb(io.bytes_sent),
            bytes_recv_gb: bytes_to_gb(io.bytes_recv),
            packets_sent: io.packets_sent,
            packets_recv: io.packets_recv,
            errors_in: io.errin,
            errors_out: io.errout,
            drops_in: io.dropin,
            drops_out: io.dropout,
        });

    let mut connections_summary = BTreeMap::new();
    match provider.net_connections() {
        Ok(connections) => {
            for conn in connections {
                *connections_summary.entry(conn.status).or_insert(0) += 1;
            }
        }
        Err(ProviderError::PermissionDenied(_)) => {
            warn!("Permission denied accessing connection statistics");
        }
        Err(ProviderError::Unsupported(what)) => {
            debug!(%what, "Connection statistics not supported, leaving summary empty");
        }
        Err(e) => return Err(failed(e)),
    }

    debug!(interfaces = interfaces.len(), "Network metrics collected");
    Ok(NetworkMetrics {
        timestamp: Utc::now(),
        interfaces,
        io_stats,
        connections_summary,
    })
}
