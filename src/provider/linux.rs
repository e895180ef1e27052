// Linux-specific readers: /proc and /sys fields sysinfo does not expose.
// Parsers take file contents so they stay testable on any host.

#![cfg_attr(not(target_os = "linux"), allow(dead_code))]

use super::{Connection, DiskIoCounters, ProviderError};

const SECTOR_SIZE: u64 = 512;

/// (Active, Inactive) in bytes from /proc/meminfo.
pub(super) fn read_active_inactive() -> Option<(u64, u64)> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/meminfo").ok()?;
        parse_meminfo_active_inactive(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

pub(super) fn parse_meminfo_active_inactive(content: &str) -> Option<(u64, u64)> {
    let mut active = None;
    let mut inactive = None;
    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let kb = rest
            .trim()
            .trim_end_matches("kB")
            .trim()
            .parse::<u64>()
            .ok();
        match key {
            "Active" => active = kb,
            "Inactive" => inactive = kb,
            _ => {}
        }
    }
    Some((active? * 1024, inactive? * 1024))
}

/// (min, max) frequency in MHz from cpufreq of the first core.
pub(super) fn read_cpu_freq_limits_mhz() -> Option<(f64, f64)> {
    #[cfg(target_os = "linux")]
    {
        let base = "/sys/devices/system/cpu/cpu0/cpufreq";
        let read_khz = |file: &str| -> Option<f64> {
            std::fs::read_to_string(format!("{}/{}", base, file))
                .ok()?
                .trim()
                .parse::<f64>()
                .ok()
        };
        let min = read_khz("cpuinfo_min_freq")?;
        let max = read_khz("cpuinfo_max_freq")?;
        Some((min / 1000.0, max / 1000.0))
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Aggregate counters over whole block devices listed in /proc/diskstats.
pub(super) fn read_disk_io_counters() -> Result<Option<DiskIoCounters>, ProviderError> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/diskstats")
            .map_err(|e| ProviderError::from_io("/proc/diskstats", e))?;
        Ok(parse_diskstats(&content, |name| {
            std::path::Path::new("/sys/block").join(name).exists()
        }))
    }
    #[cfg(not(target_os = "linux"))]
    Ok(None)
}

/// Sums the devices accepted by `is_whole_disk`; partitions would double count.
/// `None` when no device qualifies.
pub(super) fn parse_diskstats(
    content: &str,
    is_whole_disk: impl Fn(&str) -> bool,
) -> Option<DiskIoCounters> {
    let mut total = DiskIoCounters::default();
    let mut seen = false;
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 11 {
            continue;
        }
        let name = fields[2];
        if !is_whole_disk(name) {
            continue;
        }
        let num = |i: usize| fields[i].parse::<u64>().unwrap_or(0);
        total.read_count += num(3);
        total.read_bytes += num(5) * SECTOR_SIZE;
        total.read_time_ms += num(6);
        total.write_count += num(7);
        total.write_bytes += num(9) * SECTOR_SIZE;
        total.write_time_ms += num(10);
        seen = true;
    }
    seen.then_some(total)
}

/// Read a numeric attribute from /sys/class/net/<interface>/<attr>.
pub(super) fn read_interface_attr(interface_name: &str, attr: &str) -> Option<i64> {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/{}", interface_name, attr);
        let content = std::fs::read_to_string(&path).ok()?;
        let content = content.trim();
        match content.strip_prefix("0x") {
            Some(hex) => i64::from_str_radix(hex, 16).ok(),
            None => content.parse::<i64>().ok(),
        }
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Link speed in Mbps, 0 if unavailable (virtual interfaces report -1).
pub(super) fn get_interface_speed_mbps(interface_name: &str) -> u64 {
    match read_interface_attr(interface_name, "speed") {
        Some(mbps) if mbps > 0 => mbps as u64,
        _ => 0,
    }
}

/// IFF_UP from the interface flags.
pub(super) fn interface_is_up(interface_name: &str) -> Option<bool> {
    read_interface_attr(interface_name, "flags").map(|flags| flags & 0x1 != 0)
}

/// Statistic counter from /sys/class/net/<interface>/statistics.
pub(super) fn interface_statistic(interface_name: &str, counter: &str) -> Option<u64> {
    read_interface_attr(interface_name, &format!("statistics/{}", counter))
        .and_then(|v| u64::try_from(v).ok())
}

/// Sockets from /proc/net/{tcp,tcp6,udp,udp6}. Missing tables (no IPv6) are skipped.
pub(super) fn read_connections() -> Result<Vec<Connection>, ProviderError> {
    #[cfg(target_os = "linux")]
    {
        let mut out = Vec::new();
        for (table, is_udp) in [("tcp", false), ("tcp6", false), ("udp", true), ("udp6", true)] {
            let path = format!("/proc/net/{}", table);
            match std::fs::read_to_string(&path) {
                Ok(content) => out.extend(parse_proc_net(&content, is_udp)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ProviderError::from_io(&path, e)),
            }
        }
        Ok(out)
    }
    #[cfg(not(target_os = "linux"))]
    Err(ProviderError::Unsupported("connection table".into()))
}

pub(super) fn parse_proc_net(content: &str, is_udp: bool) -> Vec<Connection> {
    content
        .lines()
        .skip(1)
        .filter_map(|line| {
            let state = line.split_whitespace().nth(3)?;
            let status = if is_udp {
                "NONE".to_string()
            } else {
                tcp_state_name(state).to_string()
            };
            Some(Connection { status })
        })
        .collect()
}

fn tcp_state_name(hex: &str) -> &'static str {
    match u8::from_str_radix(hex, 16).unwrap_or(0) {
        0x01 => "ESTABLISHED",
        0x02 => "SYN_SENT",
        0x03 => "SYN_RECV",
        0x04 => "FIN_WAIT1",
        0x05 => "FIN_WAIT2",
        0x06 => "TIME_WAIT",
        0x07 => "CLOSE",
        0x08 => "CLOSE_WAIT",
        0x09 => "LAST_ACK",
        0x0A => "LISTEN",
        0x0B => "CLOSING",
        _ => "NONE",
    }
}
