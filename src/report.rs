// Console report for a system summary

use crate::models::SystemSummary;
use chrono::SecondsFormat;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Fixed-format report: rule, headline metrics, one line per partition, rule.
pub fn render(summary: &SystemSummary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "SYSTEM MONITORING SUMMARY");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "Timestamp: {}",
        summary.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    let _ = writeln!(out, "CPU Usage: {}%", summary.cpu_usage_percent);
    let _ = writeln!(out, "Memory Usage: {}%", summary.memory_usage_percent);
    let _ = writeln!(out, "Available Memory: {} GB", summary.available_memory_gb);
    let _ = writeln!(out, "Network Status: {}", summary.network_status);
    let _ = writeln!(out);
    let _ = writeln!(out, "Disk Usage by Partition:");
    for (mountpoint, usage) in &summary.disk_usage_summary {
        let _ = writeln!(
            out,
            "  {}: {} GB / {} GB ({}%)",
            mountpoint, usage.used_gb, usage.total_gb, usage.percent_used
        );
    }
    let _ = writeln!(out, "{}", rule);
    out
}
