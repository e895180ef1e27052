use crate::collectors::CpuSampling;
use crate::export::DEFAULT_EXPORT_PATH;
use crate::history::HistoryCapacity;
use crate::monitor::MonitorConfig;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Used when `CONFIG_FILE` is not set; missing file means built-in defaults.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// Length of one CPU sampling window.
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
    #[serde(default)]
    pub cpu_sampling: CpuSampling,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
            cpu_sampling: CpuSampling::default(),
        }
    }
}

fn default_sample_interval_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryConfig {
    /// Absent means unbounded.
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_path")]
    pub path: String,
    #[serde(default = "default_export_enabled")]
    pub enabled: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
            enabled: default_export_enabled(),
        }
    }
}

fn default_export_path() -> String {
    DEFAULT_EXPORT_PATH.into()
}

fn default_export_enabled() -> bool {
    true
}

impl AgentConfig {
    /// `CONFIG_FILE` if set, else `config.toml` when present, else defaults.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_PATH)
            }
            Err(_) => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AgentConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.monitoring.sample_interval_ms > 0,
            "monitoring.sample_interval_ms must be > 0, got {}",
            self.monitoring.sample_interval_ms
        );
        if let Some(max) = self.history.max_entries {
            anyhow::ensure!(max > 0, "history.max_entries must be > 0 when set, got {}", max);
        }
        anyhow::ensure!(!self.export.path.is_empty(), "export.path must be non-empty");
        Ok(())
    }

    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            sample_interval: Duration::from_millis(self.monitoring.sample_interval_ms),
            cpu_sampling: self.monitoring.cpu_sampling,
            history_capacity: HistoryCapacity::from_max_entries(self.history.max_entries),
        }
    }
}
