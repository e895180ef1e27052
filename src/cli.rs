// Command-line overrides on top of the config file

use crate::config::AgentConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hostsnap", version, about = "Take one snapshot of host CPU, memory, disk and network state")]
pub struct Cli {
    /// Config file (overrides CONFIG_FILE)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the snapshot JSON here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CPU sampling window in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Skip writing the snapshot file
    #[arg(long)]
    pub no_export: bool,

    /// Print the snapshot JSON instead of the summary report
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<AgentConfig> {
        let mut config = match &self.config {
            Some(path) => AgentConfig::load_from_path(path)?,
            None => AgentConfig::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut AgentConfig) {
        if let Some(output) = &self.output {
            config.export.path = output.to_string_lossy().into_owned();
        }
        if let Some(ms) = self.interval_ms {
            config.monitoring.sample_interval_ms = ms;
        }
        if self.no_export {
            config.export.enabled = false;
        }
    }
}
