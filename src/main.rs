use anyhow::Result;
use clap::Parser;
use hostsnap::cli::Cli;
use hostsnap::config::AgentConfig;
use hostsnap::monitor::SystemMonitor;
use hostsnap::provider::SysinfoProvider;
use hostsnap::{export, report, version};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let result = run_cli(&cli);
    if let Err(e) = &result {
        tracing::error!("Agent error: {:#}", e);
    }
    result
}

fn run_cli(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(run(config, cli.json));
    // Do not wait on a collection still sampling after Ctrl-C.
    runtime.shutdown_background();
    outcome
}

async fn run(config: AgentConfig, print_json: bool) -> Result<()> {
    tracing::info!("Starting System Monitoring Agent ({})", version::banner());
    let collection = tokio::task::spawn_blocking(move || run_once(&config, print_json));

    tokio::select! {
        joined = collection => {
            joined.map_err(|e| anyhow::anyhow!("collection task join: {}", e))?;
            tracing::info!("Agent execution completed successfully");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Agent interrupted by user");
        }
    }
    Ok(())
}

/// One full run: snapshot, summary (a second, fresh snapshot), console output, file export.
fn run_once(config: &AgentConfig, print_json: bool) {
    let mut monitor = SystemMonitor::new(SysinfoProvider::new(), config.monitor_config());
    monitor.collect_all_metrics();
    let summary = monitor.get_system_summary();

    if print_json {
        println!("{}", monitor.export_metrics_json(None));
    } else {
        print!("{}", report::render(&summary));
    }

    if config.export.enabled {
        let path = Path::new(&config.export.path);
        if monitor.export_metrics_json(Some(path)) == export::EMPTY_ENCODING {
            tracing::warn!(path = %path.display(), "Snapshot file was not written");
        }
    }
}
