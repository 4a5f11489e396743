use std::{path::PathBuf, sync::Arc, time::Duration};

use ospfctl_core::{CoreResult, Orchestrator};
use ospfctl_exec::{ProcessConfig, ProcessExecutor};
use ospfctl_model::{CONVERGENCE_HINT_SECS, Topology};
use tracing::{debug, info};

use crate::{cli::Commands, config::AppConfig};

/// Run the handler for `command`.
///
/// The orchestrator is only built for commands that talk to docker, so `show-config` works
/// even when `-C` points nowhere useful.
pub async fn dispatch(
    command: Commands,
    cfg: AppConfig,
    directory: Option<PathBuf>,
) -> anyhow::Result<()> {
    debug!(command = ?command, "dispatching");
    let orch = || orchestrator(&cfg.topology, directory.clone());

    match command {
        Commands::ShowConfig => show_config(&cfg)?,
        Commands::Build => orch()?.build().await?,
        Commands::Construct { wait, timeout } => construct(&orch()?, wait, timeout).await?,
        Commands::Destroy => orch()?.destroy().await?,
        Commands::Move { direction } => orch()?.move_traffic(direction).await?,
        Commands::Ospf => orch()?.restart_daemons().await?,
        Commands::Routes => orch()?.install_routes().await?,
    }
    Ok(())
}

fn orchestrator(topology: &Topology, directory: Option<PathBuf>) -> anyhow::Result<Orchestrator> {
    let executor = ProcessExecutor::new(ProcessConfig {
        workdir: directory,
        ..Default::default()
    })?;
    Ok(Orchestrator::new(topology.clone(), Arc::new(executor))?)
}

/// Print the effective configuration; the output is itself a valid `--config` file.
fn show_config(cfg: &AppConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(cfg)?);
    Ok(())
}

async fn construct(orch: &Orchestrator, wait: bool, timeout: Option<u64>) -> CoreResult<()> {
    orch.construct().await?;

    if !wait {
        println!(
            "Network constructed. Please wait {CONVERGENCE_HINT_SECS} seconds for OSPF setup to complete."
        );
        return Ok(());
    }

    let timeout = timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| orch.topology().convergence.timeout());
    println!(
        "Network constructed. Waiting up to {}s for OSPF adjacencies.",
        timeout.as_secs()
    );

    let report = orch.await_convergence(timeout).await?;
    info!(routers = report.routers.len(), elapsed = ?report.elapsed, "converged");
    println!("OSPF converged after {}s.", report.elapsed.as_secs());
    Ok(())
}
