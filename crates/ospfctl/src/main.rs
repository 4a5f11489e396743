//! `ospfctl`: drives the four-router OSPF lab through docker compose and vtysh.
mod cli;
mod config;
mod handlers;

use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};

use ospfctl_core::CoreError;
use ospfctl_observe::{init_local_offset, init_logger};

use crate::{cli::Cli, config::AppConfig};

/// Exit status for malformed command lines.
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };

    // offset detection only works while the process is single-threaded
    init_local_offset();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            match e.downcast_ref::<CoreError>() {
                Some(core) => ExitCode::from(core.exit_code()),
                None => ExitCode::FAILURE,
            }
        }
    }
}

/// Help and version go to stdout with status 0; anything else prints the full help on stderr
/// followed by the error and exits with status 2.
fn usage_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{}", Cli::command().render_help());
            eprintln!("{e}");
            ExitCode::from(USAGE_EXIT)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut cfg = AppConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        cfg.logger.level = level;
    }
    if let Some(format) = cli.log_format {
        cfg.logger.format = format;
    }
    init_logger(&cfg.logger)?;

    handlers::dispatch(cli.command, cfg, cli.directory).await
}
