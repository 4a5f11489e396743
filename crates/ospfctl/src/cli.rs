use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ospfctl_model::Direction;
use ospfctl_observe::{LoggerFormat, LoggerLevel};

#[derive(Debug, Parser)]
#[command(
    name = "ospfctl",
    version,
    about = "Orchestrator for network traffic movement",
    override_usage = "ospfctl [OPTIONS] <COMMAND> [ARGS]"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file with `topology` and `logger` sections
    #[arg(long, global = true, env = "OSPFCTL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to run commands in (where the compose file lives)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `ospfctl_core=trace,warn`
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<LoggerLevel>,

    /// Log output format: text, json or journald
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<LoggerFormat>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rebuild container images without cache
    #[command(visible_alias = "b")]
    Build,

    /// Bring up containers & Docker networks
    #[command(visible_alias = "c")]
    Construct {
        /// Poll routers until OSPF adjacencies are full instead of returning immediately
        #[arg(long)]
        wait: bool,

        /// Upper bound for --wait in seconds (defaults to the config value)
        #[arg(long, requires = "wait", value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Bring down containers & Docker networks
    #[command(visible_alias = "d")]
    Destroy,

    /// Shift traffic to the north or south path
    #[command(visible_alias = "m")]
    Move {
        /// north = R1→R2→R3, south = R1→R4→R3
        #[arg(value_enum)]
        direction: Direction,
    },

    /// Restart the routing daemon on every router and check ospfd is running
    Ospf,

    /// Install default routes on the hosts
    Routes,

    /// Print the effective configuration as JSON
    ShowConfig,
}
