//! Topology description the orchestrator acts on.
//!
//! Everything the handlers need to know about the emulated network lives here: container names,
//! per-path cost tables, host gateways, daemon commands. [`Topology::default`] reproduces the
//! four-router classroom setup; a JSON file can replace any part of it.
mod assignment;
pub use assignment::CostAssignment;

mod convergence;
pub use convergence::ConvergenceConfig;

mod daemon;
pub use daemon::DaemonCommands;

mod host;
pub use host::HostRoute;

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    net::Ipv4Addr,
};

use serde::{Deserialize, Serialize};

use crate::{Cost, Direction, ModelError, ModelResult};

/// Static description of the emulated network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topology {
    /// Orchestration tool invocation prefix, e.g. `["docker", "compose"]`.
    pub compose: Vec<String>,
    /// Program used to run commands inside containers (`<docker> exec <container> ...`).
    pub docker: String,
    /// Router containers, in the order daemons are restarted.
    pub routers: Vec<String>,
    /// Hosts and the gateway each should use as default route.
    pub hosts: Vec<HostRoute>,
    /// Ordered cost table per direction.
    pub paths: BTreeMap<Direction, Vec<CostAssignment>>,
    /// Daemon restart/verify commands.
    pub daemon: DaemonCommands,
    /// Adjacency poll bounds.
    pub convergence: ConvergenceConfig,
}

impl Topology {
    /// Build a topology from an already parsed JSON section and validate it.
    pub fn from_json(value: serde_json::Value) -> ModelResult<Self> {
        let topology: Topology = serde_json::from_value(value)?;
        topology.validate()?;
        Ok(topology)
    }

    /// Ordered cost table for `direction`, empty if none is configured.
    pub fn path(&self, direction: Direction) -> &[CostAssignment] {
        self.paths
            .get(&direction)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cost that `direction` assigns to `router`/`interface`, if any.
    pub fn cost_of(&self, direction: Direction, router: &str, interface: &str) -> Option<Cost> {
        self.path(direction)
            .iter()
            .find(|a| a.targets(router, interface))
            .map(|a| a.cost)
    }

    /// Sum of egress costs along `hops` once `direction` has been applied.
    ///
    /// Each hop is a `(router, interface)` pair naming the interface a packet leaves through.
    /// Returns `None` if any hop has no cost in the table.
    pub fn path_cost(&self, direction: Direction, hops: &[(&str, &str)]) -> Option<u32> {
        hops.iter().try_fold(0u32, |acc, (router, interface)| {
            self.cost_of(direction, router, interface)
                .map(|c| acc + u32::from(c))
        })
    }

    /// Distinct OSPF interfaces configured on `router` across all paths.
    ///
    /// Used as the expected number of full adjacencies for that router.
    pub fn interfaces_of(&self, router: &str) -> BTreeSet<&str> {
        self.paths
            .values()
            .flatten()
            .filter(|a| a.router == router)
            .map(|a| a.interface.as_str())
            .collect()
    }

    /// Validate structural invariants.
    ///
    /// Rules:
    /// - `compose`, `docker`, `routers` are not empty; names are not blank;
    /// - both directions have a non-empty table;
    /// - every router in a table is listed in `routers`;
    /// - a `(router, interface)` pair appears at most once per table;
    /// - daemon commands are not empty;
    /// - the poll interval is positive and not longer than the timeout.
    pub fn validate(&self) -> ModelResult<()> {
        if self.compose.is_empty() || self.compose.iter().any(|s| s.trim().is_empty()) {
            return Err(ModelError::Invalid("compose command is empty".into()));
        }
        if self.docker.trim().is_empty() {
            return Err(ModelError::Invalid("docker program is empty".into()));
        }
        if self.routers.is_empty() {
            return Err(ModelError::Invalid("no routers configured".into()));
        }
        if let Some(blank) = self.routers.iter().find(|r| r.trim().is_empty()) {
            return Err(ModelError::Invalid(format!("blank router name: {blank:?}")));
        }
        if self.hosts.iter().any(|h| h.container.trim().is_empty()) {
            return Err(ModelError::Invalid("blank host container name".into()));
        }

        let routers: HashSet<&str> = self.routers.iter().map(String::as_str).collect();
        for direction in Direction::ALL {
            let table = self.path(direction);
            if table.is_empty() {
                return Err(ModelError::EmptyPath(direction.to_string()));
            }

            let mut seen = HashSet::new();
            for a in table {
                if !routers.contains(a.router.as_str()) {
                    return Err(ModelError::UnknownRouter {
                        direction: direction.to_string(),
                        router: a.router.clone(),
                    });
                }
                if a.interface.trim().is_empty() {
                    return Err(ModelError::Invalid(format!(
                        "blank interface on {} in the '{direction}' path",
                        a.router
                    )));
                }
                if !seen.insert((a.router.as_str(), a.interface.as_str())) {
                    return Err(ModelError::DuplicateAssignment {
                        direction: direction.to_string(),
                        router: a.router.clone(),
                        interface: a.interface.clone(),
                    });
                }
            }
        }

        if self.daemon.restart.is_empty() || self.daemon.verify.is_empty() {
            return Err(ModelError::Invalid("daemon commands cannot be empty".into()));
        }
        if self.convergence.interval_secs == 0 {
            return Err(ModelError::Invalid(
                "convergence.interval_secs cannot be zero".into(),
            ));
        }
        if self.convergence.interval_secs > self.convergence.timeout_secs {
            return Err(ModelError::Invalid(
                "convergence.interval_secs exceeds convergence.timeout_secs".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Topology {
    fn default() -> Self {
        let (r1, r2, r3, r4) = ("part1-r1-1", "part1-r2-1", "part1-r3-1", "part1-r4-1");
        let (lo, hi) = (Cost::LOW, Cost::HIGH);

        // net15: R1-R2, net16: R1-R4, net17: R2-R3, net18: R4-R3
        let north = vec![
            CostAssignment::new(r1, "net15", lo),
            CostAssignment::new(r2, "net17", lo),
            CostAssignment::new(r3, "net17", lo),
            CostAssignment::new(r2, "net15", lo),
            CostAssignment::new(r1, "net16", hi),
            CostAssignment::new(r4, "net18", hi),
            CostAssignment::new(r3, "net18", hi),
            CostAssignment::new(r4, "net16", hi),
        ];
        let south = vec![
            CostAssignment::new(r1, "net16", lo),
            CostAssignment::new(r4, "net18", lo),
            CostAssignment::new(r3, "net18", lo),
            CostAssignment::new(r4, "net16", lo),
            CostAssignment::new(r1, "net15", hi),
            CostAssignment::new(r2, "net17", hi),
            CostAssignment::new(r3, "net17", hi),
            CostAssignment::new(r2, "net15", hi),
        ];

        Self {
            compose: vec!["docker".into(), "compose".into()],
            docker: "docker".into(),
            routers: [r1, r2, r3, r4].map(String::from).to_vec(),
            hosts: vec![
                HostRoute::new("part1-ha-1", Ipv4Addr::new(10, 0, 14, 4)),
                HostRoute::new("part1-hb-1", Ipv4Addr::new(10, 0, 19, 4)),
            ],
            paths: BTreeMap::from([(Direction::North, north), (Direction::South, south)]),
            daemon: DaemonCommands::default(),
            convergence: ConvergenceConfig::default(),
        }
    }
}
