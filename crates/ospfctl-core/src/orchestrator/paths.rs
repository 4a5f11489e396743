use ospfctl_model::Direction;
use tracing::{info, instrument};

use crate::{commands, error::CoreResult, orchestrator::Orchestrator};

impl Orchestrator {
    /// Apply the cost table of `direction`, one vtysh call per (router, interface).
    ///
    /// A failure leaves earlier assignments in place; re-running the same direction converges.
    #[instrument(level = "debug", skip_all, fields(direction = %direction))]
    pub async fn move_traffic(&self, direction: Direction) -> CoreResult<()> {
        let table = self.topology.path(direction);
        for a in table {
            self.run(commands::ospf_cost(&self.topology, a)).await?;
            info!(
                router = %a.router,
                interface = %a.interface,
                cost = a.cost.get(),
                "ospf cost applied"
            );
        }
        info!(assignments = table.len(), "traffic moved {direction}");
        Ok(())
    }
}
