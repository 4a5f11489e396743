use tracing::{info, instrument};

use crate::{commands, error::CoreResult, orchestrator::Orchestrator};

impl Orchestrator {
    /// Point each host's default route at its attached router.
    #[instrument(level = "debug", skip(self))]
    pub async fn install_routes(&self) -> CoreResult<()> {
        for host in &self.topology.hosts {
            self.run(commands::default_route(&self.topology, host))
                .await?;
            info!(host = %host.container, gateway = %host.gateway, "default route installed");
        }
        Ok(())
    }
}
