use tracing::{info, instrument};

use crate::{commands, error::CoreResult, orchestrator::Orchestrator};

impl Orchestrator {
    /// Restart the routing daemon on every router, then check `ospfd` is running there.
    ///
    /// Routers are handled one after another in configured order; the first failure stops the loop.
    #[instrument(level = "debug", skip(self))]
    pub async fn restart_daemons(&self) -> CoreResult<()> {
        for router in &self.topology.routers {
            self.run(commands::daemon_restart(&self.topology, router))
                .await?;
            self.run(commands::daemon_verify(&self.topology, router))
                .await?;
            info!(router = %router, "routing daemon restarted");
        }
        Ok(())
    }
}
