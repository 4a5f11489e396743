use tracing::{info, instrument};

use crate::{commands, error::CoreResult, orchestrator::Orchestrator};

impl Orchestrator {
    /// Rebuild all images without layer cache.
    #[instrument(level = "debug", skip(self))]
    pub async fn build(&self) -> CoreResult<()> {
        self.run(commands::compose_build(&self.topology)).await?;
        info!("images rebuilt");
        Ok(())
    }

    /// Start all containers and networks detached.
    ///
    /// Returns as soon as the orchestration tool does; see
    /// [`Orchestrator::await_convergence`] for waiting on OSPF.
    #[instrument(level = "debug", skip(self))]
    pub async fn construct(&self) -> CoreResult<()> {
        self.run(commands::compose_up(&self.topology)).await?;
        info!("network started");
        Ok(())
    }

    /// Stop and remove all containers and networks.
    #[instrument(level = "debug", skip(self))]
    pub async fn destroy(&self) -> CoreResult<()> {
        self.run(commands::compose_down(&self.topology)).await?;
        info!("network destroyed");
        Ok(())
    }
}
