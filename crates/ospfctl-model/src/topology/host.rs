use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Default route to install on a host container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRoute {
    /// Host container name.
    pub container: String,
    /// Address of the directly attached router.
    pub gateway: Ipv4Addr,
}

impl HostRoute {
    pub fn new(container: impl Into<String>, gateway: Ipv4Addr) -> Self {
        Self {
            container: container.into(),
            gateway,
        }
    }
}
