use serde::{Deserialize, Serialize};

use crate::Cost;

/// One `ip ospf cost` setting: which router, which interface, what metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostAssignment {
    /// Router container name.
    pub router: String,
    /// Interface (network attachment) on that router.
    pub interface: String,
    /// Metric to configure.
    pub cost: Cost,
}

impl CostAssignment {
    pub fn new(router: impl Into<String>, interface: impl Into<String>, cost: Cost) -> Self {
        Self {
            router: router.into(),
            interface: interface.into(),
            cost,
        }
    }

    /// Returns `true` if this assignment targets the given router/interface pair.
    pub fn targets(&self, router: &str, interface: &str) -> bool {
        self.router == router && self.interface == interface
    }
}
