use serde::{Deserialize, Serialize};

/// Commands run inside each router container by the `ospf` handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonCommands {
    /// Restarts the routing suite.
    pub restart: Vec<String>,
    /// Lists the OSPF daemon process; a non-zero exit means it is not running.
    pub verify: Vec<String>,
}

impl Default for DaemonCommands {
    fn default() -> Self {
        Self {
            restart: vec!["service".into(), "frr".into(), "restart".into()],
            verify: vec!["pgrep".into(), "-a".into(), "ospfd".into()],
        }
    }
}
