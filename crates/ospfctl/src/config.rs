use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use ospfctl_model::Topology;
use ospfctl_observe::LoggerConfig;

/// Effective configuration: the `--config` file merged over built-in defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub topology: Topology,
}

/// File layout before the topology section is validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    logger: LoggerConfig,
    topology: Option<serde_json::Value>,
}

impl AppConfig {
    /// Load and validate `path`, or fall back to the built-in classroom topology.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let file: ConfigFile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        let topology = match file.topology {
            Some(section) => Topology::from_json(section)
                .with_context(|| format!("invalid topology in {}", path.display()))?,
            None => Topology::default(),
        };

        Ok(Self {
            logger: file.logger,
            topology,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn no_path_means_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.topology, Topology::default());
    }

    #[test]
    fn sections_are_optional() {
        let f = write(r#"{"logger": {"level": "debug"}}"#);
        let cfg = AppConfig::load(Some(f.path())).unwrap();

        assert_eq!(cfg.logger.level.as_str(), "debug");
        assert_eq!(cfg.topology, Topology::default());
    }

    #[test]
    fn invalid_topology_is_reported() {
        let f = write(r#"{"topology": {"routers": []}}"#);
        let err = AppConfig::load(Some(f.path())).unwrap_err();
        assert!(format!("{err:#}").contains("no routers configured"));
    }

    #[test]
    fn bad_cost_in_topology_is_reported() {
        let f = write(
            r#"{"topology": {"paths": {
                "north": [{"router": "part1-r1-1", "interface": "net15", "cost": 0}],
                "south": [{"router": "part1-r1-1", "interface": "net16", "cost": 5}]
            }}}"#,
        );
        let err = AppConfig::load(Some(f.path())).unwrap_err();
        assert!(format!("{err:#}").contains("invalid topology"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = AppConfig::load(Some(Path::new("/no/such/ospfctl.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
