//! Builders for every external command the orchestrator issues.
//!
//! Pure functions of the [`Topology`]; nothing here runs anything.
use ospfctl_model::{CommandLine, CostAssignment, HostRoute, Topology};

/// `<compose...> <args...>`, e.g. `docker compose build --no-cache`.
pub fn compose(t: &Topology, args: &[&str]) -> CommandLine {
    // validate() guarantees a non-empty prefix
    let base = CommandLine::from_argv(&t.compose).unwrap_or_else(|| CommandLine::new("docker"));
    base.args(args)
}

pub fn compose_build(t: &Topology) -> CommandLine {
    compose(t, &["build", "--no-cache"])
}

pub fn compose_up(t: &Topology) -> CommandLine {
    compose(t, &["up", "-d"])
}

pub fn compose_down(t: &Topology) -> CommandLine {
    compose(t, &["down"])
}

/// `<docker> exec <container> <argv...>`.
pub fn container_exec<S: AsRef<str>>(t: &Topology, container: &str, argv: &[S]) -> CommandLine {
    CommandLine::new(&t.docker)
        .arg("exec")
        .arg(container)
        .args(argv)
}

/// Run `vtysh` inside `router` with one `-c` per configuration line.
pub fn vtysh(t: &Topology, router: &str, lines: &[&str]) -> CommandLine {
    let mut cmd = container_exec(t, router, &["vtysh"]);
    for line in lines {
        cmd = cmd.arg("-c").arg(*line);
    }
    cmd
}

/// Set an interface cost and persist it to the startup configuration in a single vtysh call.
pub fn ospf_cost(t: &Topology, a: &CostAssignment) -> CommandLine {
    let interface = format!("interface {}", a.interface);
    let cost = format!("ip ospf cost {}", a.cost);
    vtysh(
        t,
        &a.router,
        &["configure terminal", &interface, &cost, "end", "write memory"],
    )
}

pub fn daemon_restart(t: &Topology, router: &str) -> CommandLine {
    container_exec(t, router, &t.daemon.restart)
}

pub fn daemon_verify(t: &Topology, router: &str) -> CommandLine {
    container_exec(t, router, &t.daemon.verify)
}

/// Install (or replace) the host's default route.
pub fn default_route(t: &Topology, host: &HostRoute) -> CommandLine {
    let gateway = host.gateway.to_string();
    container_exec(
        t,
        &host.container,
        &["ip", "route", "replace", "default", "via", gateway.as_str()],
    )
}

pub fn show_neighbors(t: &Topology, router: &str) -> CommandLine {
    vtysh(t, router, &["show ip ospf neighbor"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ospfctl_model::Cost;

    #[test]
    fn lifecycle_commands_are_fixed() {
        let t = Topology::default();
        assert_eq!(
            compose_build(&t).to_string(),
            "docker compose build --no-cache"
        );
        assert_eq!(compose_up(&t).to_string(), "docker compose up -d");
        assert_eq!(compose_down(&t).to_string(), "docker compose down");
    }

    #[test]
    fn compose_prefix_is_configurable() {
        let t = Topology {
            compose: vec!["docker-compose".into(), "-p".into(), "lab".into()],
            ..Default::default()
        };
        assert_eq!(compose_down(&t).to_string(), "docker-compose -p lab down");
    }

    #[test]
    fn ospf_cost_is_one_vtysh_call() {
        let t = Topology::default();
        let a = CostAssignment::new("part1-r1-1", "net15", Cost::new(5).unwrap());
        let cmd = ospf_cost(&t, &a);

        assert_eq!(cmd.program(), "docker");
        assert_eq!(
            cmd.arguments(),
            [
                "exec",
                "part1-r1-1",
                "vtysh",
                "-c",
                "configure terminal",
                "-c",
                "interface net15",
                "-c",
                "ip ospf cost 5",
                "-c",
                "end",
                "-c",
                "write memory",
            ]
        );
    }

    #[test]
    fn default_route_uses_gateway() {
        let t = Topology::default();
        let cmd = default_route(&t, &t.hosts[0]);
        assert_eq!(
            cmd.to_string(),
            "docker exec part1-ha-1 ip route replace default via 10.0.14.4"
        );
    }

    #[test]
    fn daemon_commands_come_from_topology() {
        let t = Topology::default();
        assert_eq!(
            daemon_restart(&t, "part1-r2-1").to_string(),
            "docker exec part1-r2-1 service frr restart"
        );
        assert_eq!(
            daemon_verify(&t, "part1-r2-1").to_string(),
            "docker exec part1-r2-1 pgrep -a ospfd"
        );
    }

    #[test]
    fn show_neighbors_quotes_for_echo() {
        let t = Topology::default();
        assert_eq!(
            show_neighbors(&t, "part1-r3-1").to_string(),
            "docker exec part1-r3-1 vtysh -c 'show ip ospf neighbor'"
        );
    }
}
