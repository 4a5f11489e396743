use std::time::Duration;

use tokio::time::{Instant, sleep, timeout as within};
use tracing::{debug, info, instrument};

use crate::{
    commands,
    error::{CoreError, CoreResult},
    orchestrator::Orchestrator,
};

/// Outcome of a successful [`Orchestrator::await_convergence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvergenceReport {
    /// `(router, full adjacencies)` in poll order.
    pub routers: Vec<(String, usize)>,
    /// Time from the first poll until the last router reached its expected adjacencies.
    pub elapsed: Duration,
}

/// Count neighbors in `Full` state in `show ip ospf neighbor` output.
///
/// FRR prints the state as `Full/DR`, `Full/Backup`, `Full/DROther` or `Full/-` on
/// point-to-point links; header and blank lines never match.
pub fn count_full_neighbors(output: &str) -> usize {
    output
        .lines()
        .filter(|line| {
            line.split_whitespace()
                .any(|tok| tok == "Full" || tok.starts_with("Full/"))
        })
        .count()
}

impl Orchestrator {
    /// Poll each router until it reports one full adjacency per configured OSPF interface.
    ///
    /// `timeout` bounds the whole wait, not each router, and a poll still running at the
    /// deadline is abandoned. A poll command that exits non-zero counts as "not converged yet"
    /// since vtysh refuses connections while the daemon starts.
    #[instrument(level = "debug", skip(self))]
    pub async fn await_convergence(&self, timeout: Duration) -> CoreResult<ConvergenceReport> {
        let interval = self.topology.convergence.interval();
        let started = Instant::now();
        let deadline = started + timeout;
        let mut routers = Vec::with_capacity(self.topology.routers.len());

        for router in &self.topology.routers {
            let expected = self.topology.interfaces_of(router).len();
            if expected == 0 {
                debug!(router = %router, "no ospf interfaces configured; skipping");
                continue;
            }

            let mut full = 0;
            loop {
                let poll = self.capture(commands::show_neighbors(&self.topology, router));
                let remaining = deadline.saturating_duration_since(Instant::now());
                let out = match within(remaining, poll).await {
                    Ok(out) => out?,
                    Err(_) => {
                        debug!(router = %router, "neighbor query still running at deadline");
                        return Err(CoreError::NotConverged {
                            router: router.clone(),
                            full,
                            expected,
                            waited: started.elapsed(),
                        });
                    }
                };
                full = if out.success() {
                    count_full_neighbors(&out.stdout)
                } else {
                    debug!(router = %router, code = ?out.code, "neighbor query failed");
                    0
                };

                if full >= expected {
                    info!(router = %router, full, "ospf adjacencies up");
                    routers.push((router.clone(), full));
                    break;
                }
                if Instant::now() + interval >= deadline {
                    return Err(CoreError::NotConverged {
                        router: router.clone(),
                        full,
                        expected,
                        waited: started.elapsed(),
                    });
                }
                debug!(router = %router, full, expected, "waiting for adjacencies");
                sleep(interval).await;
            }
        }

        Ok(ConvergenceReport {
            routers,
            elapsed: started.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;
    use ospfctl_model::{CommandLine, Topology};
    use tokio::time::Instant;

    use super::count_full_neighbors;
    use crate::{
        error::CoreError,
        executor::{ExecOutcome, Executor, ExecutorError, OutputMode, RecordingExecutor},
        orchestrator::{Orchestrator, test_support::orchestrator},
    };

    const TWO_FULL: &str = "\
Neighbor ID     Pri State           Up Time         Dead Time Address         Interface                        RXmtL RqstL DBsmL
2.2.2.2           1 Full/DR         1m02s             38.123s 10.0.15.3       net15:10.0.15.2                      0     0     0
4.4.4.4           1 Full/Backup     1m01s             37.902s 10.0.16.3       net16:10.0.16.2                      0     0     0
";

    const ONE_FULL: &str = "\
Neighbor ID     Pri State           Up Time         Dead Time Address         Interface                        RXmtL RqstL DBsmL
2.2.2.2           1 Full/DR         0m12s             38.123s 10.0.15.3       net15:10.0.15.2                      0     0     0
4.4.4.4           1 ExStart/DR      0m02s             37.902s 10.0.16.3       net16:10.0.16.2                      0     0     0
";

    #[test]
    fn counts_only_full_states() {
        assert_eq!(count_full_neighbors(TWO_FULL), 2);
        assert_eq!(count_full_neighbors(ONE_FULL), 1);
        assert_eq!(count_full_neighbors(""), 0);
        assert_eq!(
            count_full_neighbors("1.1.1.1  1 Full/-  1m  30s  10.0.0.1  eth0:10.0.0.2  0 0 0"),
            1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn converged_network_polls_each_router_once() {
        let exec = RecordingExecutor::new()
            .respond("show ip ospf neighbor", [ExecOutcome::ok(TWO_FULL)]);
        let (orch, exec) = orchestrator(exec);

        let report = orch
            .await_convergence(Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(report.routers.len(), 4);
        assert_eq!(exec.calls().len(), 4);
        assert!(exec.calls().iter().all(|c| c.mode == OutputMode::Capture));
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_adjacencies_are_full() {
        let exec = RecordingExecutor::new()
            .respond(
                "part1-r1-1",
                [
                    ExecOutcome::exit(1),
                    ExecOutcome::ok(ONE_FULL),
                    ExecOutcome::ok(TWO_FULL),
                ],
            )
            .respond("show ip ospf neighbor", [ExecOutcome::ok(TWO_FULL)]);
        let (orch, exec) = orchestrator(exec);

        let report = orch
            .await_convergence(Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(report.routers[0], ("part1-r1-1".to_string(), 2));
        // three polls of r1, then one per remaining router
        assert_eq!(exec.calls().len(), 6);
        assert_eq!(report.elapsed, Duration::from_secs(4));
    }

    /// Executor whose commands never finish, like `docker exec` into a paused container.
    struct Hung;

    #[async_trait]
    impl Executor for Hung {
        fn name(&self) -> &'static str {
            "hung"
        }

        async fn execute(
            &self,
            _cmd: &CommandLine,
            _mode: OutputMode,
        ) -> Result<ExecOutcome, ExecutorError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hung_query_is_cut_off_at_deadline() {
        let orch = Orchestrator::new(Topology::default(), Arc::new(Hung)).unwrap();
        let started = Instant::now();

        let res = tokio::time::timeout(
            Duration::from_secs(3600),
            orch.await_convergence(Duration::from_secs(10)),
        )
        .await
        .expect("convergence wait must honor its own timeout");

        match res {
            Err(CoreError::NotConverged { router, full, .. }) => {
                assert_eq!(router, "part1-r1-1");
                assert_eq!(full, 0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(started.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_timeout() {
        let exec = RecordingExecutor::new()
            .respond("show ip ospf neighbor", [ExecOutcome::ok(ONE_FULL)]);
        let (orch, exec) = orchestrator(exec);

        let err = orch
            .await_convergence(Duration::from_secs(10))
            .await
            .unwrap_err();

        match err {
            CoreError::NotConverged {
                router,
                full,
                expected,
                ..
            } => {
                assert_eq!(router, "part1-r1-1");
                assert_eq!(full, 1);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        // polls at t=0,2,4,6,8; t=10 would reach the deadline
        assert_eq!(exec.calls().len(), 5);
    }
}
