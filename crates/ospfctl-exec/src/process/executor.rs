use std::{io::Write, process::Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace};

use ospfctl_core::{ExecOutcome, Executor, ExecutorError, OutputMode};
use ospfctl_model::CommandLine;

use crate::{ExecError, process::config::ProcessConfig};

/// Executor that runs commands as child processes of this one.
pub struct ProcessExecutor {
    config: ProcessConfig,
}

impl ProcessExecutor {
    /// Create an executor with validated configuration.
    pub fn new(config: ProcessConfig) -> Result<Self, ExecError> {
        config.validate()?;
        trace!(config = %config, "process executor configured");
        Ok(Self { config })
    }

    fn command(&self, cmd: &CommandLine) -> Command {
        let mut c = Command::new(cmd.program());
        // a caller that stops awaiting (poll deadline) must not leave the child running
        c.args(cmd.arguments()).kill_on_drop(true);
        if let Some(dir) = &self.config.workdir {
            c.current_dir(dir);
        }
        c
    }

    fn echo(&self, cmd: &CommandLine) {
        if !self.config.echo {
            return;
        }
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "> {cmd}");
        let _ = out.flush();
    }

    fn log_captured(&self, stdout: &str) {
        let max = self.config.max_logged_line;
        for line in stdout.lines() {
            match line.char_indices().nth(max) {
                Some((cut, _)) => trace!(line = %&line[..cut], truncated = true, "captured"),
                None => trace!(line = %line, "captured"),
            }
        }
    }
}

#[async_trait]
impl Executor for ProcessExecutor {
    fn name(&self) -> &'static str {
        "process"
    }

    async fn execute(
        &self,
        cmd: &CommandLine,
        mode: OutputMode,
    ) -> Result<ExecOutcome, ExecutorError> {
        let spawn_err = |e: std::io::Error| ExecutorError::Spawn {
            program: cmd.program().to_string(),
            reason: e.to_string(),
        };
        let wait_err = |e: std::io::Error| ExecutorError::Wait {
            program: cmd.program().to_string(),
            reason: e.to_string(),
        };

        let mut c = self.command(cmd);
        let outcome = match mode {
            OutputMode::Inherit => {
                self.echo(cmd);
                let status = c
                    .spawn()
                    .map_err(spawn_err)?
                    .wait()
                    .await
                    .map_err(wait_err)?;
                ExecOutcome {
                    code: status.code(),
                    stdout: String::new(),
                }
            }
            OutputMode::Capture => {
                c.stdout(Stdio::piped()).stderr(Stdio::inherit());
                let output = c
                    .spawn()
                    .map_err(spawn_err)?
                    .wait_with_output()
                    .await
                    .map_err(wait_err)?;
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                self.log_captured(&stdout);
                ExecOutcome {
                    code: output.status.code(),
                    stdout,
                }
            }
        };

        debug!(command = %cmd, code = ?outcome.code, "subprocess exited");
        Ok(outcome)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::Duration;

    use super::*;

    fn quiet() -> ProcessExecutor {
        ProcessExecutor::new(ProcessConfig {
            echo: false,
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn reports_success() {
        let out = quiet()
            .execute(&CommandLine::new("true"), OutputMode::Inherit)
            .await
            .unwrap();
        assert!(out.success());
        assert!(out.stdout.is_empty());
    }

    #[tokio::test]
    async fn reports_exit_code() {
        let cmd = CommandLine::new("sh").arg("-c").arg("exit 3");
        let out = quiet().execute(&cmd, OutputMode::Inherit).await.unwrap();
        assert_eq!(out.code, Some(3));
    }

    #[tokio::test]
    async fn captures_stdout() {
        let cmd = CommandLine::new("echo").arg("Full/DR");
        let out = quiet().execute(&cmd, OutputMode::Capture).await.unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "Full/DR");
    }

    #[tokio::test]
    async fn runs_in_workdir() {
        let dir = tempfile::tempdir().unwrap();
        let exec = ProcessExecutor::new(ProcessConfig {
            workdir: Some(dir.path().to_path_buf()),
            echo: false,
            ..Default::default()
        })
        .unwrap();

        let out = exec
            .execute(&CommandLine::new("pwd"), OutputMode::Capture)
            .await
            .unwrap();
        let reported = std::fs::canonicalize(out.stdout.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(dir.path()).unwrap());
    }

    /// Process state letter from `/proc/<pid>/stat`, `None` once the pid is gone.
    #[cfg(target_os = "linux")]
    fn proc_state(pid: &str) -> Option<char> {
        let stat = std::fs::read_to_string(format!("/proc/{pid}/stat")).ok()?;
        let (_, rest) = stat.rsplit_once(')')?;
        rest.trim_start().chars().next()
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn abandoned_command_is_killed() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("pid");
        let script = format!("echo $$ > {}; exec sleep 30", pid_file.display());
        let cmd = CommandLine::new("sh").arg("-c").arg(script);

        let exec = quiet();
        let res = tokio::time::timeout(
            Duration::from_millis(500),
            exec.execute(&cmd, OutputMode::Capture),
        )
        .await;
        assert!(res.is_err(), "sleep 30 finished early");

        let pid = std::fs::read_to_string(&pid_file).unwrap();
        let pid = pid.trim();
        let mut state = proc_state(pid);
        for _ in 0..50 {
            if matches!(state, None | Some('Z')) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
            state = proc_state(pid);
        }
        assert!(
            matches!(state, None | Some('Z')),
            "child {pid} still alive in state {state:?}"
        );
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let err = quiet()
            .execute(
                &CommandLine::new("ospfctl-no-such-program"),
                OutputMode::Inherit,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutorError::Spawn { .. }));
    }
}
