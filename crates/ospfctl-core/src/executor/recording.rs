use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use ospfctl_model::CommandLine;

use crate::executor::{ExecOutcome, Executor, ExecutorError, OutputMode};

/// One call observed by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub command: CommandLine,
    pub mode: OutputMode,
}

struct Rule {
    needle: String,
    outcomes: VecDeque<ExecOutcome>,
}

/// Executor that runs nothing and remembers every command it was given.
///
/// Commands succeed with empty output unless a rule matches. A rule matches when the
/// rendered command line contains its needle; the first matching rule wins. Each match
/// consumes the rule's next outcome, and the last outcome repeats forever.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<Recorded>>,
    rules: Mutex<Vec<Rule>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands containing `needle` with `outcomes`, in order.
    pub fn respond<I>(self, needle: impl Into<String>, outcomes: I) -> Self
    where
        I: IntoIterator<Item = ExecOutcome>,
    {
        let outcomes: VecDeque<_> = outcomes.into_iter().collect();
        if !outcomes.is_empty() {
            lock(&self.rules).push(Rule {
                needle: needle.into(),
                outcomes,
            });
        }
        self
    }

    /// Make commands containing `needle` exit with `code`.
    pub fn fail_on(self, needle: impl Into<String>, code: i32) -> Self {
        self.respond(needle, [ExecOutcome::exit(code)])
    }

    /// Every call seen so far, in order.
    pub fn calls(&self) -> Vec<Recorded> {
        lock(&self.calls).clone()
    }

    /// Rendered command lines seen so far, in order.
    pub fn lines(&self) -> Vec<String> {
        lock(&self.calls)
            .iter()
            .map(|r| r.command.to_string())
            .collect()
    }

    fn outcome_for(&self, line: &str) -> ExecOutcome {
        let mut rules = lock(&self.rules);
        let Some(rule) = rules.iter_mut().find(|r| line.contains(&r.needle)) else {
            return ExecOutcome::ok("");
        };
        if rule.outcomes.len() > 1 {
            rule.outcomes.pop_front().unwrap_or_default()
        } else {
            rule.outcomes.front().cloned().unwrap_or_default()
        }
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn execute(
        &self,
        cmd: &CommandLine,
        mode: OutputMode,
    ) -> Result<ExecOutcome, ExecutorError> {
        lock(&self.calls).push(Recorded {
            command: cmd.clone(),
            mode,
        });
        Ok(self.outcome_for(&cmd.to_string()))
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
