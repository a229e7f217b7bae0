//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but replays
//! a script. It implements [`Driver`] so the same
//! [`rootswitch_app::Runtime`] orchestration code runs in both production and
//! simulation.

use std::{collections::VecDeque, time::Duration};

use rootswitch_app::{Credentials, Driver, Intent};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// One scripted input step.
#[derive(Debug, Clone)]
pub enum Step {
    /// Hand this intent to the runtime.
    Intent(Intent),
    /// Sleep on the tokio clock, yielding no intent.
    Wait(Duration),
    /// Fail the next poll with this message.
    Fail(String),
}

/// Simulation driver for deterministic testing.
///
/// Returns [`Intent::Quit`] once the script is exhausted.
#[derive(Debug, Default)]
pub struct SimDriver {
    script: VecDeque<Step>,
    polls: usize,
    stopped: bool,
}

impl SimDriver {
    /// Create a driver with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver that replays `steps`.
    pub fn scripted(steps: impl IntoIterator<Item = Step>) -> Self {
        Self { script: steps.into_iter().collect(), ..Self::default() }
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.script.push_back(step);
    }

    /// Append a login submission.
    pub fn push_login(&mut self, username: &str) {
        self.push(Step::Intent(Intent::SubmitLogin(Credentials::new(username, "secret"))));
    }

    /// Append a pause.
    pub fn push_wait(&mut self, millis: u64) {
        self.push(Step::Wait(Duration::from_millis(millis)));
    }

    /// Check if there are steps left.
    pub fn has_pending(&self) -> bool {
        !self.script.is_empty()
    }

    /// Number of polls so far.
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Whether the runtime called [`Driver::stop`].
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_intent(&mut self) -> Result<Option<Intent>, Self::Error> {
        self.polls += 1;

        match self.script.front() {
            None => {
                tracing::debug!(poll = self.polls, "script exhausted, quitting");
                Ok(Some(Intent::Quit))
            },
            Some(Step::Wait(duration)) => {
                let duration = *duration;
                tokio::time::sleep(duration).await;
                // Only consume the step once the wait completed, so a poll
                // cancelled by a lifecycle result resumes the same wait.
                self.script.pop_front();
                tracing::debug!(poll = self.polls, ?duration, "scripted wait finished");
                Ok(None)
            },
            Some(Step::Intent(_) | Step::Fail(_)) => match self.script.pop_front() {
                Some(Step::Intent(intent)) => {
                    tracing::debug!(poll = self.polls, ?intent, "replaying scripted intent");
                    Ok(Some(intent))
                },
                Some(Step::Fail(message)) => {
                    tracing::debug!(
                        poll = self.polls,
                        reason = %message,
                        "replaying scripted failure"
                    );
                    Err(SimDriverError(message))
                },
                _ => Ok(None),
            },
        }
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_script_quits() {
        let mut driver = SimDriver::new();
        assert_eq!(driver.poll_intent().await.unwrap(), Some(Intent::Quit));
    }

    #[tokio::test]
    async fn steps_replay_in_order() {
        let mut driver = SimDriver::new();
        driver.push_login("ada");
        driver.push(Step::Fail("boom".into()));

        assert!(matches!(
            driver.poll_intent().await,
            Ok(Some(Intent::SubmitLogin(c))) if c.username == "ada"
        ));
        assert!(driver.poll_intent().await.is_err());
        assert!(!driver.has_pending());
        assert_eq!(driver.polls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_yields_nothing() {
        let mut driver = SimDriver::new();
        driver.push_wait(500);

        let before = tokio::time::Instant::now();
        assert_eq!(driver.poll_intent().await.unwrap(), None);
        assert!(before.elapsed() >= Duration::from_millis(500));
    }
}
