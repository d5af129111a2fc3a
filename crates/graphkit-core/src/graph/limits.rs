//! Step caps, deadlines and interruption for long-running algorithms
//!
//! Bellman-Ford is O(V·E) and Floyd-Warshall is O(V³); callers exposing
//! them to untrusted input can bound them with [`Limits`]. Each algorithm
//! call creates its own [`Meter`] from the shared limits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{GraphError, Result};

/// How often (in steps) the deadline and interrupt flag are polled
const POLL_INTERVAL: u64 = 1024;

/// Execution limits shared by every algorithm entry point.
///
/// The default is unbounded.
#[derive(Debug, Clone, Default)]
pub struct Limits {
    /// Maximum unit steps (relaxations, matrix cells, queue pops)
    pub max_steps: Option<u64>,
    /// Wall-clock budget measured from the start of each call
    pub deadline: Option<Duration>,
    /// Cooperative cancellation flag, e.g. set from a Ctrl-C handler
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl Limits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Start metering one algorithm call
    pub fn meter(&self, algorithm: &'static str) -> Meter<'_> {
        Meter {
            limits: self,
            algorithm,
            started: Instant::now(),
            steps: 0,
        }
    }
}

/// Per-call step counter. Never shared between calls.
#[derive(Debug)]
pub struct Meter<'a> {
    limits: &'a Limits,
    algorithm: &'static str,
    started: Instant,
    steps: u64,
}

impl Meter<'_> {
    /// Charge one step
    pub fn tick(&mut self) -> Result<()> {
        self.charge(1)
    }

    /// Charge `n` steps at once
    pub fn charge(&mut self, n: u64) -> Result<()> {
        let before = self.steps;
        self.steps = self.steps.saturating_add(n);

        if let Some(max) = self.limits.max_steps {
            if self.steps > max {
                return Err(GraphError::LimitExceeded {
                    algorithm: self.algorithm,
                    reason: format!("step limit of {} exceeded", max),
                });
            }
        }

        if before / POLL_INTERVAL != self.steps / POLL_INTERVAL || before == 0 {
            self.poll()?;
        }

        Ok(())
    }

    fn poll(&self) -> Result<()> {
        if let Some(flag) = &self.limits.interrupt {
            if flag.load(Ordering::SeqCst) {
                return Err(GraphError::Interrupted);
            }
        }

        if let Some(deadline) = self.limits.deadline {
            let elapsed = self.started.elapsed();
            if elapsed > deadline {
                return Err(GraphError::LimitExceeded {
                    algorithm: self.algorithm,
                    reason: format!("deadline of {:?} exceeded after {:?}", deadline, elapsed),
                });
            }
        }

        Ok(())
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
