//! The gate state machine.
//!
//! A `Tally` accepts records until its fixed target count is reached, then
//! runs its completion callback exactly once. Records after that point are
//! rejected without touching the stored state.

use std::fmt;

use crate::error::{Result, TallyError};

/// Completion callback. `FnOnce` carries the runs-at-most-once guarantee in
/// the type; no `Send`/`Sync` bound because the gate is single-threaded.
type OnComplete = Box<dyn FnOnce()>;

/// Invocation-counting gate.
///
/// Holds a fixed target count, an optional completion callback, and the
/// ordered record of payloads seen so far. `T` is the payload type; a record
/// made without a payload stores `None`.
pub struct Tally<T = ()> {
    target: usize,
    on_complete: Option<OnComplete>,
    calls: Vec<Option<T>>,
}

impl<T> Tally<T> {
    /// Build a gate with a no-op completion action.
    pub fn new(target: usize) -> Result<Self> {
        Self::build(target, None)
    }

    /// Build a gate that runs `f` once `target` records have been made.
    pub fn with_callback(target: usize, f: impl FnOnce() + 'static) -> Result<Self> {
        Self::build(target, Some(Box::new(f)))
    }

    fn build(target: usize, on_complete: Option<OnComplete>) -> Result<Self> {
        if target == 0 {
            return Err(TallyError::InvalidTarget);
        }
        Ok(Self {
            target,
            on_complete,
            calls: Vec::new(),
        })
    }

    /// Record one invocation without a payload (stores the null marker).
    pub fn record(&mut self) -> Result<()> {
        self.push(None)
    }

    /// Record one invocation carrying `payload`.
    pub fn record_with(&mut self, payload: T) -> Result<()> {
        self.push(Some(payload))
    }

    fn push(&mut self, payload: Option<T>) -> Result<()> {
        if self.calls.len() == self.target {
            return Err(TallyError::AlreadyComplete {
                target: self.target,
            });
        }

        self.calls.push(payload);
        tracing::trace!(
            count = self.calls.len(),
            target_count = self.target,
            "recorded invocation"
        );

        if self.calls.len() == self.target {
            tracing::debug!(target_count = self.target, "target count reached");
            if let Some(f) = self.on_complete.take() {
                f();
            }
        }
        Ok(())
    }

    /// Number of invocations recorded so far.
    pub fn count(&self) -> usize {
        self.calls.len()
    }

    /// Read view of the recorded payloads, in call order.
    pub fn calls(&self) -> &[Option<T>] {
        &self.calls
    }

    /// The fixed target count.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Records still needed to reach the target.
    pub fn remaining(&self) -> usize {
        self.target - self.calls.len()
    }

    /// Whether the target count has been reached.
    pub fn is_complete(&self) -> bool {
        self.calls.len() == self.target
    }

    /// Consume the gate and take the recorded payloads.
    pub fn into_calls(self) -> Vec<Option<T>> {
        self.calls
    }
}

impl<T: fmt::Debug> fmt::Debug for Tally<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // on_complete is not Debug; report the observable state instead.
        f.debug_struct("Tally")
            .field("target", &self.target)
            .field("calls", &self.calls)
            .field("complete", &self.is_complete())
            .finish_non_exhaustive()
    }
}
