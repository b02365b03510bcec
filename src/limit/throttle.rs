//! Rate limiting that executes immediately, then drops calls until a
//! cooldown elapses.

use std::time::Duration;
use tokio::time::Instant;

/// Outcome of a single [`Throttler::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// The action ran synchronously with this call's value.
    Invoked,
    /// The cooldown was still open; the value was discarded.
    Dropped,
}

/// Throttles calls to a wrapped action.
///
/// The first [`call`](Throttler::call) invokes the action immediately and
/// opens a cooldown of length `limit`. Calls arriving during the cooldown
/// are dropped outright, never queued or delayed. Once the cooldown expires
/// the next call invokes immediately and reopens the window.
///
/// Uses [`tokio::time::Instant`] so a paused test clock is honored; no timer
/// task is spawned, the deadline is checked on each call.
pub struct Throttler<T> {
    limit: Duration,
    action: Box<dyn Fn(T) + Send>,
    cooldown_until: Option<Instant>,
}

impl<T> Throttler<T> {
    /// Create a throttler allowing at most one invocation per `limit`.
    pub fn new(limit: Duration, action: impl Fn(T) + Send + 'static) -> Self {
        Self {
            limit,
            action: Box::new(action),
            cooldown_until: None,
        }
    }

    /// Invoke the action with `value`, unless the cooldown is still open.
    pub fn call(&mut self, value: T) -> ThrottleDecision {
        let now = Instant::now();
        if let Some(until) = self.cooldown_until {
            if now < until {
                return ThrottleDecision::Dropped;
            }
        }
        (self.action)(value);
        self.cooldown_until = Some(now + self.limit);
        ThrottleDecision::Invoked
    }

    /// Whether a call right now would be dropped.
    pub fn in_cooldown(&self) -> bool {
        self.cooldown_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Clear an active cooldown so the next call invokes immediately.
    pub fn reset(&mut self) {
        self.cooldown_until = None;
    }
}
