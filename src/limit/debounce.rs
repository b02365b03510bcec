//! Deferred single-shot execution that resets its deadline on every call.

use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Debounces calls to a wrapped action.
///
/// Each [`call`](Debouncer::call) stores the latest value and (re)starts a
/// timer of length `wait`. The action runs once with the stored value when a
/// full quiet window elapses with no further calls. At most one deferred
/// execution is outstanding at any time; a new call aborts the previous
/// timer before scheduling its own.
///
/// Timers are spawned on the ambient tokio runtime, so `call` must be
/// invoked from within one. Panics inside the action surface in the timer
/// task and are not caught here.
pub struct Debouncer<T> {
    wait: Duration,
    action: Arc<dyn Fn(T) + Send + Sync>,
    // Latest pending value, shared with the in-flight timer task. Empty
    // whenever no delivery is outstanding.
    slot: Arc<ParkingMutex<Option<T>>>,
    timer: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer that delivers to `action` after `wait` of quiet.
    pub fn new(wait: Duration, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            action: Arc::new(action),
            slot: Arc::new(ParkingMutex::new(None)),
            timer: None,
        }
    }

    /// Record `value` and restart the quiet-window timer.
    ///
    /// Any previously scheduled delivery is discarded without executing.
    pub fn call(&mut self, value: T) {
        *self.slot.lock() = Some(value);
        self.abort_timer();

        let slot = Arc::clone(&self.slot);
        let action = Arc::clone(&self.action);
        let wait = self.wait;

        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            let value = slot.lock().take();
            if let Some(value) = value {
                action(value);
            }
        }));
    }

    /// Deliver a pending value immediately, skipping the rest of the window.
    ///
    /// No-op when nothing is pending.
    pub fn flush(&mut self) {
        self.abort_timer();
        let value = self.slot.lock().take();
        if let Some(value) = value {
            tracing::trace!("debounce flushed before deadline");
            (self.action)(value);
        }
    }

    /// Discard a pending value without executing the action.
    ///
    /// No-op when nothing is pending.
    pub fn cancel(&mut self) {
        self.abort_timer();
        if self.slot.lock().take().is_some() {
            tracing::trace!("pending debounce cancelled");
        }
    }

    /// Whether a deferred delivery is currently outstanding.
    pub fn is_pending(&self) -> bool {
        self.slot.lock().is_some()
    }
}

impl<T> Debouncer<T> {
    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

// A dropped debouncer must never fire its action afterwards.
impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.abort_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::time::sleep;

    fn recording_debouncer(wait_ms: u64) -> (Debouncer<i32>, Arc<ParkingMutex<Vec<i32>>>) {
        let seen = Arc::new(ParkingMutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let debouncer = Debouncer::new(Duration::from_millis(wait_ms), move |value| {
            sink.lock().push(value);
        });
        (debouncer, seen)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_calls_collapse_to_last_value() {
        let (mut debouncer, seen) = recording_debouncer(100);

        // Calls at t=0, 30, 60 all land inside one quiet window
        debouncer.call(1);
        sleep(Duration::from_millis(30)).await;
        debouncer.call(2);
        sleep(Duration::from_millis(30)).await;
        debouncer.call(3);

        sleep(Duration::from_millis(150)).await;

        assert_eq!(*seen.lock(), vec![3], "only the last value should fire");
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_quiet_windows_fire_separately() {
        let (mut debouncer, seen) = recording_debouncer(50);

        debouncer.call(1);
        sleep(Duration::from_millis(80)).await;
        debouncer.call(2);
        sleep(Duration::from_millis(80)).await;

        assert_eq!(*seen.lock(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_does_not_fire_before_deadline() {
        let (mut debouncer, seen) = recording_debouncer(100);

        debouncer.call(7);
        sleep(Duration::from_millis(60)).await;

        assert!(seen.lock().is_empty(), "window has not elapsed yet");
        assert!(debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_delivers_pending_value_once() {
        let (mut debouncer, seen) = recording_debouncer(100);

        debouncer.call(42);
        debouncer.flush();

        assert_eq!(*seen.lock(), vec![42]);
        assert!(!debouncer.is_pending());

        // The aborted timer must not double-deliver
        sleep(Duration::from_millis(200)).await;
        assert_eq!(*seen.lock(), vec![42]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_without_pending_is_noop() {
        let (mut debouncer, seen) = recording_debouncer(100);
        debouncer.flush();
        assert!(seen.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_delivery() {
        let (mut debouncer, seen) = recording_debouncer(100);

        debouncer.call(42);
        debouncer.cancel();
        sleep(Duration::from_millis(200)).await;

        assert!(seen.lock().is_empty());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_timer() {
        let (mut debouncer, seen) = recording_debouncer(100);

        debouncer.call(42);
        drop(debouncer);
        sleep(Duration::from_millis(200)).await;

        assert!(seen.lock().is_empty(), "dropped debouncer must not fire");
    }
}
