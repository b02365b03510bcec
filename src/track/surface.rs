//! Movement-event dispatch
//!
//! [`PointerSurface`] is the seam between the embedding UI layer and the
//! trackers: the UI layer calls [`dispatch`](PointerSurface::dispatch) once
//! per physical movement event, and trackers register listeners against it.

use crate::track::types::PointerEvent;
use parking_lot::Mutex as ParkingMutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

type Listener = Box<dyn Fn(&PointerEvent) + Send + Sync>;

/// Opaque handle to a registered listener.
///
/// Returned by [`PointerSurface::subscribe`]; passing it to
/// [`unsubscribe`](PointerSurface::unsubscribe) more than once is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Fans one pointer movement out to every live listener.
///
/// Dispatch is synchronous and runs on the caller's thread; the cooperative
/// single-event-loop model means listeners never run concurrently with each
/// other or with subscription changes. Listeners must not subscribe or
/// unsubscribe on the same surface from inside their callback.
#[derive(Default)]
pub struct PointerSurface {
    listeners: ParkingMutex<HashMap<u64, Listener>>,
    next_id: AtomicU64,
}

impl PointerSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` to receive every subsequent dispatched event.
    pub fn subscribe(
        &self,
        listener: impl Fn(&PointerEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().insert(id, Box::new(listener));
        tracing::debug!(id, "pointer listener subscribed");
        SubscriptionId(id)
    }

    /// Remove a listener. Idempotent; after this returns the listener is
    /// guaranteed not to run again.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        if self.listeners.lock().remove(&id.0).is_some() {
            tracing::debug!(id = id.0, "pointer listener unsubscribed");
        }
    }

    /// Deliver one movement event to every live listener.
    pub fn dispatch(&self, event: &PointerEvent) {
        for listener in self.listeners.lock().values() {
            listener(event);
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}
