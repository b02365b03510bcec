//! Page-relative pointer tracking
//!
//! Reports the pointer's absolute position within the full scrollable
//! document, independent of any region or scroll state.

use crate::track::surface::{PointerSurface, SubscriptionId};
use crate::track::types::Position;
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

/// Tracks the pointer position relative to the full page.
///
/// Same lifecycle as [`RegionTracker`](crate::track::RegionTracker) but with
/// no region collaborator: [`attach`](PageTracker::attach) subscribes to the
/// surface for the consumer's lifetime, each event stores the event's
/// document-relative coordinates, [`detach`](PageTracker::detach) freezes
/// the last position.
pub struct PageTracker {
    surface: Arc<PointerSurface>,
    position: Arc<ParkingMutex<Position>>,
    subscription: Option<SubscriptionId>,
}

impl PageTracker {
    /// Create an unattached tracker with position `{0,0}`.
    pub fn new(surface: Arc<PointerSurface>) -> Self {
        Self {
            surface,
            position: Arc::new(ParkingMutex::new(Position::ORIGIN)),
            subscription: None,
        }
    }

    /// Start tracking. Tears down any prior listener first.
    pub fn attach(&mut self) {
        self.detach();

        let position = Arc::clone(&self.position);
        let id = self.surface.subscribe(move |event| {
            *position.lock() = Position::new(event.page_x, event.page_y);
        });
        self.subscription = Some(id);
    }

    /// Stop tracking. Idempotent; the last observed position remains
    /// readable but frozen.
    pub fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.surface.unsubscribe(id);
        }
    }

    /// Most recent page-relative position, `{0,0}` before any event.
    pub fn position(&self) -> Position {
        *self.position.lock()
    }

    /// Whether a listener is currently installed.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

impl Drop for PageTracker {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::types::PointerEvent;

    #[test]
    fn test_position_uses_page_coordinates() {
        let surface = Arc::new(PointerSurface::new());
        let mut tracker = PageTracker::new(Arc::clone(&surface));
        assert_eq!(tracker.position(), Position::ORIGIN);

        tracker.attach();
        // Scrolled document: page coordinates differ from viewport ones
        surface.dispatch(&PointerEvent {
            client_x: 80.0,
            client_y: 40.0,
            page_x: 500.0,
            page_y: 700.0,
        });

        assert_eq!(tracker.position(), Position::new(500.0, 700.0));
    }

    #[test]
    fn test_detach_is_idempotent_and_freezes_position() {
        let surface = Arc::new(PointerSurface::new());
        let mut tracker = PageTracker::new(Arc::clone(&surface));
        tracker.attach();

        surface.dispatch(&PointerEvent::unscrolled(10.0, 20.0));
        tracker.detach();
        tracker.detach();

        surface.dispatch(&PointerEvent::unscrolled(99.0, 99.0));
        assert_eq!(tracker.position(), Position::new(10.0, 20.0));
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn test_reattach_installs_a_single_fresh_listener() {
        let surface = Arc::new(PointerSurface::new());
        let mut tracker = PageTracker::new(Arc::clone(&surface));
        tracker.attach();
        tracker.attach();

        assert_eq!(surface.listener_count(), 1);
        surface.dispatch(&PointerEvent::unscrolled(5.0, 6.0));
        assert_eq!(tracker.position(), Position::new(5.0, 6.0));
    }
}
