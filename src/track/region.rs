//! Region-relative pointer tracking
//!
//! Reports the pointer's offset inside a bounded region, re-measuring the
//! region's bounding box on every movement event so tracking stays correct
//! across scrolling and resizing.

use crate::track::surface::{PointerSurface, SubscriptionId};
use crate::track::types::{Position, RegionBounds};
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

/// External collaborator providing a region's current bounding box.
///
/// Returns `None` when the region is not currently measurable (unmounted,
/// not yet laid out). Queried fresh on every event.
pub trait RegionHandle: Send + Sync {
    fn bounds(&self) -> Option<RegionBounds>;
}

/// Tracks the pointer position relative to a bounded region.
///
/// Lifecycle: unattached on construction, [`attach`](RegionTracker::attach)
/// installs a listener on the surface, [`detach`](RegionTracker::detach)
/// removes it and freezes the last observed position. Attaching an
/// unmeasurable region installs nothing and leaves the tracker inert; this
/// is not an error. Re-attaching always tears down the previous listener
/// first.
pub struct RegionTracker {
    surface: Arc<PointerSurface>,
    position: Arc<ParkingMutex<Position>>,
    subscription: Option<SubscriptionId>,
}

impl RegionTracker {
    /// Create an unattached tracker with position `{0,0}`.
    pub fn new(surface: Arc<PointerSurface>) -> Self {
        Self {
            surface,
            position: Arc::new(ParkingMutex::new(Position::ORIGIN)),
            subscription: None,
        }
    }

    /// Start tracking relative to `region`.
    ///
    /// Tears down any prior listener. If `region` has no measurable bounds
    /// right now, no listener is installed and the tracker stays inert.
    pub fn attach(&mut self, region: Arc<dyn RegionHandle>) {
        self.detach();

        if region.bounds().is_none() {
            tracing::debug!("region unmeasurable at attach, tracker left inert");
            return;
        }

        let position = Arc::clone(&self.position);
        let id = self.surface.subscribe(move |event| {
            // Re-measure per event; skip events while the region is
            // transiently unmeasurable.
            if let Some(bounds) = region.bounds() {
                *position.lock() = Position::new(
                    event.client_x - bounds.left,
                    event.client_y - bounds.top,
                );
            }
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

    /// Most recent region-relative position, `{0,0}` before any event.
    pub fn position(&self) -> Position {
        *self.position.lock()
    }

    /// Whether a listener is currently installed.
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

impl Drop for RegionTracker {
    fn drop(&mut self) {
        self.detach();
    }
}
