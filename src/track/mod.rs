//! Pointer position tracking
//!
//! A [`PointerSurface`] is the movement-event source: the embedding UI layer
//! dispatches one [`PointerEvent`] per physical movement and trackers
//! subscribe to it. [`RegionTracker`] reports coordinates relative to a
//! bounded region (re-measured per event via [`RegionHandle`]);
//! [`PageTracker`] reports coordinates relative to the full scrollable
//! document.

pub mod page;
pub mod region;
pub mod surface;
pub mod types;

pub use page::PageTracker;
pub use region::{RegionHandle, RegionTracker};
pub use surface::{PointerSurface, SubscriptionId};
pub use types::{PointerEvent, Position, RegionBounds};
