use serde::{Deserialize, Serialize};

/// A 2D point in some reference frame (region-local or page-local).
///
/// Immutable once produced; trackers replace the whole value on every
/// observed movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A region's bounding box in viewport coordinates.
///
/// The `getBoundingClientRect()` equivalent delivered by a
/// [`RegionHandle`](crate::track::RegionHandle), queried fresh per event so
/// tracking stays correct across scrolling and resizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One physical pointer movement.
///
/// Carries both coordinate frames of the underlying event: `client_*` is
/// viewport-relative, `page_*` is document-relative (includes scroll
/// offset).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    /// Event for an unscrolled document, where page and viewport coordinates
    /// coincide.
    pub fn unscrolled(x: f64, y: f64) -> Self {
        Self {
            client_x: x,
            client_y: y,
            page_x: x,
            page_y: y,
        }
    }
}
