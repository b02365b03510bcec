//! pointer-kit - Pointer tracking and event coalescing, made simple.
//!
//! This crate provides the two pieces of UI plumbing that have real temporal
//! semantics: rate limiting of callbacks ([`Debouncer`], [`Throttler`]) and
//! pointer-position tracking against a movement-event source
//! ([`RegionTracker`], [`PageTracker`]), plus a handful of value-level
//! helpers in [`util`].
//!
//! The embedding UI layer owns the event loop: it drives a
//! [`PointerSurface`] with movement events and calls attach/detach as its
//! widgets mount and unmount. Debounce timers run on the ambient tokio
//! runtime; everything else is synchronous callback dispatch.

pub mod limit;
pub mod track;
pub mod util;

pub use limit::{Debouncer, ThrottleDecision, Throttler};
pub use track::{
    PageTracker, PointerEvent, PointerSurface, Position, RegionBounds, RegionHandle,
    RegionTracker, SubscriptionId,
};
