//! Rate limiting for wrapped actions
//!
//! Two coalescing strategies for high-frequency call sites (resize handlers,
//! pointer movement, text input):
//!
//! - [`Debouncer`]: defer until a quiet window elapses, keeping only the
//!   latest arguments.
//! - [`Throttler`]: run immediately, then drop everything until a cooldown
//!   expires.

pub mod debounce;
pub mod throttle;

pub use debounce::Debouncer;
pub use throttle::{ThrottleDecision, Throttler};
