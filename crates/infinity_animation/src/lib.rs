//! Infinity Loader Animation
//!
//! Easing curves and the repeating transition that maps elapsed time to the
//! loader's completion value in `[0, 2)`. Pure math with no scheduler: the
//! host's frame driver supplies elapsed time, this crate supplies the value.

pub mod easing;
pub mod transition;

pub use easing::Easing;
pub use transition::{completion_at, InfiniteTransition};
