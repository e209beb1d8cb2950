//! Loader configuration errors.

use thiserror::Error;

/// Errors surfaced when building a loader from its configuration
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LoaderError {
    /// A zero cycle duration would leave the completion clock undefined
    #[error("animation duration must be non-zero")]
    ZeroDuration,
}
