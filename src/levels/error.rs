//! Error type for the level detection module.

use thiserror::Error;

/// Configuration errors raised before any scan runs.
///
/// A series too short for the requested window is deliberately NOT an
/// error; it yields empty pivot lists instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    /// A window length (`n1`, `n2`, or a rolling window) was zero.
    #[error("window parameter `{name}` must be at least 1, got {value}")]
    InvalidWindow { name: &'static str, value: usize },

    /// Sensitivity was negative or not a finite number.
    #[error("sensitivity must be a non-negative finite number, got {value}")]
    InvalidSensitivity { value: f64 },
}
