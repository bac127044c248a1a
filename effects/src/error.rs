//! Error type for effect contract violations.

/// Errors raised when a caller hands an effect invalid input.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EffectsError {
    #[error("invalid bounds {width}x{height}: dimensions must be finite and non-negative")]
    InvalidBounds { width: f64, height: f64 },
}
