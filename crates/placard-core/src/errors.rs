//! Error types for the Placard engine.
//!
//! Layout infeasibility is never an error; it is reported through the
//! warning strings on [`crate::LayoutResult`]. Only malformed configuration
//! surfaces as a typed error.

use thiserror::Error;

/// Errors raised by [`crate::LayoutConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("font size must be positive, got {size}")]
    NonPositiveFontSize { size: f64 },

    #[error("minimum font size {min} exceeds starting font size {max}")]
    InvertedFontRange { min: f64, max: f64 },

    #[error("line height ratio must be positive, got {ratio}")]
    NonPositiveLineHeight { ratio: f64 },

    #[error("max columns must be at least 1")]
    ZeroMaxColumns,

    #[error("column gap must not be negative, got {gap}")]
    NegativeColumnGap { gap: f64 },
}
