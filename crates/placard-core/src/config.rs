//! Layout configuration and the fixed tuning constants.

use crate::errors::ConfigError;
use crate::types::Color;

/// Tolerance when comparing a column's content height against the region
/// height. Accumulated f64 line heights may land a hair past the edge.
pub const FIT_EPSILON: f64 = 0.5;

/// Ascent assumed for a run whose measurement carries none, per font size.
pub const DEFAULT_ASCENT_RATIO: f64 = 0.8;

/// Descent assumed for a run whose measurement carries none, per font size.
pub const DEFAULT_DESCENT_RATIO: f64 = 0.2;

/// Inline asset box height per font size.
pub const ASSET_HEIGHT_FACTOR: f64 = 1.05;

/// Step between candidate font sizes during the layout search.
pub const FONT_SIZE_STEP: f64 = 2.0;

/// Columns narrower than this are rejected outright.
pub const MIN_COLUMN_WIDTH: f64 = 20.0;

/// Typography and column settings for one layout call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub font_family: String,
    /// Starting (largest) font size in pixels.
    pub font_size: f64,
    /// The search never steps below this size.
    pub min_font_size: f64,
    /// Line height as a multiplier of font size (e.g., 1.2 = 120%).
    pub line_height: f64,
    /// Upper bound on the column count when multi-column search is enabled.
    pub max_columns: usize,
    /// Horizontal gap between adjacent columns, in pixels.
    pub column_gap: f64,
    pub stroke_width: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 64.0,
            min_font_size: 24.0,
            line_height: 1.2,
            max_columns: 3,
            column_gap: 24.0,
            stroke_width: 6.0,
            fill_color: Color::WHITE,
            stroke_color: Color::BLACK,
        }
    }
}

impl LayoutConfig {
    /// Validate the configuration before running a layout.
    ///
    /// These are construction errors, not layout infeasibility: a config that
    /// passes here can still produce a `success = false` result.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_size <= 0.0 {
            return Err(ConfigError::NonPositiveFontSize { size: self.font_size });
        }
        if self.min_font_size <= 0.0 {
            return Err(ConfigError::NonPositiveFontSize { size: self.min_font_size });
        }
        if self.min_font_size > self.font_size {
            return Err(ConfigError::InvertedFontRange {
                min: self.min_font_size,
                max: self.font_size,
            });
        }
        if self.line_height <= 0.0 {
            return Err(ConfigError::NonPositiveLineHeight { ratio: self.line_height });
        }
        if self.max_columns == 0 {
            return Err(ConfigError::ZeroMaxColumns);
        }
        if self.column_gap < 0.0 {
            return Err(ConfigError::NegativeColumnGap { gap: self.column_gap });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_font_range_rejected() {
        let config = LayoutConfig {
            font_size: 20.0,
            min_font_size: 40.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedFontRange { min, max }) if min == 40.0 && max == 20.0
        ));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let config = LayoutConfig {
            max_columns: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxColumns));
    }

    #[test]
    fn test_negative_gap_rejected() {
        let config = LayoutConfig {
            column_gap: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeColumnGap { .. })
        ));
    }
}
