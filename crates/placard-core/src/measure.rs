//! Text measurement providers.
//!
//! The layout core never rasterizes text; it asks an injected
//! [`TextMeasurer`] for per-character metrics. Any provider satisfying the
//! contract works: a font-metrics library, a platform shaping API, or the
//! bundled heuristic table. Providers must return deterministic values for
//! identical (character, font spec) pairs within one layout invocation —
//! the font-size search re-measures at every candidate size.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::{DEFAULT_ASCENT_RATIO, DEFAULT_DESCENT_RATIO};

/// Metrics for a single measured character, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphMetrics {
    /// Horizontal advance.
    pub width: f64,
    /// Ascent above the baseline. `None` when the provider does not know;
    /// consumers substitute `font_size * 0.8`.
    pub ascent: Option<f64>,
    /// Descent below the baseline. `None` substitutes `font_size * 0.2`.
    pub descent: Option<f64>,
}

impl GlyphMetrics {
    /// Advance-only metrics with default vertical extents.
    pub fn advance(width: f64) -> Self {
        Self {
            width,
            ascent: None,
            descent: None,
        }
    }

    /// Ascent, falling back to the fixed default ratio.
    pub fn resolved_ascent(&self, font_size: f64) -> f64 {
        self.ascent.unwrap_or(font_size * DEFAULT_ASCENT_RATIO)
    }

    /// Descent, falling back to the fixed default ratio.
    pub fn resolved_descent(&self, font_size: f64) -> f64 {
        self.descent.unwrap_or(font_size * DEFAULT_DESCENT_RATIO)
    }
}

/// A source of per-character metrics for one font family and size.
pub trait TextMeasurer {
    fn measure(&self, ch: char, font_family: &str, font_size: f64) -> GlyphMetrics;
}

/// Constant-advance provider: every character is `advance_em` of the font
/// size wide. Useful for deterministic tests and monospace approximations.
#[derive(Debug, Clone, Copy)]
pub struct FixedMeasurer {
    pub advance_em: f64,
}

impl FixedMeasurer {
    pub fn new(advance_em: f64) -> Self {
        Self { advance_em }
    }
}

impl Default for FixedMeasurer {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, _ch: char, _font_family: &str, font_size: f64) -> GlyphMetrics {
        GlyphMetrics::advance(self.advance_em * font_size)
    }
}

/// Advance width per printable ASCII character, in em units for a generic
/// proportional sans-serif. Index = (char as usize) - 32, covering
/// 0x20 (space) through 0x7E (~).
#[rustfmt::skip]
const ASCII_WIDTHS: [f64; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
    0.26, 0.29, 0.37, 0.55, 0.55, 0.88, 0.68, 0.21, 0.32, 0.32, 0.40, 0.58, 0.27, 0.33, 0.27, 0.30,
    // 0     1     2     3     4     5     6     7     8     9
    0.55, 0.55, 0.55, 0.55, 0.55, 0.55, 0.55, 0.55, 0.55, 0.55,
    // :     ;     <     =     >     ?     @
    0.27, 0.27, 0.58, 0.58, 0.58, 0.49, 1.00,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
    0.66, 0.61, 0.62, 0.67, 0.56, 0.51, 0.68, 0.68, 0.26, 0.40, 0.62, 0.52, 0.80,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
    0.68, 0.72, 0.57, 0.72, 0.61, 0.51, 0.57, 0.67, 0.65, 0.90, 0.62, 0.61, 0.57,
    // [     \     ]     ^     _     `
    0.28, 0.30, 0.28, 0.47, 0.55, 0.33,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
    0.54, 0.56, 0.49, 0.56, 0.54, 0.31, 0.56, 0.55, 0.23, 0.23, 0.52, 0.23, 0.84,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
    0.55, 0.56, 0.56, 0.56, 0.34, 0.44, 0.34, 0.55, 0.49, 0.72, 0.49, 0.49, 0.45,
    // {     |     }     ~
    0.33, 0.26, 0.33, 0.58,
];

/// Fallback em width for codepoints above 0x7E.
const AVERAGE_CHAR_WIDTH: f64 = 0.52;

/// Static-table provider for hosts without a real shaping backend.
///
/// Widths come from a generic sans-serif table; non-ASCII characters fall
/// back to an average width. Ascent/descent are left unset so consumers
/// apply the standard 0.8/0.2 defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, ch: char, _font_family: &str, font_size: f64) -> GlyphMetrics {
        let code = ch as usize;
        let em = if (0x20..=0x7E).contains(&code) {
            ASCII_WIDTHS[code - 0x20]
        } else {
            AVERAGE_CHAR_WIDTH
        };
        GlyphMetrics::advance(em * font_size)
    }
}

/// Memoizing wrapper around another provider.
///
/// Keyed by (character, font-size bits); the font family is not part of the
/// key because a layout invocation measures a single family. Backed by a
/// `RefCell` — the layout core is single-threaded by design.
pub struct CachedMeasurer<M> {
    inner: M,
    cache: RefCell<HashMap<(char, u64), GlyphMetrics>>,
}

impl<M: TextMeasurer> CachedMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct (character, size) pairs measured so far.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<M> {
    fn measure(&self, ch: char, font_family: &str, font_size: f64) -> GlyphMetrics {
        let key = (ch, font_size.to_bits());
        if let Some(metrics) = self.cache.borrow().get(&key) {
            return *metrics;
        }
        let metrics = self.inner.measure(ch, font_family, font_size);
        self.cache.borrow_mut().insert(key, metrics);
        metrics
    }
}
