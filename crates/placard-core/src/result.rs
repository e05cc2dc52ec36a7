//! Placements, layout results, and the warning list.

use crate::asset::{AssetId, DrawableHandle};
use crate::types::Rect;

/// A placed glyph: one Unicode code point with exact pixel geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphPlacement {
    pub ch: char,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// Shared line height of the line this glyph sits on.
    pub height: f64,
    /// Absolute y of the text baseline.
    pub baseline: f64,
    pub line_height: f64,
    /// Index of the column this glyph was packed into.
    pub column: usize,
}

/// A placed asset box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPlacement {
    pub id: AssetId,
    pub drawable: DrawableHandle,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// The asset box's own height, not the line height.
    pub height: f64,
    pub baseline: f64,
    pub line_height: f64,
    pub column: usize,
}

/// One placed unit of the accepted layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    Glyph(GlyphPlacement),
    Asset(AssetPlacement),
}

impl Placement {
    pub fn x(&self) -> f64 {
        match self {
            Placement::Glyph(g) => g.x,
            Placement::Asset(a) => a.x,
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            Placement::Glyph(g) => g.y,
            Placement::Asset(a) => a.y,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            Placement::Glyph(g) => g.column,
            Placement::Asset(a) => a.column,
        }
    }

    /// The occupied box of this placement.
    pub fn bounds(&self) -> Rect {
        match self {
            Placement::Glyph(g) => Rect::new(g.x, g.y, g.width, g.height),
            Placement::Asset(a) => Rect::new(a.x, a.y, a.width, a.height),
        }
    }

    /// Translate the placement. The baseline moves with the y component.
    pub fn shift(&mut self, dx: f64, dy: f64) {
        match self {
            Placement::Glyph(g) => {
                g.x += dx;
                g.y += dy;
                g.baseline += dy;
            }
            Placement::Asset(a) => {
                a.x += dx;
                a.y += dy;
                a.baseline += dy;
            }
        }
    }
}

/// An ordered list of distinct human-readable warning messages.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Warnings {
    messages: Vec<String>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message unless an equal one is already present.
    /// Returns true when the message was added.
    pub fn push(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if self.messages.contains(&message) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Append every message from `other` that is not already present,
    /// preserving order.
    pub fn merge(&mut self, other: &Warnings) {
        for message in &other.messages {
            self.push(message.clone());
        }
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The outcome of one layout search.
///
/// Infeasibility is not an error: `success = false` plus warnings describes
/// why nothing fit. A successful result's placements are ordered
/// top-to-bottom, left-to-right within each column, columns left to right.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    pub success: bool,
    pub placements: Vec<Placement>,
    /// Chosen font size; 0.0 on failure.
    pub font_size: f64,
    /// Chosen column count; 0 on failure.
    pub columns: usize,
    /// Cumulative content height of each populated column.
    pub column_heights: Vec<f64>,
    pub warnings: Warnings,
}

impl LayoutResult {
    /// A failed result carrying the accumulated warnings.
    pub fn failure(warnings: Warnings) -> Self {
        Self {
            success: false,
            warnings,
            ..Default::default()
        }
    }

    /// Union bounding box of all placements, or None when there are none.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut iter = self.placements.iter();
        let first = iter.next()?.bounds();
        Some(iter.fold(first, |acc, p| acc.union(&p.bounds())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_deduplicate() {
        let mut w = Warnings::new();
        assert!(w.push("too narrow"));
        assert!(!w.push("too narrow"));
        assert!(w.push("overflow"));
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_warnings_merge_keeps_order_and_distinctness() {
        let mut a = Warnings::new();
        a.push("first");
        a.push("second");
        let mut b = Warnings::new();
        b.push("second");
        b.push("third");
        a.merge(&b);
        let collected: Vec<&str> = a.iter().collect();
        assert_eq!(collected, ["first", "second", "third"]);
    }

    #[test]
    fn test_placement_shift_moves_baseline() {
        let mut p = Placement::Glyph(GlyphPlacement {
            ch: 'a',
            x: 10.0,
            y: 20.0,
            width: 8.0,
            height: 16.0,
            baseline: 32.0,
            line_height: 16.0,
            column: 0,
        });
        p.shift(5.0, 7.0);
        assert_eq!(p.x(), 15.0);
        assert_eq!(p.y(), 27.0);
        match p {
            Placement::Glyph(g) => assert_eq!(g.baseline, 39.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_bounding_box_unions_placements() {
        let result = LayoutResult {
            success: true,
            placements: vec![
                Placement::Glyph(GlyphPlacement {
                    ch: 'a',
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    height: 10.0,
                    baseline: 8.0,
                    line_height: 10.0,
                    column: 0,
                }),
                Placement::Glyph(GlyphPlacement {
                    ch: 'b',
                    x: 40.0,
                    y: 30.0,
                    width: 10.0,
                    height: 10.0,
                    baseline: 38.0,
                    line_height: 10.0,
                    column: 0,
                }),
            ],
            font_size: 10.0,
            columns: 1,
            column_heights: vec![40.0],
            warnings: Warnings::new(),
        };
        assert_eq!(result.bounding_box(), Some(Rect::new(0.0, 0.0, 50.0, 40.0)));
        assert_eq!(LayoutResult::default().bounding_box(), None);
    }
}
