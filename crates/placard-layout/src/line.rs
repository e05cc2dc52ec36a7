//! Greedy line packing and column fill.
//!
//! Wrapping iterates by Unicode code point, not grapheme cluster; a
//! combining sequence may wrap mid-cluster. Swapping in a cluster-aware
//! measurement provider is the only sanctioned way to change that.

use placard_core::{
    AssetCatalog, AssetId, AssetPlacement, DrawableHandle, GlyphPlacement, LayoutConfig,
    Placement, Rect, TextMeasurer, Token, ASSET_HEIGHT_FACTOR, FIT_EPSILON,
};
use smallvec::SmallVec;

/// One placed unit within a line before column assignment.
#[derive(Debug, Clone)]
pub(crate) struct Run {
    pub kind: RunKind,
    pub width: f64,
    /// Extent above the baseline. An asset's whole box counts as ascent.
    pub ascent: f64,
    /// Extent below the baseline. Always 0 for assets.
    pub descent: f64,
}

#[derive(Debug, Clone)]
pub(crate) enum RunKind {
    Glyph(char),
    Asset { id: AssetId, drawable: DrawableHandle },
}

/// A wrapped line with its accumulated metrics.
#[derive(Debug, Clone)]
pub(crate) struct LineBox {
    pub runs: SmallVec<[Run; 8]>,
    /// Sum of run widths.
    pub width: f64,
    /// Maximum run ascent.
    pub ascent: f64,
    /// Maximum run descent.
    pub descent: f64,
    /// `max(font_size * line_height_ratio, ascent + descent)`; never
    /// decreases as runs are appended.
    pub height: f64,
}

impl LineBox {
    fn new(base_height: f64) -> Self {
        Self {
            runs: SmallVec::new(),
            width: 0.0,
            ascent: 0.0,
            descent: 0.0,
            height: base_height,
        }
    }
}

/// Line accumulation state threaded through the wrap loop.
struct LineBuilder {
    column_width: f64,
    base_height: f64,
    lines: Vec<LineBox>,
    current: LineBox,
}

impl LineBuilder {
    fn new(column_width: f64, base_height: f64) -> Self {
        Self {
            column_width,
            base_height,
            lines: Vec::new(),
            current: LineBox::new(base_height),
        }
    }

    /// Append a run, wrapping first when it would not fit and the line is
    /// not empty. A run wider than the column still lands alone on a line.
    fn push_run(&mut self, run: Run) {
        if self.current.width + run.width > self.column_width && !self.current.runs.is_empty() {
            self.break_line();
        }
        self.current.width += run.width;
        self.current.ascent = self.current.ascent.max(run.ascent);
        self.current.descent = self.current.descent.max(run.descent);
        self.current.height = self
            .base_height
            .max(self.current.ascent + self.current.descent);
        self.current.runs.push(run);
    }

    /// Close the current line unconditionally, even when empty.
    fn break_line(&mut self) {
        let finished = std::mem::replace(&mut self.current, LineBox::new(self.base_height));
        self.lines.push(finished);
    }

    fn finish(mut self) -> Vec<LineBox> {
        if !self.current.runs.is_empty() {
            self.break_line();
        }
        self.lines
    }
}

/// Wrap a token sequence into lines for one column width and font size.
pub(crate) fn wrap_tokens(
    tokens: &[Token],
    assets: &AssetCatalog,
    config: &LayoutConfig,
    font_size: f64,
    column_width: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<LineBox> {
    let base_height = font_size * config.line_height;
    let mut builder = LineBuilder::new(column_width, base_height);

    for token in tokens {
        match token {
            Token::Text(text) => {
                for ch in text.chars() {
                    if ch == '\n' {
                        builder.break_line();
                        continue;
                    }
                    let metrics = measurer.measure(ch, &config.font_family, font_size);
                    builder.push_run(Run {
                        kind: RunKind::Glyph(ch),
                        width: metrics.width,
                        ascent: metrics.resolved_ascent(font_size),
                        descent: metrics.resolved_descent(font_size),
                    });
                }
            }
            Token::Asset(id) => {
                let Some(asset) = assets.get(id.as_str()) else {
                    continue;
                };
                let mut height = font_size * ASSET_HEIGHT_FACTOR;
                let mut width = height * asset.aspect_ratio();
                if width > column_width {
                    let shrink = column_width / width;
                    width = column_width;
                    height *= shrink;
                }
                builder.push_run(Run {
                    kind: RunKind::Asset {
                        id: asset.id.clone(),
                        drawable: asset.drawable,
                    },
                    width,
                    ascent: height,
                    descent: 0.0,
                });
            }
        }
    }

    builder.finish()
}

/// Pour wrapped lines into up to `columns` columns of the safe region.
///
/// Returns the ordered placements plus the cumulative content height per
/// populated column, or `None` when the lines do not fit.
pub(crate) fn fill_columns(
    lines: &[LineBox],
    safe: Rect,
    columns: usize,
    column_width: f64,
    column_gap: f64,
) -> Option<(Vec<Placement>, Vec<f64>)> {
    let mut placements = Vec::new();
    let mut column_heights = Vec::new();
    let mut column = 0usize;
    let mut cursor = 0.0f64;

    for line in lines {
        if cursor + line.height > safe.height + FIT_EPSILON {
            // A line taller than the region cannot fit in any column.
            if cursor == 0.0 || line.height > safe.height + FIT_EPSILON {
                return None;
            }
            column_heights.push(cursor);
            column += 1;
            if column == columns {
                return None;
            }
            cursor = 0.0;
        }

        let line_top = safe.y + cursor;
        let slack = line.height - (line.ascent + line.descent);
        let baseline = line_top + slack / 2.0 + line.ascent;
        let mut pen = safe.x + column as f64 * (column_width + column_gap);

        for run in &line.runs {
            match &run.kind {
                RunKind::Glyph(ch) => placements.push(Placement::Glyph(GlyphPlacement {
                    ch: *ch,
                    x: pen,
                    y: line_top,
                    width: run.width,
                    height: line.height,
                    baseline,
                    line_height: line.height,
                    column,
                })),
                RunKind::Asset { id, drawable } => {
                    placements.push(Placement::Asset(AssetPlacement {
                        id: id.clone(),
                        drawable: *drawable,
                        x: pen,
                        y: line_top,
                        width: run.width,
                        height: run.ascent,
                        baseline,
                        line_height: line.height,
                        column,
                    }))
                }
            }
            pen += run.width;
        }

        cursor += line.height;
    }

    if cursor > 0.0 {
        column_heights.push(cursor);
    }

    Some((placements, column_heights))
}
