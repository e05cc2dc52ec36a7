//! Cutout and safe-region geometry.

use glam::DVec2;
use placard_core::{Rect, Size};
use smallvec::SmallVec;
use tracing::debug;

/// The cutout never takes more than this fraction of the canvas width.
pub const MAX_CHARACTER_WIDTH_FRACTION: f64 = 0.9;

/// Horizontal bleed: the cutout may extend this fraction of its own width
/// past the canvas edge.
pub const BLEED_X_FRACTION: f64 = 0.25;

/// Vertical bleed: the cutout may extend this fraction of its own height
/// past the canvas edge.
pub const BLEED_Y_FRACTION: f64 = 0.1;

/// Safe-region candidates thinner than this on either side are discarded.
pub const MIN_REGION_SIDE: f64 = 20.0;

/// Floor on the outer inset between canvas edge and safe region.
pub const MIN_OUTER_INSET: f64 = 10.0;

/// Placement options for the foreground cutout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterOptions {
    /// Cutout width as a fraction of canvas width, capped at 0.9.
    pub scale: f64,
    /// User-controlled nudge from the anchored position, in pixels.
    pub offset: DVec2,
    /// Distance from the bottom-right canvas corner at zero offset.
    pub margin: f64,
}

impl Default for CharacterOptions {
    fn default() -> Self {
        Self {
            scale: 0.5,
            offset: DVec2::ZERO,
            margin: 50.0,
        }
    }
}

/// Compute the rectangle occupied by the foreground cutout.
///
/// The cutout anchors to the bottom-right corner minus the margin, shifted
/// by the user offset, then clamped so it may intentionally bleed past the
/// canvas edges by a bounded fraction of its own size.
pub fn compute_character_rect(canvas: Size, natural: Size, options: &CharacterOptions) -> Rect {
    let width = (canvas.width * MAX_CHARACTER_WIDTH_FRACTION).min(canvas.width * options.scale);
    let height = width / natural.aspect_ratio();

    let x = canvas.width - width - options.margin + options.offset.x;
    let y = canvas.height - height - options.margin + options.offset.y;

    let x = x.clamp(
        -width * BLEED_X_FRACTION,
        canvas.width - width * (1.0 - BLEED_X_FRACTION),
    );
    let y = y.clamp(
        -height * BLEED_Y_FRACTION,
        canvas.height - height * BLEED_Y_FRACTION,
    );

    Rect::new(x, y, width, height)
}

/// Carve the text-safe region out of the canvas.
///
/// The outer rect insets the canvas by `outer_padding` (at least 10px) per
/// side. With no cutout it is returned as-is. With one, the largest of the
/// left-of / above / right-of candidates wins, each kept `safe_padding`
/// clear of the cutout; a candidate replaces the incumbent only when its
/// area is strictly greater, so earlier candidates win ties. When every
/// candidate is thinner than 20px, the full outer rect is returned even
/// though it overlaps the cutout — an accepted degraded mode, reported via
/// tracing rather than a warning.
pub fn compute_safe_rect(
    canvas: Size,
    character: Option<Rect>,
    outer_padding: f64,
    safe_padding: f64,
) -> Rect {
    let inset = outer_padding.max(MIN_OUTER_INSET);
    let outer = Rect::new(0.0, 0.0, canvas.width, canvas.height).inset(inset);

    let Some(cutout) = character else {
        return outer;
    };

    let left_edge = (cutout.x - safe_padding).min(outer.right());
    let top_edge = (cutout.y - safe_padding).min(outer.bottom());
    let right_edge = (cutout.right() + safe_padding).max(outer.x);

    let candidates: SmallVec<[Rect; 3]> = SmallVec::from_buf([
        // Left of the cutout, full outer height.
        Rect::new(outer.x, outer.y, left_edge - outer.x, outer.height),
        // Above the cutout, full outer width.
        Rect::new(outer.x, outer.y, outer.width, top_edge - outer.y),
        // Right of the cutout, full outer height.
        Rect::new(right_edge, outer.y, outer.right() - right_edge, outer.height),
    ]);

    let mut best: Option<Rect> = None;
    for candidate in candidates {
        if candidate.width <= MIN_REGION_SIDE || candidate.height <= MIN_REGION_SIDE {
            continue;
        }
        if best.map_or(true, |b| candidate.area() > b.area()) {
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(|| {
        debug!(?cutout, "no safe-region candidate cleared the minimum; falling back to the outer rect");
        outer
    })
}
