//! Post-processing: cutout alignment and the user offset.

use glam::DVec2;
use placard_core::{LayoutResult, Rect};

/// Warning recorded when the user offset pushes the caption outside the
/// safe region.
pub const OFFSET_WARNING: &str = "caption extends beyond the text-safe region";

/// Vertically align a successful layout against the cutout.
///
/// The block's target top is the cutout's top edge (the safe top when there
/// is no cutout), clamped into the safe region's vertical span. The shift is
/// capped by the slack left below the tallest column, then applied to every
/// placement in one pass — no re-packing.
pub fn align_to_cutout(result: &mut LayoutResult, safe: Rect, cutout: Option<Rect>) {
    let max_column_height = result
        .column_heights
        .iter()
        .copied()
        .fold(0.0f64, f64::max);

    let target_top = cutout
        .map_or(safe.y, |c| c.y)
        .clamp(safe.y, safe.bottom());
    let desired = (target_top - safe.y).max(0.0);
    let offset = desired.min((safe.height - max_column_height).max(0.0));

    if offset > 0.0 {
        for placement in &mut result.placements {
            placement.shift(0.0, offset);
        }
    }
}

/// Apply the caller-supplied offset to every placement.
///
/// The bounding box of all placements is recomputed once afterwards; if any
/// edge escapes the safe region, a single warning is appended (skipped when
/// an equal message is already present).
pub fn apply_user_offset(result: &mut LayoutResult, safe: Rect, offset: DVec2) {
    for placement in &mut result.placements {
        placement.shift(offset.x, offset.y);
    }

    if let Some(bounds) = result.bounding_box() {
        if !safe.contains_rect(&bounds) {
            result.warnings.push(OFFSET_WARNING);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_core::{GlyphPlacement, Placement, Warnings};

    fn glyph(x: f64, y: f64, width: f64, height: f64) -> Placement {
        Placement::Glyph(GlyphPlacement {
            ch: 'a',
            x,
            y,
            width,
            height,
            baseline: y + height * 0.8,
            line_height: height,
            column: 0,
        })
    }

    fn result_with(placements: Vec<Placement>, column_heights: Vec<f64>) -> LayoutResult {
        LayoutResult {
            success: true,
            placements,
            font_size: 20.0,
            columns: 1,
            column_heights,
            warnings: Warnings::new(),
        }
    }

    #[test]
    fn test_align_shifts_down_to_cutout_top() {
        let safe = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut result = result_with(vec![glyph(0.0, 0.0, 10.0, 20.0)], vec![40.0]);
        align_to_cutout(&mut result, safe, Some(Rect::new(50.0, 30.0, 40.0, 40.0)));
        assert_eq!(result.placements[0].y(), 30.0);
        match &result.placements[0] {
            Placement::Glyph(g) => assert_eq!(g.baseline, 46.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_align_capped_by_column_slack() {
        let safe = Rect::new(0.0, 0.0, 100.0, 100.0);
        // 80px of content leaves only 20px of slack.
        let mut result = result_with(vec![glyph(0.0, 0.0, 10.0, 20.0)], vec![80.0]);
        align_to_cutout(&mut result, safe, Some(Rect::new(50.0, 60.0, 40.0, 40.0)));
        assert_eq!(result.placements[0].y(), 20.0);
    }

    #[test]
    fn test_align_noop_without_cutout_or_above_top() {
        let safe = Rect::new(10.0, 10.0, 100.0, 100.0);
        let mut result = result_with(vec![glyph(10.0, 10.0, 10.0, 20.0)], vec![40.0]);
        align_to_cutout(&mut result, safe, None);
        assert_eq!(result.placements[0].y(), 10.0);
        // A cutout starting above the safe top clamps to zero shift.
        align_to_cutout(&mut result, safe, Some(Rect::new(0.0, 0.0, 40.0, 5.0)));
        assert_eq!(result.placements[0].y(), 10.0);
    }

    #[test]
    fn test_offset_moves_placements_and_baseline() {
        let safe = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut result = result_with(vec![glyph(10.0, 10.0, 10.0, 20.0)], vec![30.0]);
        apply_user_offset(&mut result, safe, DVec2::new(5.0, 8.0));
        assert_eq!(result.placements[0].x(), 15.0);
        assert_eq!(result.placements[0].y(), 18.0);
        match &result.placements[0] {
            Placement::Glyph(g) => assert_eq!(g.baseline, 34.0),
            _ => unreachable!(),
        }
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_offset_outside_safe_warns_once() {
        let safe = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut result = result_with(vec![glyph(10.0, 10.0, 10.0, 20.0)], vec![30.0]);
        apply_user_offset(&mut result, safe, DVec2::new(0.0, 85.0));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings.contains(OFFSET_WARNING));
        // A second pass pushes further out but must not duplicate.
        apply_user_offset(&mut result, safe, DVec2::new(0.0, 85.0));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_offset_with_no_placements_never_warns() {
        let safe = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut result = result_with(vec![], vec![]);
        apply_user_offset(&mut result, safe, DVec2::new(500.0, 500.0));
        assert!(result.warnings.is_empty());
    }
}
