//! Column-count and font-size search.

use placard_core::{
    AssetCatalog, LayoutConfig, LayoutResult, Rect, TextMeasurer, Token, Warnings,
    FONT_SIZE_STEP, MIN_COLUMN_WIDTH,
};
use tracing::{debug, trace};

use crate::line::{fill_columns, wrap_tokens};

/// Warning recorded when the safe region has no area at all.
pub const DEGENERATE_REGION_WARNING: &str = "text region has no usable area";

/// Generic fallback when the search exhausts every combination without a
/// more specific cause.
pub const NO_FIT_WARNING: &str =
    "content does not fit; reduce the text or lower the minimum font size";

/// Find the first feasible (column count, font size) combination.
///
/// Column counts are tried ascending (only 1 when `multi_column` is off),
/// font sizes descending from `config.font_size` in steps of 2 down to
/// `config.min_font_size`. The first success wins, so the result uses the
/// fewest columns and, at that count, the largest font size. Failure is
/// reported through `success = false` plus the warnings accumulated across
/// every attempted combination.
pub fn compute_layout(
    tokens: &[Token],
    assets: &AssetCatalog,
    config: &LayoutConfig,
    safe: Rect,
    multi_column: bool,
    measurer: &dyn TextMeasurer,
) -> LayoutResult {
    let mut warnings = Warnings::new();

    // Short-circuit before any measurement.
    if safe.width <= 0.0 || safe.height <= 0.0 {
        warnings.push(DEGENERATE_REGION_WARNING);
        return LayoutResult::failure(warnings);
    }

    let max_columns = if multi_column {
        config.max_columns.max(1)
    } else {
        1
    };

    for columns in 1..=max_columns {
        let column_width =
            (safe.width - config.column_gap * (columns as f64 - 1.0)) / columns as f64;
        if column_width < MIN_COLUMN_WIDTH {
            warnings.push(format!(
                "{columns} column(s) would be narrower than the {MIN_COLUMN_WIDTH}px minimum"
            ));
            continue;
        }

        let mut font_size = config.font_size;
        let mut attempted = false;
        while font_size >= config.min_font_size {
            attempted = true;
            let lines = wrap_tokens(tokens, assets, config, font_size, column_width, measurer);
            if let Some((placements, column_heights)) =
                fill_columns(&lines, safe, columns, column_width, config.column_gap)
            {
                trace!(columns, font_size, "layout fits");
                return LayoutResult {
                    success: true,
                    placements,
                    font_size,
                    columns,
                    column_heights,
                    warnings,
                };
            }
            trace!(columns, font_size, "layout attempt overflowed");
            font_size -= FONT_SIZE_STEP;
        }
        if attempted {
            warnings.push(format!(
                "content overflows {columns} column(s) even at the minimum font size"
            ));
        }
    }

    if warnings.is_empty() {
        warnings.push(NO_FIT_WARNING);
    }
    debug!(?safe, "no feasible layout found");
    LayoutResult::failure(warnings)
}
