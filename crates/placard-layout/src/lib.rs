//! Column layout search and geometry for Placard captions.
//!
//! This crate turns a token sequence into exact per-glyph placements inside
//! a region of the canvas left free by a foreground cutout.
//!
//! # Architecture
//!
//! 1. **Geometry**: compute the cutout rectangle and carve the text-safe
//!    region around it
//! 2. **Line packing**: greedy per-character wrap into lines, lines poured
//!    into columns
//! 3. **Search**: try column counts ascending and font sizes descending;
//!    the first feasible combination wins
//! 4. **Post-processing**: align the block against the cutout, then apply
//!    the user offset and flag boundary violations
//!
//! # Example
//!
//! ```ignore
//! use placard_layout::{compute_safe_rect, compute_layout};
//!
//! let safe = compute_safe_rect(canvas, Some(cutout), 40.0, 20.0);
//! let result = compute_layout(&tokens, &assets, &config, safe, true, &measurer);
//! ```

mod align;
mod geometry;
mod line;
mod search;

pub use align::{align_to_cutout, apply_user_offset, OFFSET_WARNING};
pub use geometry::{
    compute_character_rect, compute_safe_rect, CharacterOptions, BLEED_X_FRACTION,
    BLEED_Y_FRACTION, MAX_CHARACTER_WIDTH_FRACTION, MIN_OUTER_INSET, MIN_REGION_SIDE,
};
pub use search::{compute_layout, DEGENERATE_REGION_WARNING, NO_FIT_WARNING};
