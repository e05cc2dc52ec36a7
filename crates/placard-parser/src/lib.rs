//! Caption markup tokenizer.
//!
//! Turns raw caption text with inline `[[asset:<id>]]` markers into the
//! ordered [`placard_core::Token`] sequence the layout search consumes.
//!
//! Tokenizing never fails: markers that reference an unregistered asset,
//! or that are malformed, degrade to plain text.
//!
//! # Example
//!
//! ```ignore
//! use placard_parser::tokenize;
//!
//! let tokens = tokenize("hello [[asset:star]]!", &catalog);
//! ```

mod marker;
mod tokenize;

pub use marker::{asset_marker, MARKER_PREFIX, MARKER_SUFFIX};
pub use tokenize::tokenize;
