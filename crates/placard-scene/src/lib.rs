//! Scene composition and the renderer boundary.
//!
//! This crate runs the full caption pipeline in order — cutout rect, safe
//! rect, tokenize, layout search, alignment, user offset — and aggregates
//! the result into a [`SceneComputation`]. It also defines the [`Renderer`]
//! trait hosts implement to draw the placements; no drawing happens here.

mod compose;
mod render;

pub use compose::{compose, CharacterSource, SceneComputation, SceneRequest};
pub use render::{render_scene, Renderer, TextPaint};
