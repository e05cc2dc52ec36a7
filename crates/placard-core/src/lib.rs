//! Core types and measurement providers for the Placard layout engine.
//!
//! This crate provides the foundational types used across all other placard crates:
//! - Geometry primitives (sizes, rectangles, colors)
//! - Assets and the ordered asset catalog
//! - Caption tokens
//! - Layout configuration and its validation errors
//! - Placements, layout results, and the warning list
//! - The text-measurement provider trait and bundled providers

pub mod asset;
pub mod config;
pub mod errors;
pub mod measure;
pub mod result;
pub mod token;
pub mod types;

pub use asset::*;
pub use config::*;
pub use errors::*;
pub use measure::*;
pub use result::*;
pub use token::*;
pub use types::*;
