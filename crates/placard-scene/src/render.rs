//! The renderer boundary.
//!
//! Drawing is entirely out of scope for the layout core. Hosts implement
//! [`Renderer`] against whatever surface they own (a canvas, a GPU pass, a
//! test recorder) and [`render_scene`] walks the accepted placements in
//! order, handing each one over with the paint parameters derived from the
//! config and the chosen font size.

use placard_core::{AssetPlacement, Color, GlyphPlacement, LayoutConfig, Placement};

use crate::compose::SceneComputation;

/// Paint parameters for text runs: the chosen size plus the config's
/// family, colors, and stroke width.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint<'a> {
    pub font_family: &'a str,
    /// The font size the search settled on, not the starting size.
    pub font_size: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl<'a> TextPaint<'a> {
    pub fn from_config(config: &'a LayoutConfig, font_size: f64) -> Self {
        Self {
            font_family: &config.font_family,
            font_size,
            fill_color: config.fill_color,
            stroke_color: config.stroke_color,
            stroke_width: config.stroke_width,
        }
    }
}

/// Host-implemented drawing surface.
pub trait Renderer {
    /// Draw one glyph (stroke plus fill, per the paint).
    fn draw_glyph(&mut self, glyph: &GlyphPlacement, paint: &TextPaint<'_>);
    /// Blit one asset box.
    fn draw_asset(&mut self, asset: &AssetPlacement);
}

/// Walk a composed scene's placements in order, dispatching each to the
/// renderer. A failed layout draws nothing.
pub fn render_scene<R: Renderer>(
    scene: &SceneComputation,
    config: &LayoutConfig,
    renderer: &mut R,
) {
    if !scene.layout.success {
        return;
    }
    let paint = TextPaint::from_config(config, scene.layout.font_size);
    for placement in &scene.layout.placements {
        match placement {
            Placement::Glyph(glyph) => renderer.draw_glyph(glyph, &paint),
            Placement::Asset(asset) => renderer.draw_asset(asset),
        }
    }
}
