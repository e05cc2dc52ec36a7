//! The caption pipeline, end to end.

use glam::DVec2;
use placard_core::{AssetCatalog, ConfigError, LayoutConfig, LayoutResult, Rect, Size,
    TextMeasurer, Warnings};
use placard_layout::{
    align_to_cutout, apply_user_offset, compute_character_rect, compute_safe_rect,
    compute_layout, CharacterOptions,
};
use placard_parser::tokenize;

/// The foreground cutout input: the image's natural size plus placement
/// options. The image itself stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterSource {
    pub natural: Size,
    pub options: CharacterOptions,
}

/// Everything one composition needs.
#[derive(Debug, Clone)]
pub struct SceneRequest {
    /// Caption text with inline `[[asset:<id>]]` markers.
    pub text: String,
    pub assets: AssetCatalog,
    pub config: LayoutConfig,
    pub canvas: Size,
    pub character: Option<CharacterSource>,
    /// Inset between canvas edge and the outer text rect, per side.
    pub outer_padding: f64,
    /// Buffer kept clear between the cutout and the safe region.
    pub safe_padding: f64,
    pub multi_column: bool,
    pub user_offset: DVec2,
}

impl SceneRequest {
    pub fn new(text: impl Into<String>, canvas: Size) -> Self {
        Self {
            text: text.into(),
            assets: AssetCatalog::new(),
            config: LayoutConfig::default(),
            canvas,
            character: None,
            outer_padding: 40.0,
            safe_padding: 20.0,
            multi_column: true,
            user_offset: DVec2::ZERO,
        }
    }
}

/// The composed scene: geometry, the accepted (or failed) layout, and the
/// union of all warnings. Immutable once returned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneComputation {
    pub safe_rect: Rect,
    pub character_rect: Option<Rect>,
    pub layout: LayoutResult,
    pub warnings: Warnings,
}

/// Run the pipeline: cutout rect, safe rect, tokenize, search, align,
/// user offset.
///
/// Only a malformed config is an error; an infeasible layout comes back as
/// `layout.success = false` with its warnings echoed at the scene level.
pub fn compose(
    request: &SceneRequest,
    measurer: &dyn TextMeasurer,
) -> Result<SceneComputation, ConfigError> {
    request.config.validate()?;

    let character_rect = request
        .character
        .as_ref()
        .map(|c| compute_character_rect(request.canvas, c.natural, &c.options));
    let safe_rect = compute_safe_rect(
        request.canvas,
        character_rect,
        request.outer_padding,
        request.safe_padding,
    );

    let tokens = tokenize(&request.text, &request.assets);
    let mut layout = compute_layout(
        &tokens,
        &request.assets,
        &request.config,
        safe_rect,
        request.multi_column,
        measurer,
    );

    if layout.success {
        align_to_cutout(&mut layout, safe_rect, character_rect);
        apply_user_offset(&mut layout, safe_rect, request.user_offset);
    }

    let mut warnings = Warnings::new();
    warnings.merge(&layout.warnings);

    Ok(SceneComputation {
        safe_rect,
        character_rect,
        layout,
        warnings,
    })
}
