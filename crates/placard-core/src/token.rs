//! Caption tokens.

use crate::asset::AssetId;

/// An indivisible unit of caption content.
///
/// A tokenized caption is an ordered, never-empty sequence of these; degenerate
/// input tokenizes to a single empty `Text` token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// A run of plain text. May contain newlines.
    Text(String),
    /// A reference to a registered inline asset.
    Asset(AssetId),
}

impl Token {
    pub fn text(s: impl Into<String>) -> Self {
        Token::Text(s.into())
    }

    pub fn asset(id: impl Into<String>) -> Self {
        Token::Asset(AssetId::new(id))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_asset(&self) -> Option<&AssetId> {
        match self {
            Token::Asset(id) => Some(id),
            _ => None,
        }
    }
}
