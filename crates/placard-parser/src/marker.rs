//! Marker recognition for inline asset references.

use nom::{
    bytes::complete::{tag, take_while1},
    sequence::delimited,
    IResult,
};

/// Literal prefix of an inline asset marker.
pub const MARKER_PREFIX: &str = "[[asset:";

/// Literal suffix of an inline asset marker.
pub const MARKER_SUFFIX: &str = "]]";

/// Identifier characters: anything except the bracket delimiters.
fn is_id_char(c: char) -> bool {
    c != '[' && c != ']'
}

/// Parse one `[[asset:<id>]]` marker, returning the identifier.
///
/// The identifier must be non-empty; `[[asset:]]` is not a marker and stays
/// literal text.
pub fn asset_marker(input: &str) -> IResult<&str, &str> {
    delimited(tag(MARKER_PREFIX), take_while1(is_id_char), tag(MARKER_SUFFIX))(input)
}
