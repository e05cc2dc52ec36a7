//! Caption text to token sequence.

use placard_core::{AssetCatalog, Token};

use crate::marker::{asset_marker, MARKER_PREFIX, MARKER_SUFFIX};

/// Tokenize caption text against a catalog of registered assets.
///
/// The result reconstructs the input exactly: concatenating `Text` contents
/// and substituting each `Asset` token with its marker reproduces `text`.
/// Markers naming an unregistered id are preserved as their own literal
/// `Text` token. The returned sequence is never empty; degenerate input
/// yields a single empty `Text` token.
pub fn tokenize(text: &str, assets: &AssetCatalog) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if rest.starts_with(MARKER_PREFIX) {
            if let Ok((tail, id)) = asset_marker(rest) {
                flush(&mut tokens, &mut buffer);
                if assets.contains(id) {
                    tokens.push(Token::asset(id));
                } else {
                    tokens.push(Token::Text(format!("{MARKER_PREFIX}{id}{MARKER_SUFFIX}")));
                }
                rest = tail;
                continue;
            }
        }
        let Some(ch) = rest.chars().next() else {
            break;
        };
        buffer.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush(&mut tokens, &mut buffer);
    if tokens.is_empty() {
        tokens.push(Token::Text(String::new()));
    }
    tokens
}

fn flush(tokens: &mut Vec<Token>, buffer: &mut String) {
    if !buffer.is_empty() {
        tokens.push(Token::Text(std::mem::take(buffer)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_core::{Asset, DrawableHandle};

    fn catalog(ids: &[&str]) -> AssetCatalog {
        let mut catalog = AssetCatalog::new();
        for (i, id) in ids.iter().enumerate() {
            catalog.insert(Asset::new(*id, *id, 100.0, 100.0, DrawableHandle(i as u64)));
        }
        catalog
    }

    /// Inverse of `tokenize`: rebuild the source text.
    fn reconstruct(tokens: &[Token]) -> String {
        let mut out = String::new();
        for token in tokens {
            match token {
                Token::Text(s) => out.push_str(s),
                Token::Asset(id) => {
                    out.push_str(MARKER_PREFIX);
                    out.push_str(id.as_str());
                    out.push_str(MARKER_SUFFIX);
                }
            }
        }
        out
    }

    #[test]
    fn test_known_marker_splits_text() {
        let tokens = tokenize("abc[[asset:x1]]def", &catalog(&["x1"]));
        assert_eq!(
            tokens,
            vec![Token::text("abc"), Token::asset("x1"), Token::text("def")]
        );
    }

    #[test]
    fn test_unknown_marker_stays_literal() {
        let tokens = tokenize("abc[[asset:missing]]def", &catalog(&[]));
        assert_eq!(
            tokens,
            vec![
                Token::text("abc"),
                Token::text("[[asset:missing]]"),
                Token::text("def"),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_single_empty_token() {
        assert_eq!(tokenize("", &catalog(&[])), vec![Token::text("")]);
    }

    #[test]
    fn test_plain_text_is_one_token() {
        assert_eq!(
            tokenize("no markers here", &catalog(&["x1"])),
            vec![Token::text("no markers here")]
        );
    }

    #[test]
    fn test_adjacent_markers() {
        let tokens = tokenize("[[asset:a]][[asset:b]]", &catalog(&["a", "b"]));
        assert_eq!(tokens, vec![Token::asset("a"), Token::asset("b")]);
    }

    #[test]
    fn test_marker_at_ends() {
        let tokens = tokenize("[[asset:a]]mid[[asset:a]]", &catalog(&["a"]));
        assert_eq!(
            tokens,
            vec![Token::asset("a"), Token::text("mid"), Token::asset("a")]
        );
    }

    #[test]
    fn test_malformed_markers_are_text() {
        let assets = catalog(&["x1"]);
        assert_eq!(
            tokenize("[[asset:]]", &assets),
            vec![Token::text("[[asset:]]")]
        );
        assert_eq!(
            tokenize("[[asset:x1", &assets),
            vec![Token::text("[[asset:x1")]
        );
        assert_eq!(
            tokenize("[[asset:a]b]]", &assets),
            vec![Token::text("[[asset:a]b]]")]
        );
    }

    #[test]
    fn test_reconstruction_with_mixed_content() {
        let assets = catalog(&["x1"]);
        let input = "a [[asset:x1]] b [[asset:nope]] c\nd";
        assert_eq!(reconstruct(&tokenize(input, &assets)), input);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tokenize_reconstructs_input(text in "[a-z :\\[\\]!]{0,64}") {
                let assets = catalog(&["x1", "x2"]);
                let tokens = tokenize(&text, &assets);
                prop_assert!(!tokens.is_empty());
                prop_assert_eq!(reconstruct(&tokens), text);
            }

            #[test]
            fn tokenize_reconstructs_with_embedded_markers(
                prefix in "[a-z ]{0,16}",
                id in prop::sample::select(vec!["x1", "x2", "nope"]),
                suffix in "[a-z ]{0,16}",
            ) {
                let assets = catalog(&["x1", "x2"]);
                let input = format!("{prefix}[[asset:{id}]]{suffix}");
                let tokens = tokenize(&input, &assets);
                prop_assert_eq!(reconstruct(&tokens), input);
                let expected_asset = assets.contains(id);
                let has_asset = tokens.iter().any(|t| t.as_asset().is_some());
                prop_assert_eq!(has_asset, expected_asset);
            }
        }
    }
}
