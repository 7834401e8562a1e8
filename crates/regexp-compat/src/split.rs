//! # Splitting
//!
//! Partition text into the pieces between matches.
//!
//! `n` bounds the number of pieces: `n > 0` yields at most `n`, the last
//! being the unsplit remainder; `n == 0` yields none; `n < 0` yields all.
//!
//! An empty match touching the previous match never produces a piece, so
//! `a*` over `"abaabaccadaaae"` with `n = 5` gives
//! `["", "b", "b", "c", "cadaaae"]`.
//!
//! A trailing piece is only emitted when the last match examined does not
//! start at the very end of the text. In particular an empty pattern over
//! empty text splits into no pieces, while a non-empty pattern over empty
//! text splits into one empty piece.

use core::ops::Range;

use crate::{
    alloc::{vec, vec::Vec},
    engine::RegexWrapper,
    matching::{MatchSequence, count_limit},
    view::TextView,
};

fn split_ranges(
    regex: &RegexWrapper,
    text: &str,
    n: isize,
) -> Vec<Range<usize>> {
    let limit = count_limit(n);
    if limit == Some(0) {
        return Vec::new();
    }
    if !regex.as_str().is_empty() && text.is_empty() {
        return vec![0..0];
    }

    let matches = MatchSequence::with_limit(regex, text, n).collect_partial_map(|m| m.range());

    let mut pieces = Vec::with_capacity(matches.len() + 1);
    let mut beg = 0;
    let mut end = 0;
    for m in matches {
        if let Some(limit) = limit
            && pieces.len() + 1 >= limit
        {
            break;
        }
        end = m.start;
        if m.end != 0 {
            pieces.push(beg..end);
        }
        beg = m.end;
    }
    if end != text.len() {
        pieces.push(beg..text.len());
    }
    pieces
}

/// Split `text` around the matches of `regex`.
///
/// A matching error is logged; the pieces around the matches found before
/// it are returned, with the rest of the text as the last piece.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(regex, text)))]
pub fn split<'h>(
    regex: &RegexWrapper,
    text: &'h str,
    n: isize,
) -> Vec<&'h str> {
    split_ranges(regex, text, n)
        .into_iter()
        .map(|range| &text[range])
        .collect()
}

/// Byte form of [`split`]; the pieces are sub-slices of `src`.
///
/// If `src` is not UTF-8 the diagnostic is logged and `src` is returned
/// as the only piece.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(regex, src)))]
pub fn split_bytes<'h>(
    regex: &RegexWrapper,
    src: &'h [u8],
    n: isize,
) -> Vec<&'h [u8]> {
    let view = match TextView::try_from_bytes(src) {
        Ok(view) => view,
        Err(err) => {
            log::warn!("regexp `{}`: {err}", regex.as_str());
            return if n == 0 { Vec::new() } else { vec![src] };
        }
    };
    split_ranges(regex, view.as_str(), n)
        .into_iter()
        .map(|range| view.slice(range))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        alloc::string::{String, ToString},
        engine::{CompileOptions, ConstRegexPattern, RegexPattern},
    };

    #[test]
    fn test_empty_match_pieces() {
        let re = ConstRegexPattern::Basic("a*").compile().unwrap();
        let text = "abaabaccadaaae";

        assert_eq!(split(&re, text, 5), vec!["", "b", "b", "c", "cadaaae"]);
        assert_eq!(split(&re, text, 0), Vec::<&str>::new());
        assert_eq!(split(&re, text, 1), vec![text]);
        assert_eq!(
            split(&re, text, -1),
            vec!["", "b", "b", "c", "c", "d", "e"]
        );
    }

    #[test]
    fn test_simple_separator() {
        let re = ConstRegexPattern::Basic(r"\s*,\s*").compile().unwrap();

        assert_eq!(split(&re, "a , b,c", -1), vec!["a", "b", "c"]);
        assert_eq!(split(&re, "a , b,c", 2), vec!["a", "b,c"]);
        assert_eq!(split(&re, ",a,", -1), vec!["", "a", ""]);
        assert_eq!(split(&re, "abc", -1), vec!["abc"]);
    }

    #[test]
    fn test_empty_text() {
        let re = ConstRegexPattern::Basic("x").compile().unwrap();
        assert_eq!(split(&re, "", -1), vec![""]);
        assert_eq!(split(&re, "", 0), Vec::<&str>::new());

        // An empty pattern's only match sits at the end of the text.
        let re = ConstRegexPattern::Basic("").compile().unwrap();
        assert_eq!(split(&re, "", -1), Vec::<&str>::new());
        assert_eq!(split(&re, "ab", -1), vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_empty_match() {
        // The final match starts at the end of the text, so no remainder.
        let re = ConstRegexPattern::Basic("b*").compile().unwrap();
        assert_eq!(split(&re, "a", -1), vec!["a"]);
        assert_eq!(split(&re, "abc", -1), vec!["a", "c"]);

        // Here the last match is non-empty and ends the text.
        assert_eq!(split(&re, "ab", -1), vec!["a", ""]);
    }

    #[test]
    fn test_matching_error() {
        let re = RegexPattern::Fancy(r"(?i)(a|b|ab)*(?=c)".to_string())
            .compile_with(&CompileOptions::default().with_backtrack_limit(Some(100_000)))
            .unwrap();

        let text = "abababababababababababababababababababababababababababab";
        assert_eq!(split(&re, text, -1), vec![text]);

        // The empty match at 0 touches the start; the error stops the scan.
        let text = "cabababababababababababababababababababababababababababab";
        assert_eq!(split(&re, text, -1), vec![text]);
    }

    #[test]
    fn test_split_bytes() {
        let re = ConstRegexPattern::Basic("-").compile().unwrap();
        let src: &[u8] = b"ab-cd-ef";

        let pieces = split_bytes(&re, src, -1);
        assert_eq!(pieces, vec![&b"ab"[..], &b"cd"[..], &b"ef"[..]]);
        assert!(core::ptr::eq(pieces[1].as_ptr(), src[3..].as_ptr()));

        let bad: &[u8] = b"ab-\xff";
        assert_eq!(split_bytes(&re, bad, -1), vec![bad]);
        assert!(split_bytes(&re, bad, 0).is_empty());
    }

    proptest! {
        #[test]
        fn split_reassembles(
            text in "[abc ,]{0,24}",
            pattern in prop::sample::select(vec!["a+", ",", " *, *", "[bc]+", "c|ab"]),
            n in -2isize..6,
        ) {
            let re = RegexPattern::from(pattern).compile().unwrap();
            let seps: Vec<&str> = MatchSequence::new(&re, &text)
                .try_collect_all()
                .unwrap()
                .iter()
                .map(|m| m.as_str())
                .collect();

            let pieces = split(&re, &text, n);

            let expected = match count_limit(n) {
                None => seps.len() + 1,
                Some(limit) => limit.min(seps.len() + 1),
            };
            prop_assert_eq!(pieces.len(), expected);

            if !pieces.is_empty() {
                let mut joined = String::new();
                for (i, piece) in pieces.iter().enumerate() {
                    if i > 0 {
                        joined.push_str(seps[i - 1]);
                    }
                    joined.push_str(piece);
                }
                prop_assert_eq!(joined, text);
            }
        }
    }
}
