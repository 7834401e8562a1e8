//! # Match Translation
//!
//! Projections from one [`NativeMatch`] to the conventional result shapes.
//!
//! Index pairs are `Range<usize>` byte offsets; an absent match or an
//! unmatched group is `None`, never a sentinel range.

use core::ops::Range;

use crate::{
    alloc::vec::Vec,
    engine::{ErrorWrapper, NativeMatch, RegexWrapper},
    view::TextView,
};

/// Resolve a first-match search for the simple query family.
///
/// A matching error is logged and reported as "no match".
pub fn first_or_none<'h>(
    regex: &RegexWrapper,
    found: Result<Option<NativeMatch<'h>>, ErrorWrapper>,
) -> Option<NativeMatch<'h>> {
    found.unwrap_or_else(|err| {
        log::warn!("regexp `{}`: matching error: {err}", regex.as_str());
        None
    })
}

/// Did the search match?
pub fn matched(m: Option<&NativeMatch<'_>>) -> bool {
    m.is_some()
}

/// The whole-match index pair.
pub fn match_range(m: Option<&NativeMatch<'_>>) -> Option<Range<usize>> {
    m.map(NativeMatch::range)
}

/// The whole-match text.
pub fn match_str<'h>(m: Option<&NativeMatch<'h>>) -> Option<&'h str> {
    m.map(NativeMatch::as_str)
}

/// Index pairs for every group, whole match first.
///
/// The length is always `1 + group_count`.
pub fn submatch_ranges(m: &NativeMatch<'_>) -> Vec<Option<Range<usize>>> {
    m.spans()
        .iter()
        .map(|span| span.map(|span| span.range()))
        .collect()
}

/// Text for every group, whole match first; unmatched groups are empty.
pub fn submatch_strs<'h>(m: &NativeMatch<'h>) -> Vec<&'h str> {
    (0..m.len())
        .map(|i| m.group_str(i).unwrap_or_default())
        .collect()
}

/// Byte sub-slices of `view` for every group, whole match first;
/// unmatched groups are empty.
///
/// `m` must come from a search over `view.as_str()`.
pub fn submatch_bytes<'a>(
    view: TextView<'a>,
    m: &NativeMatch<'a>,
) -> Vec<&'a [u8]> {
    m.spans()
        .iter()
        .map(|span| span.map_or(&[][..], |span| view.slice(span.range())))
        .collect()
}
