//! # Native Match Objects
//!
//! A [`NativeMatch`] is the engine-side view of one successful search:
//! the overall span plus one optional span per declared capture group.

use core::ops::Range;

use crate::alloc::{string::String, sync::Arc, vec::Vec};

/// A `(index, length)` byte span into a haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first byte.
    pub index: usize,

    /// Length in bytes.
    pub length: usize,
}

impl Span {
    /// Build a span from a `start..end` range.
    pub fn from_range(range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end);
        Self {
            index: range.start,
            length: range.end - range.start,
        }
    }

    /// The start offset.
    pub fn start(&self) -> usize {
        self.index
    }

    /// The exclusive end offset.
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    /// The span as a `start..end` range.
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Is this a zero-width span?
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}

/// One capture group of a [`NativeMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    /// Declaration index; 0 is the whole match.
    pub index: usize,

    /// The group name, if the group was named.
    pub name: Option<&'a str>,

    /// The matched span.
    pub span: Span,

    /// The matched text.
    pub text: &'a str,
}

/// One successful match over a haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeMatch<'h> {
    haystack: &'h str,
    groups: Vec<Option<Span>>,
    names: Arc<[String]>,
}

impl<'h> NativeMatch<'h> {
    /// Build a match from per-group spans.
    ///
    /// `groups[0]` must be present; all spans must lie within `haystack`.
    pub(crate) fn new(
        haystack: &'h str,
        groups: Vec<Option<Span>>,
        names: Arc<[String]>,
    ) -> Self {
        debug_assert!(matches!(groups.first(), Some(Some(_))));
        debug_assert!(groups.iter().flatten().all(|s| s.end() <= haystack.len()));
        Self {
            haystack,
            groups,
            names,
        }
    }

    /// The searched text.
    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// The span of the whole match.
    pub fn span(&self) -> Span {
        self.groups[0].unwrap_or_default()
    }

    /// The whole-match start offset.
    pub fn start(&self) -> usize {
        self.span().start()
    }

    /// The whole-match exclusive end offset.
    pub fn end(&self) -> usize {
        self.span().end()
    }

    /// The whole match as a `start..end` range.
    pub fn range(&self) -> Range<usize> {
        self.span().range()
    }

    /// Is the whole match zero-width?
    pub fn is_empty(&self) -> bool {
        self.span().is_empty()
    }

    /// The whole-match text.
    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.range()]
    }

    /// Number of groups, including group 0.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Per-group spans, in declaration order; `None` for unmatched groups.
    pub fn spans(&self) -> &[Option<Span>] {
        &self.groups
    }

    /// The text of group `index`, if it participated in the match.
    pub fn group_str(
        &self,
        index: usize,
    ) -> Option<&'h str> {
        self.groups
            .get(index)
            .copied()
            .flatten()
            .map(|span| &self.haystack[span.range()])
    }

    /// Group `index`, if it exists and participated in the match.
    pub fn group(
        &self,
        index: usize,
    ) -> Option<Group<'_>> {
        let span = self.groups.get(index).copied().flatten()?;
        let name = self
            .names
            .get(index)
            .map(String::as_str)
            .filter(|name| !name.is_empty());
        Some(Group {
            index,
            name,
            span,
            text: &self.haystack[span.range()],
        })
    }

    /// The leftmost-declared group called `name`, if it participated.
    pub fn named(
        &self,
        name: &str,
    ) -> Option<Group<'_>> {
        if name.is_empty() {
            return None;
        }
        let index = self.names.iter().position(|n| n == name)?;
        self.group(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::{string::ToString, vec};

    fn names(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_span() {
        let span = Span::from(3..7);
        assert_eq!(span, Span { index: 3, length: 4 });
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 7);
        assert_eq!(span.range(), 3..7);
        assert!(!span.is_empty());
        assert!(Span::from(5..5).is_empty());
    }

    #[test]
    fn test_groups() {
        let m = NativeMatch::new(
            "say hello there",
            vec![Some(Span::from(4..15)), Some(Span::from(4..9)), None],
            names(&["", "greeting", "other"]),
        );

        assert_eq!(m.as_str(), "hello there");
        assert_eq!(m.range(), 4..15);
        assert_eq!(m.len(), 3);

        let g = m.named("greeting").unwrap();
        assert_eq!(g.index, 1);
        assert_eq!(g.name, Some("greeting"));
        assert_eq!(g.text, "hello");

        assert_eq!(m.named("other"), None);
        assert_eq!(m.named("missing"), None);
        assert_eq!(m.named(""), None);

        assert_eq!(m.group(0).unwrap().name, None);
        assert_eq!(m.group_str(1), Some("hello"));
        assert_eq!(m.group_str(2), None);
        assert_eq!(m.group_str(9), None);
    }

    #[test]
    fn test_duplicate_names_resolve_leftmost() {
        let m = NativeMatch::new(
            "aabb",
            vec![
                Some(Span::from(0..4)),
                Some(Span::from(0..2)),
                Some(Span::from(2..4)),
            ],
            names(&["", "x", "x"]),
        );
        assert_eq!(m.named("x").unwrap().text, "aa");
    }
}
