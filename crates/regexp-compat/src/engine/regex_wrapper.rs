//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types
//! behind one capture-oriented search contract.

use core::fmt::Debug;

use crate::{
    alloc::{borrow::Cow, boxed::Box, string::String, sync::Arc, vec::Vec},
    engine::{LiteralPrefix, NativeMatch, RegexPattern, Span},
};

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// How the replace primitive computes each substitution.
pub enum Replacement<'a> {
    /// Expand `$name`, `${name}`, `$digits` and `$$` from the match captures.
    Template(&'a str),

    /// Insert the text verbatim.
    Literal(&'a str),

    /// Call the function with the matched text.
    Func(&'a mut dyn FnMut(&str) -> String),
}

impl Debug for Replacement<'_> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Self::Literal(t) => f.debug_tuple("Literal").field(t).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

#[derive(Debug, Clone)]
enum EngineRegex {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

/// Wrapper for compiled regex patterns.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct RegexWrapper {
    regex: EngineRegex,
    names: Arc<[String]>,
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.is_basic() == other.is_basic() && self.as_str() == other.as_str()
    }
}

impl TryFrom<RegexPattern> for RegexWrapper {
    type Error = ErrorWrapper;

    fn try_from(pattern: RegexPattern) -> Result<Self, Self::Error> {
        pattern.compile()
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        let names = regex
            .capture_names()
            .map(|name| String::from(name.unwrap_or_default()))
            .collect();
        Self {
            regex: EngineRegex::Basic(regex),
            names,
        }
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        let names = regex
            .capture_names()
            .map(|name| String::from(name.unwrap_or_default()))
            .collect();
        Self {
            regex: EngineRegex::Fancy(regex),
            names,
        }
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        matches!(self.regex, EngineRegex::Basic(_))
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        matches!(self.regex, EngineRegex::Fancy(_))
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match &self.regex {
            EngineRegex::Basic(regex) => regex.as_str(),
            EngineRegex::Fancy(regex) => regex.as_str(),
        }
    }

    /// Group names by declaration index.
    ///
    /// Index 0 is the whole match; unnamed groups have empty names.
    pub fn group_names(&self) -> &[String] {
        &self.names
    }

    /// Number of capture groups, excluding group 0.
    pub fn group_count(&self) -> usize {
        self.names.len() - 1
    }

    /// The index of the leftmost-declared group called `name`.
    pub fn group_index(
        &self,
        name: &str,
    ) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.names.iter().position(|n| n == name)
    }

    /// The literal prefix required by every match.
    pub fn literal_prefix(&self) -> LiteralPrefix {
        LiteralPrefix::of_pattern(self.as_str())
    }

    /// Find the leftmost match starting at or after byte offset `start`.
    ///
    /// Look-behind and anchors still see the text before `start`.
    ///
    /// ## Returns
    /// `Ok(None)` for no match; `Err` when the engine failed to decide.
    pub fn find_at<'h>(
        &self,
        haystack: &'h str,
        start: usize,
    ) -> Result<Option<NativeMatch<'h>>, ErrorWrapper> {
        if start > haystack.len() {
            return Ok(None);
        }
        let groups: Option<Vec<Option<Span>>> = match &self.regex {
            EngineRegex::Basic(regex) => regex.captures_at(haystack, start).map(|caps| {
                (0..caps.len())
                    .map(|i| caps.get(i).map(|m| Span::from(m.range())))
                    .collect()
            }),
            EngineRegex::Fancy(regex) => regex.captures_from_pos(haystack, start)?.map(|caps| {
                (0..caps.len())
                    .map(|i| caps.get(i).map(|m| Span::from(m.start()..m.end())))
                    .collect()
            }),
        };
        Ok(groups.map(|groups| NativeMatch::new(haystack, groups, self.names.clone())))
    }

    /// Find the first match in `haystack`.
    pub fn find_first<'h>(
        &self,
        haystack: &'h str,
    ) -> Result<Option<NativeMatch<'h>>, ErrorWrapper> {
        self.find_at(haystack, 0)
    }

    /// Find the next match strictly after `prev`.
    ///
    /// Never returns `prev` again, nor anything overlapping it.
    /// After an empty match the search resumes one character later;
    /// an empty match abutting the end of `prev` is skipped.
    pub fn find_next<'h>(
        &self,
        haystack: &'h str,
        prev: &NativeMatch<'_>,
    ) -> Result<Option<NativeMatch<'h>>, ErrorWrapper> {
        self.find_after(haystack, prev.span())
    }

    pub(crate) fn find_after<'h>(
        &self,
        haystack: &'h str,
        prev: Span,
    ) -> Result<Option<NativeMatch<'h>>, ErrorWrapper> {
        let mut pos = if prev.is_empty() {
            next_char_boundary(haystack, prev.end())
        } else {
            prev.end()
        };
        loop {
            match self.find_at(haystack, pos)? {
                Some(m) if m.is_empty() && m.start() == prev.end() => {
                    pos = next_char_boundary(haystack, m.end());
                }
                found => return Ok(found),
            }
        }
    }

    /// Replace every match in `haystack`.
    ///
    /// Delegates to the engine's own replace-all primitive.
    ///
    /// ## Returns
    /// `Cow::Borrowed` when nothing was replaced.
    pub fn replace_all<'h>(
        &self,
        haystack: &'h str,
        replacement: Replacement<'_>,
    ) -> Result<Cow<'h, str>, ErrorWrapper> {
        match &self.regex {
            EngineRegex::Basic(regex) => Ok(match replacement {
                Replacement::Template(template) => regex.replace_all(haystack, template),
                Replacement::Literal(text) => regex.replace_all(haystack, regex::NoExpand(text)),
                Replacement::Func(f) => {
                    regex.replace_all(haystack, |caps: &regex::Captures<'_>| f(&caps[0]))
                }
            }),
            EngineRegex::Fancy(regex) => {
                // A limit of 0 replaces every match.
                let replaced = match replacement {
                    Replacement::Template(template) => regex.try_replacen(haystack, 0, template),
                    Replacement::Literal(text) => {
                        regex.try_replacen(haystack, 0, fancy_regex::NoExpand(text))
                    }
                    Replacement::Func(f) => {
                        regex.try_replacen(haystack, 0, |caps: &fancy_regex::Captures<'_>| {
                            f(caps.get(0).map_or("", |m| m.as_str()))
                        })
                    }
                };
                replaced.map_err(ErrorWrapper::from)
            }
        }
    }
}

/// The offset one character past `pos`, or past the end if `pos` is the end.
fn next_char_boundary(
    haystack: &str,
    pos: usize,
) -> usize {
    match haystack[pos..].chars().next() {
        Some(c) => pos + c.len_utf8(),
        None => pos + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alloc::{string::ToString, vec},
        engine::{CompileOptions, ConstRegexPattern},
    };

    fn all_ranges(
        re: &RegexWrapper,
        haystack: &str,
    ) -> Vec<core::ops::Range<usize>> {
        let mut ranges = Vec::new();
        let mut m = re.find_first(haystack).unwrap();
        while let Some(cur) = m {
            ranges.push(cur.range());
            m = re.find_next(haystack, &cur).unwrap();
        }
        ranges
    }

    #[test]
    fn test_partial_eq() {
        let b0 = RegexPattern::Basic("hello".to_string()).compile().unwrap();
        let b1 = RegexPattern::Basic("world".to_string()).compile().unwrap();
        let f0 = RegexPattern::Fancy("hello".to_string()).compile().unwrap();

        assert_eq!(&b0, &b0);
        assert_ne!(&b0, &b1);
        assert_ne!(&b0, &f0);
        assert_eq!(&f0, &f0.clone());
    }

    #[test]
    fn test_group_metadata() {
        for pattern in [
            RegexPattern::Basic(r"(?P<first>\w+)\s+(\w+)\s+(?P<third>\w+)".to_string()),
            RegexPattern::Fancy(r"(?P<first>\w+)\s+(\w+)\s+(?P<third>\w+)".to_string()),
        ] {
            let re = pattern.compile().unwrap();
            assert_eq!(re.group_names(), &["", "first", "", "third"]);
            assert_eq!(re.group_count(), 3);
            assert_eq!(re.group_index("first"), Some(1));
            assert_eq!(re.group_index("third"), Some(3));
            assert_eq!(re.group_index("missing"), None);
            assert_eq!(re.group_index(""), None);
        }
    }

    #[test]
    fn test_find_first_groups() {
        for pattern in [
            ConstRegexPattern::Basic(r"(a)|(b)"),
            ConstRegexPattern::Fancy(r"(a)|(b)"),
        ] {
            let re = pattern.compile().unwrap();
            let m = re.find_first("xxb").unwrap().unwrap();
            assert_eq!(m.range(), 2..3);
            assert_eq!(m.spans(), &[Some(Span::from(2..3)), None, Some(Span::from(2..3))]);

            assert!(re.find_first("xyz").unwrap().is_none());
        }
    }

    #[test]
    fn test_find_at_respects_context() {
        let re = ConstRegexPattern::Basic(r"^a").compile().unwrap();
        assert!(re.find_at("aa", 1).unwrap().is_none());
        assert!(re.find_at("aa", 3).unwrap().is_none());

        let re = ConstRegexPattern::Fancy(r"(?<=a)b").compile().unwrap();
        assert_eq!(re.find_at("ab", 1).unwrap().unwrap().range(), 1..2);
    }

    #[test]
    fn test_find_next_progress() {
        for pattern in [ConstRegexPattern::Basic("a*"), ConstRegexPattern::Fancy("a*")] {
            let re = pattern.compile().unwrap();
            assert_eq!(
                all_ranges(&re, "abaabaccadaaae"),
                vec![0..1, 2..4, 5..6, 7..7, 8..9, 10..13, 14..14]
            );
            assert_eq!(all_ranges(&re, ""), vec![0..0]);
        }
    }

    #[test]
    fn test_find_next_multibyte() {
        let re = ConstRegexPattern::Basic("").compile().unwrap();
        assert_eq!(all_ranges(&re, "aé"), vec![0..0, 1..1, 3..3]);
    }

    #[test]
    fn test_replace_all_modes() {
        for pattern in [
            ConstRegexPattern::Basic(r"(?P<k>\w+)=(?P<v>\w+)"),
            ConstRegexPattern::Fancy(r"(?P<k>\w+)=(?P<v>\w+)"),
        ] {
            let re = pattern.compile().unwrap();
            let text = "a=1, b=2";

            let out = re.replace_all(text, Replacement::Template("$v=${k}$$")).unwrap();
            assert_eq!(out, "1=a$, 2=b$");

            let out = re.replace_all(text, Replacement::Literal("$v")).unwrap();
            assert_eq!(out, "$v, $v");

            let mut upper = |s: &str| s.to_uppercase();
            let out = re.replace_all(text, Replacement::Func(&mut upper)).unwrap();
            assert_eq!(out, "A=1, B=2");

            let out = re.replace_all("nothing", Replacement::Literal("x")).unwrap();
            assert!(matches!(out, Cow::Borrowed("nothing")));
        }
    }

    #[test]
    fn test_runtime_error() {
        let re = RegexPattern::Fancy(r"(?i)(a|b|ab)*(?=c)".to_string())
            .compile_with(&CompileOptions::default().with_backtrack_limit(Some(100_000)))
            .unwrap();
        let s = "abababababababababababababababababababababababababababab";

        assert!(matches!(re.find_first(s), Err(ErrorWrapper::Fancy(_))));
        assert!(re.replace_all(s, Replacement::Literal("x")).is_err());
    }
}
