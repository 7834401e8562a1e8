//! # Conventional Regexp Surface
//!
//! [`Regexp`] exposes the familiar query / replace / split vocabulary over
//! a compiled [`RegexWrapper`].
//!
//! Method names follow the usual `Find(All)?(String)?(Submatch)?(Index)?`
//! scheme:
//! * `string` variants take `&str`; the others take `&[u8]`;
//! * `index` variants report byte ranges instead of text;
//! * `submatch` variants report every capture group, whole match first;
//! * `all` variants take a count `n` (`n < 0` means unbounded).
//!
//! A matching error (e.g. an exhausted backtrack limit) is never confused
//! with a compile error. First-match queries log it and report "no match";
//! the `all` family and [`Regexp::split`] log it and return what was found
//! before it; the replace family logs it and returns the input unchanged.
//!
//! ## Example
//!
//! ```rust
//! use regexp_compat::Regexp;
//!
//! let re = Regexp::compile(r"(?P<key>\w+)=(?P<value>\d+)")?;
//! assert_eq!(re.find_string("x a=1 b=22"), Some("a=1"));
//! assert_eq!(re.find_all_string_index("x a=1 b=22", -1), vec![2..5, 6..10]);
//! assert_eq!(re.replace_all_string("a=1 b=22", "$value:$key"), "1:a 22:b");
//! assert_eq!(re.subexp_index("value"), Some(2));
//! # Ok::<(), regexp_compat::RegexpError>(())
//! ```

use core::{fmt, ops::Range};

use crate::{
    alloc::{borrow::Cow, string::String, sync::Arc, vec::Vec},
    engine::{CompileOptions, LiteralPrefix, NativeMatch, RegexPattern, RegexWrapper},
    errors::{RegexpError, RegexpResult, UnsupportedOp},
    matching::{MatchSequence, translate},
    replace,
    split,
    view::TextView,
};

/// Compile `pattern` and test whether it matches `text`.
pub fn match_string(
    pattern: &str,
    text: &str,
) -> RegexpResult<bool> {
    Ok(Regexp::compile(pattern)?.match_string(text))
}

/// Compile `pattern` and test whether it matches `bytes`.
pub fn match_bytes(
    pattern: &str,
    bytes: &[u8],
) -> RegexpResult<bool> {
    Ok(Regexp::compile(pattern)?.match_bytes(bytes))
}

/// A compiled regular expression with the conventional query API.
///
/// Cheap to clone; safe to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Regexp {
    inner: Arc<RegexWrapper>,
}

impl From<RegexWrapper> for Regexp {
    fn from(regex: RegexWrapper) -> Self {
        Self {
            inner: Arc::new(regex),
        }
    }
}

impl fmt::Display for Regexp {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Regexp {
    /// Compile a pattern with default [`CompileOptions`].
    ///
    /// A plain `&str` compiles adaptively: the basic dialect when it
    /// suffices, the fancy one otherwise. Pass a [`RegexPattern`] to pin
    /// the dialect.
    pub fn compile<P>(pattern: P) -> RegexpResult<Self>
    where
        P: Into<RegexPattern>,
    {
        Self::compile_with(pattern, &CompileOptions::default())
    }

    /// Compile a pattern under the given engine limits.
    pub fn compile_with<P>(
        pattern: P,
        options: &CompileOptions,
    ) -> RegexpResult<Self>
    where
        P: Into<RegexPattern>,
    {
        pattern
            .into()
            .compile_with(options)
            .map(Self::from)
            .map_err(RegexpError::Compile)
    }

    /// Compile a pattern, panicking if it is invalid.
    ///
    /// Intended for patterns fixed at build time.
    ///
    /// ## Panics
    /// If the pattern does not compile.
    pub fn must_compile<P>(pattern: P) -> Self
    where
        P: Into<RegexPattern>,
    {
        let pattern = pattern.into();
        match Self::compile(pattern.clone()) {
            Ok(re) => re,
            Err(err) => panic!("regexp: compile(`{}`): {err}", pattern.as_str()),
        }
    }

    /// The compiled engine regex.
    pub fn engine(&self) -> &RegexWrapper {
        &self.inner
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Number of capture groups, excluding the whole match.
    pub fn num_subexp(&self) -> usize {
        self.inner.group_count()
    }

    /// Group names by index; index 0 and unnamed groups are `""`.
    pub fn subexp_names(&self) -> &[String] {
        self.inner.group_names()
    }

    /// Index of the leftmost group called `name`.
    pub fn subexp_index(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.inner.group_index(name)
    }

    /// The literal text every match must begin with.
    pub fn literal_prefix(&self) -> LiteralPrefix {
        self.inner.literal_prefix()
    }

    /// Leftmost-longest matching is not provided.
    ///
    /// ## Returns
    /// Always [`RegexpError::Unsupported`].
    pub fn longest(&self) -> RegexpResult<()> {
        Err(RegexpError::Unsupported(UnsupportedOp::Longest))
    }

    /// Matching over a character stream is not provided.
    ///
    /// ## Returns
    /// Always [`RegexpError::Unsupported`]; `reader` is not consumed.
    pub fn match_reader<R>(
        &self,
        _reader: R,
    ) -> RegexpResult<bool>
    where
        R: Iterator<Item = char>,
    {
        Err(RegexpError::Unsupported(UnsupportedOp::MatchReader))
    }

    /// Matching over a character stream is not provided.
    ///
    /// ## Returns
    /// Always [`RegexpError::Unsupported`]; `reader` is not consumed.
    pub fn find_reader_index<R>(
        &self,
        _reader: R,
    ) -> RegexpResult<Option<Range<usize>>>
    where
        R: Iterator<Item = char>,
    {
        Err(RegexpError::Unsupported(UnsupportedOp::FindReaderIndex))
    }

    /// Matching over a character stream is not provided.
    ///
    /// ## Returns
    /// Always [`RegexpError::Unsupported`]; `reader` is not consumed.
    pub fn find_reader_submatch_index<R>(
        &self,
        _reader: R,
    ) -> RegexpResult<Option<Vec<Option<Range<usize>>>>>
    where
        R: Iterator<Item = char>,
    {
        Err(RegexpError::Unsupported(
            UnsupportedOp::FindReaderSubmatchIndex,
        ))
    }

    fn first<'h>(
        &self,
        text: &'h str,
    ) -> Option<NativeMatch<'h>> {
        translate::first_or_none(&self.inner, self.inner.find_first(text))
    }

    fn view<'h>(
        &self,
        bytes: &'h [u8],
    ) -> Option<TextView<'h>> {
        TextView::try_from_bytes(bytes)
            .inspect_err(|err| log::warn!("regexp `{}`: {err}", self.as_str()))
            .ok()
    }

    fn all<'h, T, F>(
        &self,
        text: &'h str,
        n: isize,
        f: F,
    ) -> Vec<T>
    where
        F: FnMut(NativeMatch<'h>) -> T,
    {
        self.matches_limit(text, n).collect_partial_map(f)
    }

    /// Does `text` contain a match?
    pub fn match_string(
        &self,
        text: &str,
    ) -> bool {
        translate::matched(self.first(text).as_ref())
    }

    /// Does `text` contain a match?
    ///
    /// ## Returns
    /// [`RegexpError::Match`] if the engine could not decide, instead of
    /// reporting "no match".
    pub fn try_match_string(
        &self,
        text: &str,
    ) -> RegexpResult<bool> {
        self.inner
            .find_first(text)
            .map(|m| m.is_some())
            .map_err(RegexpError::Match)
    }

    /// Does `bytes` contain a match?
    pub fn match_bytes(
        &self,
        bytes: &[u8],
    ) -> bool {
        self.view(bytes)
            .is_some_and(|view| self.match_string(view.as_str()))
    }

    /// The leftmost match in `bytes`.
    pub fn find<'h>(
        &self,
        bytes: &'h [u8],
    ) -> Option<&'h [u8]> {
        let view = self.view(bytes)?;
        self.first(view.as_str()).map(|m| view.slice(m.range()))
    }

    /// The byte range of the leftmost match in `bytes`.
    pub fn find_index(
        &self,
        bytes: &[u8],
    ) -> Option<Range<usize>> {
        self.find_string_index(self.view(bytes)?.as_str())
    }

    /// The leftmost match in `text`.
    ///
    /// An empty match is `Some("")`, distinct from no match.
    pub fn find_string<'h>(
        &self,
        text: &'h str,
    ) -> Option<&'h str> {
        translate::match_str(self.first(text).as_ref())
    }

    /// The byte range of the leftmost match in `text`.
    pub fn find_string_index(
        &self,
        text: &str,
    ) -> Option<Range<usize>> {
        translate::match_range(self.first(text).as_ref())
    }

    /// The groups of the leftmost match in `bytes`.
    pub fn find_submatch<'h>(
        &self,
        bytes: &'h [u8],
    ) -> Option<Vec<&'h [u8]>> {
        let view = self.view(bytes)?;
        self.first(view.as_str())
            .map(|m| translate::submatch_bytes(view, &m))
    }

    /// The group ranges of the leftmost match in `bytes`.
    pub fn find_submatch_index(
        &self,
        bytes: &[u8],
    ) -> Option<Vec<Option<Range<usize>>>> {
        self.find_string_submatch_index(self.view(bytes)?.as_str())
    }

    /// The groups of the leftmost match in `text`; unmatched groups are `""`.
    pub fn find_string_submatch<'h>(
        &self,
        text: &'h str,
    ) -> Option<Vec<&'h str>> {
        self.first(text).map(|m| translate::submatch_strs(&m))
    }

    /// The group ranges of the leftmost match in `text`.
    pub fn find_string_submatch_index(
        &self,
        text: &str,
    ) -> Option<Vec<Option<Range<usize>>>> {
        self.first(text).map(|m| translate::submatch_ranges(&m))
    }

    /// The successive matches in `text`, lazily.
    pub fn matches<'h>(
        &self,
        text: &'h str,
    ) -> MatchSequence<'_, 'h> {
        MatchSequence::new(&self.inner, text)
    }

    /// At most `n` successive matches in `text`, lazily.
    pub fn matches_limit<'h>(
        &self,
        text: &'h str,
        n: isize,
    ) -> MatchSequence<'_, 'h> {
        MatchSequence::with_limit(&self.inner, text, n)
    }

    /// Up to `n` successive matches in `bytes`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes)))]
    pub fn find_all<'h>(
        &self,
        bytes: &'h [u8],
        n: isize,
    ) -> Vec<&'h [u8]> {
        match self.view(bytes) {
            Some(view) => self.all(view.as_str(), n, |m| view.slice(m.range())),
            None => Vec::new(),
        }
    }

    /// Byte ranges of up to `n` successive matches in `bytes`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes)))]
    pub fn find_all_index(
        &self,
        bytes: &[u8],
        n: isize,
    ) -> Vec<Range<usize>> {
        match self.view(bytes) {
            Some(view) => self.find_all_string_index(view.as_str(), n),
            None => Vec::new(),
        }
    }

    /// Up to `n` successive matches in `text`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn find_all_string<'h>(
        &self,
        text: &'h str,
        n: isize,
    ) -> Vec<&'h str> {
        self.all(text, n, |m| m.as_str())
    }

    /// Byte ranges of up to `n` successive matches in `text`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn find_all_string_index(
        &self,
        text: &str,
        n: isize,
    ) -> Vec<Range<usize>> {
        self.all(text, n, |m| m.range())
    }

    /// Groups of up to `n` successive matches in `bytes`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes)))]
    pub fn find_all_submatch<'h>(
        &self,
        bytes: &'h [u8],
        n: isize,
    ) -> Vec<Vec<&'h [u8]>> {
        match self.view(bytes) {
            Some(view) => self.all(view.as_str(), n, |m| translate::submatch_bytes(view, &m)),
            None => Vec::new(),
        }
    }

    /// Group ranges of up to `n` successive matches in `bytes`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, bytes)))]
    pub fn find_all_submatch_index(
        &self,
        bytes: &[u8],
        n: isize,
    ) -> Vec<Vec<Option<Range<usize>>>> {
        match self.view(bytes) {
            Some(view) => self.find_all_string_submatch_index(view.as_str(), n),
            None => Vec::new(),
        }
    }

    /// Groups of up to `n` successive matches in `text`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn find_all_string_submatch<'h>(
        &self,
        text: &'h str,
        n: isize,
    ) -> Vec<Vec<&'h str>> {
        self.all(text, n, |m| translate::submatch_strs(&m))
    }

    /// Group ranges of up to `n` successive matches in `text`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn find_all_string_submatch_index(
        &self,
        text: &str,
        n: isize,
    ) -> Vec<Vec<Option<Range<usize>>>> {
        self.all(text, n, |m| translate::submatch_ranges(&m))
    }

    /// See [`replace::replace_all_string`].
    pub fn replace_all_string<'h>(
        &self,
        src: &'h str,
        template: &str,
    ) -> Cow<'h, str> {
        replace::replace_all_string(&self.inner, src, template)
    }

    /// See [`replace::replace_all_literal_string`].
    pub fn replace_all_literal_string<'h>(
        &self,
        src: &'h str,
        repl: &str,
    ) -> Cow<'h, str> {
        replace::replace_all_literal_string(&self.inner, src, repl)
    }

    /// See [`replace::replace_all_string_func`].
    pub fn replace_all_string_func<'h, F>(
        &self,
        src: &'h str,
        repl: F,
    ) -> Cow<'h, str>
    where
        F: FnMut(&str) -> String,
    {
        replace::replace_all_string_func(&self.inner, src, repl)
    }

    /// See [`replace::replace_all_bytes`].
    pub fn replace_all(
        &self,
        src: &[u8],
        template: &[u8],
    ) -> Vec<u8> {
        replace::replace_all_bytes(&self.inner, src, template)
    }

    /// See [`replace::replace_all_literal_bytes`].
    pub fn replace_all_literal(
        &self,
        src: &[u8],
        repl: &[u8],
    ) -> Vec<u8> {
        replace::replace_all_literal_bytes(&self.inner, src, repl)
    }

    /// See [`replace::replace_all_bytes_func`].
    pub fn replace_all_func<F, R>(
        &self,
        src: &[u8],
        repl: F,
    ) -> Vec<u8>
    where
        F: FnMut(&[u8]) -> R,
        R: AsRef<[u8]>,
    {
        replace::replace_all_bytes_func(&self.inner, src, repl)
    }

    /// See [`split::split`].
    pub fn split<'h>(
        &self,
        text: &'h str,
        n: isize,
    ) -> Vec<&'h str> {
        split::split(&self.inner, text, n)
    }

    /// See [`split::split_bytes`].
    pub fn split_bytes<'h>(
        &self,
        src: &'h [u8],
        n: isize,
    ) -> Vec<&'h [u8]> {
        split::split_bytes(&self.inner, src, n)
    }
}
