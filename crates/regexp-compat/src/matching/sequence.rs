//! # Successive Match Sequences

use core::iter::FusedIterator;

use crate::{
    alloc::vec::Vec,
    engine::{ErrorWrapper, NativeMatch, RegexWrapper, Span},
};

/// Convert a conventional count argument to an optional limit.
///
/// `n < 0` is unbounded; otherwise at most `n`.
pub fn count_limit(n: isize) -> Option<usize> {
    usize::try_from(n).ok()
}

#[derive(Debug, Clone)]
enum SequenceState {
    Start,
    HasMatch(Span),
    Exhausted,
    Failed(ErrorWrapper),
}

/// The ordered, non-overlapping matches of one regex over one haystack.
///
/// Lazy and not restartable. Each step asks the engine for the next match
/// strictly after the previous one. Yields `Err` at most once, when the
/// engine fails; the sequence then ends.
#[derive(Debug, Clone)]
pub struct MatchSequence<'r, 'h> {
    regex: &'r RegexWrapper,
    haystack: &'h str,
    remaining: Option<usize>,
    state: SequenceState,
}

impl<'r, 'h> MatchSequence<'r, 'h> {
    /// An unbounded sequence.
    pub fn new(
        regex: &'r RegexWrapper,
        haystack: &'h str,
    ) -> Self {
        Self::with_limit(regex, haystack, -1)
    }

    /// A sequence of at most `n` matches.
    ///
    /// `n == 0` is empty and never consults the engine; `n < 0` is unbounded.
    pub fn with_limit(
        regex: &'r RegexWrapper,
        haystack: &'h str,
        n: isize,
    ) -> Self {
        let remaining = count_limit(n);
        let state = if remaining == Some(0) {
            SequenceState::Exhausted
        } else {
            SequenceState::Start
        };
        Self {
            regex,
            haystack,
            remaining,
            state,
        }
    }

    /// The regex being matched.
    pub fn regex(&self) -> &'r RegexWrapper {
        self.regex
    }

    /// The text being searched.
    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// The error that ended the sequence, if any.
    pub fn error(&self) -> Option<&ErrorWrapper> {
        match &self.state {
            SequenceState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Has the sequence reached a terminal state?
    pub fn is_done(&self) -> bool {
        matches!(
            self.state,
            SequenceState::Exhausted | SequenceState::Failed(_)
        )
    }

    /// Collect every match, or the first error.
    pub fn try_collect_all(self) -> Result<Vec<NativeMatch<'h>>, ErrorWrapper> {
        self.collect()
    }

    /// Collect matches up to the first error.
    ///
    /// The error is logged and the matches found before it are returned.
    pub fn collect_partial(self) -> Vec<NativeMatch<'h>> {
        self.collect_partial_map(|m| m)
    }

    /// Project each match up to the first error.
    ///
    /// The error is logged and the projections of the matches found
    /// before it are returned.
    pub fn collect_partial_map<T, F>(
        self,
        mut f: F,
    ) -> Vec<T>
    where
        F: FnMut(NativeMatch<'h>) -> T,
    {
        let regex = self.regex;
        let mut items = Vec::new();
        for found in self {
            match found {
                Ok(m) => items.push(f(m)),
                Err(err) => {
                    log::warn!(
                        "regexp `{}`: matching error after {} matches: {err}",
                        regex.as_str(),
                        items.len()
                    );
                    break;
                }
            }
        }
        items
    }
}

impl<'h> Iterator for MatchSequence<'_, 'h> {
    type Item = Result<NativeMatch<'h>, ErrorWrapper>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            self.state = SequenceState::Exhausted;
        }
        let found = match &self.state {
            SequenceState::Start => self.regex.find_first(self.haystack),
            SequenceState::HasMatch(prev) => self.regex.find_after(self.haystack, *prev),
            SequenceState::Exhausted | SequenceState::Failed(_) => return None,
        };
        match found {
            Ok(Some(m)) => {
                self.state = SequenceState::HasMatch(m.span());
                if let Some(remaining) = &mut self.remaining {
                    *remaining -= 1;
                }
                Some(Ok(m))
            }
            Ok(None) => {
                self.state = SequenceState::Exhausted;
                None
            }
            Err(err) => {
                self.state = SequenceState::Failed(err.clone());
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_done() {
            (0, Some(0))
        } else {
            (0, self.remaining)
        }
    }
}

impl FusedIterator for MatchSequence<'_, '_> {}
