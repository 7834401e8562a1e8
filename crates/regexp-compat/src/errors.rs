//! # Error Types

use core::fmt;

use crate::engine::ErrorWrapper;

/// Operations this adapter deliberately does not provide.
///
/// These fail with [`RegexpError::Unsupported`] every time they are called;
/// they never degrade to a "no match" result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UnsupportedOp {
    /// Leftmost-longest match preference.
    Longest,

    /// Match test over a reader.
    MatchReader,

    /// First-match location over a reader.
    FindReaderIndex,

    /// First-submatch locations over a reader.
    FindReaderSubmatchIndex,
}

impl UnsupportedOp {
    /// The conventional name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Longest => "Longest",
            Self::MatchReader => "MatchReader",
            Self::FindReaderIndex => "FindReaderIndex",
            Self::FindReaderSubmatchIndex => "FindReaderSubmatchIndex",
        }
    }
}

impl fmt::Display for UnsupportedOp {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from regexp operations.
#[derive(Debug, thiserror::Error)]
pub enum RegexpError {
    /// The pattern failed to compile.
    #[error("regexp compile error: {0}")]
    Compile(ErrorWrapper),

    /// The engine failed while evaluating a match.
    ///
    /// This is distinct from "no match".
    #[error("regexp match error: {0}")]
    Match(ErrorWrapper),

    /// The operation is not provided by this adapter.
    #[error("unsupported regexp operation: {0}")]
    Unsupported(UnsupportedOp),

    /// Byte input was not valid UTF-8.
    #[error("invalid utf-8 in byte input: {0}")]
    InvalidUtf8(#[from] core::str::Utf8Error),
}

/// Result type for regexp operations.
pub type RegexpResult<T> = core::result::Result<T, RegexpError>;
