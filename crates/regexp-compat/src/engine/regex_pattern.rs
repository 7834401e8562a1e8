//! # Regex Pattern Labeled Wrapper
//!
//! The label selects the syntax dialect the pattern is compiled under.

use crate::{
    alloc::string::{String, ToString},
    engine::{CompileOptions, ErrorWrapper, RegexWrapper},
};

/// Const Regex Wrapper Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstRegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(&'static str),

    /// This is a regex pattern that requires regex extensions.
    Fancy(&'static str),

    /// The requirements of this pattern are unknown.
    Adaptive(&'static str),
}

impl ConstRegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Convert to [`RegexPattern`]
    pub fn to_pattern(&self) -> RegexPattern {
        (*self).into()
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        RegexPattern::from(*self).compile()
    }
}

impl From<ConstRegexPattern> for RegexPattern {
    fn from(pattern: ConstRegexPattern) -> Self {
        use ConstRegexPattern::*;
        match pattern {
            Basic(pattern) => RegexPattern::Basic(pattern.to_string()),
            Fancy(pattern) => RegexPattern::Fancy(pattern.to_string()),
            Adaptive(pattern) => RegexPattern::Adaptive(pattern.to_string()),
        }
    }
}

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions
    /// (look-around, back-references, atomic groups).
    Fancy(String),

    /// Try the basic dialect first; fall up to the fancy dialect
    /// if the pattern needs extensions.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern with default [`CompileOptions`].
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        self.compile_with(&CompileOptions::default())
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Arguments
    /// * `options` - engine limits to apply.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    /// An `Adaptive` pattern reports the fancy engine's error when both fail.
    pub fn compile_with(
        &self,
        options: &CompileOptions,
    ) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => options
                .build_basic(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => options
                .build_fancy(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(pattern) => options
                .build_basic(pattern)
                .map(RegexWrapper::from)
                .or_else(|err| {
                    log::debug!("basic dialect rejected `{pattern}` ({err}); trying fancy");
                    options
                        .build_fancy(pattern)
                        .map(RegexWrapper::from)
                        .map_err(ErrorWrapper::from)
                }),
        }
    }
}
