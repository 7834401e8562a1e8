//! # Regex Engine Seam
//!
//! The adapter never matches text itself; it consumes a narrow,
//! capture-oriented contract from one of two engines:
//!
//! * [`regex`] - finite automata; no look-around, no back-references.
//! * [`fancy_regex`] - a backtracking VM; look-around and back-references,
//!   but a search may fail at runtime (e.g. backtrack limit exceeded).
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which was written for regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The [`RegexWrapper`] contract is:
//! * ``find_first()`` / ``find_next()`` - the "find next match" continuation,
//!   yielding [`NativeMatch`] objects;
//! * ``replace_all()`` - the engine's replace primitive, see [`Replacement`];
//! * ``group_names()`` / ``group_index()`` - group metadata;
//! * ``literal_prefix()`` - see [`LiteralPrefix`].

mod compile_options;
mod literal_prefix;
mod native_match;
mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use compile_options::CompileOptions;
#[doc(inline)]
pub use literal_prefix::LiteralPrefix;
#[doc(inline)]
pub use native_match::{Group, NativeMatch, Span};
#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
