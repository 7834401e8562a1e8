//! # Matching
//!
//! * [`MatchSequence`] - drives the engine's "find next" continuation.
//! * [`translate`] - projects each match to index pairs, text, or bytes.
//!
//! The error policy differs by entry point: first-match queries degrade
//! a matching error to "no match" ([`translate::first_or_none`]), while a
//! [`MatchSequence`] yields the error and stops.

mod sequence;
pub mod translate;

#[doc(inline)]
pub use sequence::{MatchSequence, count_limit};
