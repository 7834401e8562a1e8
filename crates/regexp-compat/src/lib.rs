//! # `regexp-compat` Conventional Regexp API
//!
//! The familiar `Find` / `FindAll` / `Submatch` / `Replace` / `Split` /
//! `QuoteMeta` vocabulary, over the capture-oriented `regex` and
//! `fancy_regex` engines.
//!
//! See:
//! * [`Regexp`] for the query surface.
//! * [`engine`] for dialect selection, compile limits and the native
//!   match model.
//! * [`matching`] for lazy match sequences.
//! * [`replace`] and [`split`] for the substitution and splitting rules.
//! * [`quote_meta`] to escape literal text.
//!
//! ## Dialects
//!
//! Patterns are labeled [`RegexPattern::Basic`], [`RegexPattern::Fancy`]
//! or [`RegexPattern::Adaptive`]. A plain string is adaptive: it compiles
//! under `regex` when it can, and falls back to `fancy_regex` when it
//! needs look-around or back-references.
//!
//! Only the fancy dialect can fail *while matching* (its backtrack limit
//! is a [`CompileOptions`] setting). Such failures are logged through
//! `log` and folded into the result shapes, as described on [`Regexp`].
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use regexp_compat::{Regexp, quote_meta};
//!
//! let re = Regexp::compile(r"a*")?;
//! assert_eq!(re.split("abaabaccadaaae", 5), vec!["", "b", "b", "c", "cadaaae"]);
//!
//! let dots = Regexp::compile(quote_meta("1.5"))?;
//! assert!(dots.match_string("v1.5"));
//! assert!(!dots.match_string("v105"));
//! # Ok::<(), regexp_compat::RegexpError>(())
//! ```
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
pub mod errors;
pub mod matching;
pub mod quote;
pub mod regexp;
pub mod replace;
pub mod split;
pub mod view;

#[doc(inline)]
pub use engine::{CompileOptions, ConstRegexPattern, ErrorWrapper, RegexPattern, RegexWrapper};
#[doc(inline)]
pub use errors::{RegexpError, RegexpResult, UnsupportedOp};
#[doc(inline)]
pub use matching::MatchSequence;
#[doc(inline)]
pub use quote::quote_meta;
#[doc(inline)]
pub use regexp::{Regexp, match_bytes, match_string};
#[doc(inline)]
pub use view::TextView;
