//! # Replacement
//!
//! Three substitution modes, over text or bytes:
//!
//! * template - `$name`, `${name}`, `$digits` and `$$` expanded from each
//!   match by the engine's own expander;
//! * literal - the replacement is inserted verbatim;
//! * callback - a function maps each matched text to its replacement.
//!
//! None of these ever return partially substituted output. If the engine
//! fails mid-way, the diagnostic is logged and the source comes back as-is.

use crate::{
    alloc::{borrow::Cow, string::String, vec::Vec},
    engine::{RegexWrapper, Replacement},
    matching::MatchSequence,
    view::TextView,
};

fn replace_or_source<'h>(
    regex: &RegexWrapper,
    src: &'h str,
    replacement: Replacement<'_>,
) -> Cow<'h, str> {
    regex.replace_all(src, replacement).unwrap_or_else(|err| {
        log::warn!(
            "regexp `{}`: replace failed, returning source unchanged: {err}",
            regex.as_str()
        );
        Cow::Borrowed(src)
    })
}

/// Replace every match of `regex` in `src` with the expansion of `template`.
///
/// In `template`, `$name` takes the longest run of letters, digits and
/// underscores (`$1x` is `${1x}`); numeric names are group indices.
/// Unknown or unmatched groups expand to nothing; `$$` is a literal `$`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn replace_all_string<'h>(
    regex: &RegexWrapper,
    src: &'h str,
    template: &str,
) -> Cow<'h, str> {
    replace_or_source(regex, src, Replacement::Template(template))
}

/// Replace every match of `regex` in `src` with `repl`, verbatim.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn replace_all_literal_string<'h>(
    regex: &RegexWrapper,
    src: &'h str,
    repl: &str,
) -> Cow<'h, str> {
    replace_or_source(regex, src, Replacement::Literal(repl))
}

/// Replace every match of `regex` in `src` with `repl(matched_text)`.
///
/// The returned text is inserted verbatim.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn replace_all_string_func<'h, F>(
    regex: &RegexWrapper,
    src: &'h str,
    mut repl: F,
) -> Cow<'h, str>
where
    F: FnMut(&str) -> String,
{
    replace_or_source(regex, src, Replacement::Func(&mut repl))
}

/// Byte form of [`replace_all_string`].
///
/// Both `src` and `template` must be UTF-8; otherwise the diagnostic is
/// logged and a copy of `src` is returned.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn replace_all_bytes(
    regex: &RegexWrapper,
    src: &[u8],
    template: &[u8],
) -> Vec<u8> {
    let views = TextView::try_from_bytes(src)
        .and_then(|src| Ok((src, TextView::try_from_bytes(template)?)));
    match views {
        Ok((src, template)) => replace_all_string(regex, src.as_str(), template.as_str())
            .into_owned()
            .into_bytes(),
        Err(err) => {
            log::warn!("regexp `{}`: {err}", regex.as_str());
            src.to_vec()
        }
    }
}

/// Byte form of [`replace_all_literal_string`].
///
/// `repl` may be any bytes; `src` must be UTF-8.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn replace_all_literal_bytes(
    regex: &RegexWrapper,
    src: &[u8],
    repl: &[u8],
) -> Vec<u8> {
    replace_all_bytes_func(regex, src, |_| repl)
}

/// Byte form of [`replace_all_string_func`].
///
/// `repl` receives a sub-slice of `src` and may return any bytes;
/// `src` must be UTF-8.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn replace_all_bytes_func<F, R>(
    regex: &RegexWrapper,
    src: &[u8],
    mut repl: F,
) -> Vec<u8>
where
    F: FnMut(&[u8]) -> R,
    R: AsRef<[u8]>,
{
    let view = match TextView::try_from_bytes(src) {
        Ok(view) => view,
        Err(err) => {
            log::warn!("regexp `{}`: {err}", regex.as_str());
            return src.to_vec();
        }
    };

    let matches = match MatchSequence::new(regex, view.as_str()).try_collect_all() {
        Ok(matches) => matches,
        Err(err) => {
            log::warn!(
                "regexp `{}`: replace failed, returning source unchanged: {err}",
                regex.as_str()
            );
            return src.to_vec();
        }
    };

    let mut out = Vec::with_capacity(src.len());
    let mut last = 0;
    for m in &matches {
        out.extend_from_slice(view.slice(last..m.start()));
        out.extend_from_slice(repl(view.slice(m.range())).as_ref());
        last = m.end();
    }
    out.extend_from_slice(view.slice(last..view.len()));
    out
}
