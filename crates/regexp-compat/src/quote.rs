//! # Literal Quoting

use crate::alloc::{borrow::Cow, string::String};

/// Bitmap over ASCII: bit `b / 16` of `SPECIAL_BYTES[b % 16]` is set
/// when byte `b` must be escaped.
const SPECIAL_BYTES: [u8; 16] = special_table(br"\.+*?()|[]{}^$");

const fn special_table(chars: &[u8]) -> [u8; 16] {
    let mut table = [0u8; 16];
    let mut i = 0;
    while i < chars.len() {
        let b = chars[i];
        table[(b % 16) as usize] |= 1 << (b / 16);
        i += 1;
    }
    table
}

/// Does `b` need a backslash in front of it to match literally?
#[inline]
pub fn is_special(b: u8) -> bool {
    b < 0x80 && SPECIAL_BYTES[(b % 16) as usize] & (1 << (b / 16)) != 0
}

/// Escape all regex metacharacters in `text`.
///
/// The result is a pattern matching `text` literally.
/// Only `\ . + * ? ( ) | [ ] { } ^ $` are escaped.
///
/// ## Returns
/// `Cow::Borrowed(text)` (the same pointer, no allocation) when `text`
/// contains no metacharacters; otherwise an owned string of at most
/// `2 * text.len()` bytes.
pub fn quote_meta(text: &str) -> Cow<'_, str> {
    // A byte scan is correct because all metacharacters are ASCII.
    let Some(first) = text.bytes().position(is_special) else {
        return Cow::Borrowed(text);
    };

    let mut quoted = String::with_capacity(2 * text.len() - first);
    quoted.push_str(&text[..first]);
    for c in text[first..].chars() {
        if c.is_ascii() && is_special(c as u8) {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::engine::RegexPattern;

    #[test]
    fn test_special_set() {
        let specials: String = (0u8..=255)
            .filter(|&b| is_special(b))
            .map(char::from)
            .collect();
        assert_eq!(specials, r"$()*+.?[\]^{|}");
    }

    #[test]
    fn test_quote_meta() {
        assert_eq!(quote_meta("1.5-2.0?"), r"1\.5-2\.0\?");
        assert_eq!(quote_meta(r"a\b"), r"a\\b");
        assert_eq!(quote_meta("[x]{2}"), r"\[x\]\{2\}");
        assert_eq!(quote_meta("^é$"), r"\^é\$");
        assert_eq!(quote_meta(""), "");
    }

    #[test]
    fn test_identity_fast_path() {
        let text = "plain-text, no metacharacters";
        let quoted = quote_meta(text);
        assert!(matches!(quoted, Cow::Borrowed(_)));
        assert!(core::ptr::eq(&*quoted, text));
    }

    proptest! {
        #[test]
        fn quoted_matches_itself(text in "\\PC{0,40}") {
            let quoted = quote_meta(&text);
            prop_assert!(quoted.len() <= 2 * text.len());

            if !text.bytes().any(is_special) {
                prop_assert_eq!(&*quoted, text.as_str());
            }

            for pattern in [
                RegexPattern::Basic(quoted.to_string()),
                RegexPattern::Fancy(quoted.to_string()),
            ] {
                let re = pattern.compile().unwrap();
                let m = re.find_first(&text).unwrap().unwrap();
                prop_assert_eq!(m.range(), 0..text.len());
            }
        }
    }
}
