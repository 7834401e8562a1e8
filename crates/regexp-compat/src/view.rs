//! # Text / Byte View Bridge
//!
//! The byte-slice entry points search the same storage as the text ones.
//! Neither direction copies; nothing here hands out mutable access,
//! so a borrowed view can never be observed changing.

use core::ops::Range;

use crate::errors::RegexpResult;

/// An immutable, zero-copy view over UTF-8 text.
///
/// Byte offsets from a search over [`TextView::as_str`] index
/// [`TextView::as_bytes`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextView<'a> {
    text: &'a str,
}

impl<'a> TextView<'a> {
    /// View `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// View `bytes` as text.
    ///
    /// ## Returns
    /// [`RegexpError::InvalidUtf8`](crate::RegexpError::InvalidUtf8)
    /// if `bytes` is not UTF-8.
    pub fn try_from_bytes(bytes: &'a [u8]) -> RegexpResult<Self> {
        Ok(Self::new(core::str::from_utf8(bytes)?))
    }

    /// The text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The same storage as bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Is the view empty?
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// A byte sub-slice of the underlying storage.
    pub fn slice(
        &self,
        range: Range<usize>,
    ) -> &'a [u8] {
        &self.as_bytes()[range]
    }

    /// A text sub-slice of the underlying storage.
    ///
    /// ## Panics
    /// If `range` does not fall on character boundaries.
    pub fn slice_str(
        &self,
        range: Range<usize>,
    ) -> &'a str {
        &self.text[range]
    }
}

impl<'a> From<&'a str> for TextView<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> TryFrom<&'a [u8]> for TextView<'a> {
    type Error = crate::RegexpError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::try_from_bytes(bytes)
    }
}

impl AsRef<str> for TextView<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

/// View text as bytes, without copying.
pub fn text_as_bytes(text: &str) -> &[u8] {
    text.as_bytes()
}

/// View bytes as text, without copying.
///
/// ## Returns
/// [`RegexpError::InvalidUtf8`](crate::RegexpError::InvalidUtf8)
/// if `bytes` is not UTF-8.
pub fn bytes_as_text(bytes: &[u8]) -> RegexpResult<&str> {
    Ok(TextView::try_from_bytes(bytes)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegexpError;

    #[test]
    fn test_no_copy() {
        let bytes = "héllo".as_bytes();
        let view = TextView::try_from_bytes(bytes).unwrap();

        assert_eq!(view.as_str(), "héllo");
        assert_eq!(view.len(), 6);
        assert!(core::ptr::eq(view.as_bytes(), bytes));
        assert!(core::ptr::eq(view.slice(1..3).as_ptr(), bytes[1..].as_ptr()));
        assert_eq!(view.slice_str(1..3), "é");

        let text = bytes_as_text(bytes).unwrap();
        assert!(core::ptr::eq(text_as_bytes(text), bytes));
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes: &[u8] = b"ab\xffcd";
        assert!(matches!(
            TextView::try_from(bytes),
            Err(RegexpError::InvalidUtf8(_))
        ));
        assert!(bytes_as_text(bytes).is_err());
    }

    #[test]
    fn test_from_str() {
        let view: TextView = "abc".into();
        assert_eq!(view.as_ref(), "abc");
        assert!(!view.is_empty());
        assert!(TextView::default().is_empty());
    }
}
