use crate::LazicombError;
use crate::capability::Capability;
use crate::cursor::{BidirectionalCursor, Cursor};

/// Bidirectional cursor over the characters of a UTF-8 string
///
/// Characters have variable width, so stepping is linear in the encoded length
/// and offset arithmetic is not offered.
#[derive(Debug, Clone, Copy)]
pub struct CharCursor<'a> {
    text: &'a str,
    /// Byte offset of the current character, always on a char boundary
    position: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        CharCursor { text, position: 0 }
    }

    pub fn end(text: &'a str) -> Self {
        CharCursor {
            text,
            position: text.len(),
        }
    }

    /// Byte offset into the source string
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> &'a str {
        self.text
    }

    pub fn eos(&self) -> bool {
        self.position >= self.text.len()
    }

    /// The unread tail of the string
    pub fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }
}

impl PartialEq for CharCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.text, other.text) && self.position == other.position
    }
}

impl Eq for CharCursor<'_> {}

impl Cursor for CharCursor<'_> {
    type Item = char;

    const CAPABILITY: Capability = Capability::Bidirectional;

    fn value(&self) -> Result<Self::Item, LazicombError> {
        self.rest()
            .chars()
            .next()
            .ok_or(LazicombError::CannotReadValueAtEnd {
                position: self.position,
            })
    }

    fn advance(&mut self) {
        match self.rest().chars().next() {
            Some(ch) => self.position += ch.len_utf8(),
            None => debug_assert!(false, "advanced a char cursor past its end"),
        }
    }
}

impl BidirectionalCursor for CharCursor<'_> {
    fn retreat(&mut self) {
        match self.text[..self.position].chars().next_back() {
            Some(ch) => self.position -= ch.len_utf8(),
            None => debug_assert!(false, "retreated a char cursor past its begin"),
        }
    }
}
