use crate::LazicombError;
use crate::capability::Capability;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use std::fmt;

/// Random-access cursor over a borrowed slice
///
/// Positions run from `0` (begin) to `data.len()` (end). Two cursors are equal
/// when they point into the same slice at the same position; slices with equal
/// contents but different storage are different sequences.
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    /// Element index in `data`, `data.len()` at the end
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceCursor { data, position: 0 }
    }

    /// Cursor positioned one past the last element
    pub fn end(data: &'a [T]) -> Self {
        SliceCursor {
            data,
            position: data.len(),
        }
    }

    pub fn at(data: &'a [T], position: usize) -> Self {
        debug_assert!(position <= data.len(), "slice cursor out of range");
        SliceCursor { data, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> &'a [T] {
        self.data
    }

    pub fn eos(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Consume the cursor and return its slice and position
    pub fn inner(self) -> (&'a [T], usize) {
        (self.data, self.position)
    }
}

// Manual impls: deriving would demand `T: Clone`/`T: PartialEq` for a cursor that
// only copies a reference and compares by identity.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data, other.data) && self.position == other.position
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("position", &self.position)
            .field("len", &self.data.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    const CAPABILITY: Capability = Capability::RandomAccess;

    fn value(&self) -> Result<Self::Item, LazicombError> {
        self.data
            .get(self.position)
            .ok_or(LazicombError::CannotReadValueAtEnd {
                position: self.position,
            })
    }

    fn advance(&mut self) {
        debug_assert!(!self.eos(), "advanced a slice cursor past its end");
        self.position += 1;
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    fn retreat(&mut self) {
        debug_assert!(self.position > 0, "retreated a slice cursor past its begin");
        self.position -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    fn advance_by(&mut self, offset: isize) {
        let target = self.position as isize + offset;
        debug_assert!(
            (0..=self.data.len() as isize).contains(&target),
            "slice cursor offset {} out of range",
            offset
        );
        self.position = target as usize;
    }

    fn distance(&self, origin: &Self) -> isize {
        debug_assert!(
            std::ptr::eq(self.data, origin.data),
            "distance between cursors of different slices"
        );
        self.position as isize - origin.position as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let data = b"hello\nworld";
        let cursor = SliceCursor::new(data);

        assert_eq!(*cursor.value().unwrap(), b'h');

        let cursor = cursor.next();
        assert_eq!(*cursor.value().unwrap(), b'e');
    }

    #[test]
    fn test_end_of_slice() {
        let data = [10u32, 20];
        let mut cursor = SliceCursor::new(&data);

        assert_eq!(*cursor.value().unwrap(), 10);
        cursor.advance();
        assert_eq!(*cursor.value().unwrap(), 20);

        cursor.advance();
        assert!(cursor.eos());
        assert_eq!(cursor, SliceCursor::end(&data));
        assert!(matches!(
            cursor.value(),
            Err(LazicombError::CannotReadValueAtEnd { position: 2 })
        ));
    }

    #[test]
    fn test_empty_data() {
        let data: [u32; 0] = [];
        let cursor = SliceCursor::new(&data);

        assert!(cursor.eos());
        assert_eq!(cursor, SliceCursor::end(&data));
        assert!(cursor.value().is_err());
    }

    #[test]
    fn test_retreat_and_prev() {
        let data = [1, 2, 3];
        let cursor = SliceCursor::end(&data).prev();
        assert_eq!(*cursor.value().unwrap(), 3);

        let mut cursor = cursor;
        cursor.retreat();
        cursor.retreat();
        assert_eq!(*cursor.value().unwrap(), 1);
        assert_eq!(cursor, SliceCursor::new(&data));
    }

    #[test]
    fn test_advance_by_and_distance() {
        let data = [5u32, 10, 15, 20];
        let begin = SliceCursor::new(&data);
        let mut cursor = begin;

        cursor.advance_by(3);
        assert_eq!(*cursor.value().unwrap(), 20);
        assert_eq!(cursor.distance(&begin), 3);
        assert_eq!(begin.distance(&cursor), -3);

        cursor.retreat_by(2);
        assert_eq!(*cursor.value().unwrap(), 10);

        cursor.advance_by(-1);
        assert_eq!(cursor, begin);

        assert_eq!(SliceCursor::end(&data).distance(&begin), 4);
    }

    #[test]
    fn test_equality_is_by_identity() {
        let first = [1, 2, 3];
        let second = [1, 2, 3];

        assert_eq!(SliceCursor::new(&first), SliceCursor::new(&first));
        assert_ne!(SliceCursor::new(&first), SliceCursor::new(&second));
        assert_ne!(SliceCursor::new(&first), SliceCursor::at(&first, 1));
    }

    #[test]
    fn test_copy_independence() {
        let data = [5u32, 10, 15, 20];
        let cursor = SliceCursor::new(&data);

        let saved_at_5 = cursor;
        let also_at_5 = cursor;

        let cursor = cursor.next();
        assert_eq!(*cursor.value().unwrap(), 10);

        assert_eq!(*saved_at_5.value().unwrap(), 5);
        assert_eq!(*also_at_5.value().unwrap(), 5);

        let saved_at_10 = cursor;

        let cursor = cursor.next();
        assert_eq!(*cursor.value().unwrap(), 15);

        assert_eq!(*saved_at_5.value().unwrap(), 5);
        assert_eq!(*saved_at_10.value().unwrap(), 10);

        let from_5 = saved_at_5.next();
        assert_eq!(*from_5.value().unwrap(), 10);

        let from_10 = saved_at_10.next();
        assert_eq!(*from_10.value().unwrap(), 15);
    }

    #[test]
    fn test_position_and_source() {
        let data = [1u32, 2, 3];
        let cursor = SliceCursor::new(&data);

        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.source(), &[1, 2, 3]);

        let cursor = cursor.next().next().next();
        assert_eq!(cursor.position(), 3); // At end
        assert!(cursor.eos());

        let (source, pos) = SliceCursor::at(&data, 2).inner();
        assert_eq!(source, &[1, 2, 3]);
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_capability() {
        assert_eq!(
            <SliceCursor<'_, u8> as Cursor>::CAPABILITY,
            Capability::RandomAccess
        );
    }
}
