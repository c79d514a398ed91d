//! Construction helpers for composite cursors
//!
//! Sequences hand out their begin/end cursor pair through [`IntoCursors`]; a tuple
//! or array of sequences turns into the begin/end component lists through
//! [`ListBounds`]. The factories return the begin and end composite cursors of
//! the resulting range.

use crate::cartesian::CartesianProduct;
use crate::concat::Concat;
use crate::cursor::Cursor;
use crate::cursors::{CharCursor, SliceCursor};
use crate::list::CursorList;

/// A sequence that can produce cursors at its begin and end
pub trait IntoCursors {
    type Cursor: Cursor;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor);
}

impl<'a, T> IntoCursors for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (SliceCursor::new(self), SliceCursor::end(self))
    }
}

impl<'a, T, const N: usize> IntoCursors for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().into_cursors()
    }
}

impl<'a, T> IntoCursors for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().into_cursors()
    }
}

impl<'a> IntoCursors for &'a str {
    type Cursor = CharCursor<'a>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        (CharCursor::new(self), CharCursor::end(self))
    }
}

impl<'a> IntoCursors for &'a String {
    type Cursor = CharCursor<'a>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        self.as_str().into_cursors()
    }
}

/// A fixed group of sequences that produces begin and end component lists
pub trait ListBounds {
    type List: CursorList;

    fn into_bounds(self) -> (Self::List, Self::List);
}

macro_rules! tuple_bounds {
    ($( ($($S:ident $idx:tt),+) )+) => {$(
        impl<$($S: IntoCursors),+> ListBounds for ($($S,)+) {
            type List = ($($S::Cursor,)+);

            fn into_bounds(self) -> (Self::List, Self::List) {
                let pairs = ($(self.$idx.into_cursors(),)+);
                (($(pairs.$idx.0,)+), ($(pairs.$idx.1,)+))
            }
        }
    )+};
}

tuple_bounds! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
}

impl<S: IntoCursors, const N: usize> ListBounds for [S; N] {
    type List = [S::Cursor; N];

    fn into_bounds(self) -> (Self::List, Self::List) {
        let pairs = self.map(IntoCursors::into_cursors);
        let begin = pairs.each_ref().map(|(begin, _)| begin.clone());
        let end = pairs.map(|(_, end)| end);
        (begin, end)
    }
}

/// Begin and end cursors of the concatenation of `sequences`
///
/// ```
/// use lazicomb::bounds::concat;
///
/// let (begin, end) = concat((&[1, 2], &[3, 4, 5]));
/// assert_eq!(end.distance(&begin), 5);
/// assert_eq!(*begin.at(2).unwrap(), 3);
/// ```
pub fn concat<S: ListBounds>(sequences: S) -> (Concat<S::List>, Concat<S::List>) {
    let (begin, end) = sequences.into_bounds();
    concat_range(begin, end)
}

/// Begin and end cursors of a concatenation given explicit component bounds
pub fn concat_range<L: CursorList>(begin: L, end: L) -> (Concat<L>, Concat<L>) {
    (
        Concat::begin(begin.clone(), end.clone()),
        Concat::end(begin, end),
    )
}

/// Begin and end cursors of the cartesian product of `sequences`
///
/// ```
/// use lazicomb::bounds::cartesian;
///
/// let (begin, end) = cartesian((&[1, 2], "ab"));
/// assert_eq!(begin.value().unwrap(), (&1, 'a'));
/// assert_eq!(begin.next().next().value().unwrap(), (&2, 'a'));
/// assert!(!end.is_begin());
/// ```
pub fn cartesian<S: ListBounds>(
    sequences: S,
) -> (CartesianProduct<S::List>, CartesianProduct<S::List>) {
    let (begin, end) = sequences.into_bounds();
    cartesian_range(begin, end)
}

/// Begin and end cursors of a cartesian product given explicit component bounds
pub fn cartesian_range<L: CursorList>(
    begin: L,
    end: L,
) -> (CartesianProduct<L>, CartesianProduct<L>) {
    (
        CartesianProduct::begin(begin.clone(), end.clone()),
        CartesianProduct::end(begin, end),
    )
}
