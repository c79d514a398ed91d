use crate::LazicombError;
use crate::capability::Capability;

/// Generic forward cursor over a sequence
///
/// A cursor marks a position in a sequence that can be advanced and compared.
/// Cursors are plain values: cloning one yields an independent position, and
/// mutating a clone never affects the original. The sequence itself is owned
/// elsewhere and is only ever read.
pub trait Cursor: Clone + PartialEq {
    /// The type of elements this cursor yields
    type Item;

    /// Capability level of this cursor type
    ///
    /// Must name the strongest of [`Cursor`], [`BidirectionalCursor`] and
    /// [`RandomAccessCursor`] the type implements.
    const CAPABILITY: Capability;

    /// Get the element at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the sequence
    fn value(&self) -> Result<Self::Item, LazicombError>;

    /// Advance the cursor to the next element
    ///
    /// Advancing a cursor already at its end is a precondition violation.
    fn advance(&mut self);

    /// Consuming form of [`Cursor::advance`]
    fn next(mut self) -> Self {
        self.advance();
        self
    }
}

/// A cursor that can also step backwards
///
/// Implementors declare at least [`Capability::Bidirectional`] as their
/// [`Cursor::CAPABILITY`].
pub trait BidirectionalCursor: Cursor {
    /// Move the cursor to the previous element
    ///
    /// Retreating a cursor already at its begin is a precondition violation.
    fn retreat(&mut self);

    fn prev(mut self) -> Self {
        self.retreat();
        self
    }
}

/// A cursor supporting constant-time offset arithmetic
///
/// Implementors declare [`Capability::RandomAccess`] as their
/// [`Cursor::CAPABILITY`].
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Move the cursor by `offset` positions (negative moves backwards)
    fn advance_by(&mut self, offset: isize);

    /// Signed number of positions from `origin` to `self`
    ///
    /// Both cursors must range over the same sequence.
    fn distance(&self, origin: &Self) -> isize;

    fn retreat_by(&mut self, offset: isize) {
        self.advance_by(-offset);
    }
}
