use crate::LazicombError;
use crate::capability::Capability;
use crate::cursor::{BidirectionalCursor, Cursor};

/// Restricts a cursor to forward traversal
///
/// Useful for feeding a strong cursor into a composite that must only rely on
/// forward operations, or for exercising capability degradation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardOnly<C>(pub C);

impl<C: Cursor> Cursor for ForwardOnly<C> {
    type Item = C::Item;

    const CAPABILITY: Capability = Capability::Forward;

    fn value(&self) -> Result<Self::Item, LazicombError> {
        self.0.value()
    }

    fn advance(&mut self) {
        self.0.advance();
    }
}

/// Restricts a cursor to stepping in both directions, hiding offset arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidirectionalOnly<C>(pub C);

impl<C: BidirectionalCursor> Cursor for BidirectionalOnly<C> {
    type Item = C::Item;

    const CAPABILITY: Capability = Capability::Bidirectional;

    fn value(&self) -> Result<Self::Item, LazicombError> {
        self.0.value()
    }

    fn advance(&mut self) {
        self.0.advance();
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for BidirectionalOnly<C> {
    fn retreat(&mut self) {
        self.0.retreat();
    }
}
