//! Composition primitives over a [`CursorList`]
//!
//! Each primitive walks the components of a list by index, forward for
//! increment/offset-add/equality/dereference and backward for
//! decrement/offset-subtract, and stops at the first component that can absorb
//! the operation. The concatenation cursor is built directly on these; the
//! cartesian product reuses the equality primitive.
//!
//! Every primitive expects the concatenation layout: for some active index `k`,
//! components below `k` sit at their end, component `k` is anywhere in its range
//! and components above `k` sit at their begin.

use crate::LazicombError;
use crate::list::{BidirectionalList, ConcatList, CursorList, RandomAccessList};
use tracing::trace;

/// Index of the first component that is not at its end, or the last index
pub fn active_index<L: CursorList>(current: &L, end: &L) -> usize {
    let last = L::ARITY - 1;
    (0..last)
        .find(|&index| !current.same_at(index, end))
        .unwrap_or(last)
}

/// Advance the active component by one
///
/// An exhausted component hands over to the next one without consuming any of
/// its elements: the next dereference reads that component's first element.
pub fn advance_one<L: CursorList>(current: &mut L, end: &L) {
    let index = active_index(current, end);
    current.advance_at(index);
}

/// True when any single component differs
pub fn not_equal<L: CursorList>(a: &L, b: &L) -> bool {
    (0..L::ARITY).any(|index| !a.same_at(index, b))
}

/// Value of the first component that is not exhausted
pub fn dereference<L: ConcatList>(current: &L, end: &L) -> Result<L::Item, LazicombError> {
    current.value_at(active_index(current, end))
}

/// Retreat the last component that has left its begin
pub fn retreat_one<L: BidirectionalList>(current: &mut L, begin: &L) {
    let index = (1..L::ARITY)
        .rev()
        .find(|&index| !current.same_at(index, begin))
        .unwrap_or(0);
    current.retreat_at(index);
}

/// Spend `offset` forward positions across the components in index order
///
/// Each component is driven to its end before the remainder carries into the
/// next one; the last component takes whatever is left.
pub fn add_offset<L: RandomAccessList>(current: &mut L, end: &L, mut offset: isize) {
    debug_assert!(offset >= 0, "add_offset takes a non-negative offset");
    let last = L::ARITY - 1;

    for index in 0..last {
        let room = end.distance_at(index, current);
        if room > offset {
            current.advance_at_by(index, offset);
            return;
        }
        if room > 0 {
            current.advance_at_by(index, room);
            offset -= room;
            trace!(index, room, remaining = offset, "offset carried past component end");
        }
    }

    debug_assert!(
        offset <= end.distance_at(last, current),
        "offset moves past the end of the concatenation"
    );
    current.advance_at_by(last, offset);
}

/// Spend `offset` backward positions across the components, last index first
///
/// The room of a component is how far it has moved from its begin, so a
/// component sitting at its end gives back its whole length.
pub fn subtract_offset<L: RandomAccessList>(current: &mut L, begin: &L, mut offset: isize) {
    debug_assert!(offset >= 0, "subtract_offset takes a non-negative offset");

    for index in (1..L::ARITY).rev() {
        let consumed = current.distance_at(index, begin);
        if consumed == 0 {
            continue;
        }
        if consumed >= offset {
            current.advance_at_by(index, -offset);
            return;
        }
        current.reset_at(index, begin);
        offset -= consumed;
        trace!(index, consumed, remaining = offset, "offset carried past component begin");
    }

    debug_assert!(
        offset <= current.distance_at(0, begin),
        "offset moves before the begin of the concatenation"
    );
    current.advance_at_by(0, -offset);
}

/// Sum of the per-component distances from `origin` to `current`
pub fn total_distance<L: RandomAccessList>(current: &L, origin: &L) -> isize {
    (0..L::ARITY)
        .map(|index| current.distance_at(index, origin))
        .sum()
}
