use crate::LazicombError;
use crate::capability::Capability;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::dispatch;
use crate::list::{BidirectionalList, ConcatList, CursorList, RandomAccessList};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use tracing::trace;

/// Cursor over the concatenation of several sequences
///
/// Visits every element of the first component, then every element of the
/// second, and so on. The cursor owns three lists of component cursors: the
/// current position plus the begin and end of every component. Operations are
/// available at the weakest capability among the components: any list can be
/// advanced, lists of bidirectional cursors can also retreat, and lists of
/// random-access cursors get offset arithmetic, distance and ordering.
///
/// ```
/// use lazicomb::concat::Concat;
/// use lazicomb::cursors::SliceCursor;
///
/// let first = [1, 2];
/// let second = [3, 4, 5];
/// let begin = (SliceCursor::new(&first), SliceCursor::new(&second));
/// let end = (SliceCursor::end(&first), SliceCursor::end(&second));
///
/// let start = Concat::begin(begin, end);
/// let stop = Concat::end(begin, end);
/// assert_eq!(stop.distance(&start), 5);
/// assert_eq!(*(start + 3).value().unwrap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Concat<L> {
    current: L,
    begin: L,
    end: L,
}

impl<L: CursorList> Concat<L> {
    /// Build a concatenation cursor at `current`
    ///
    /// `current` must follow the concatenation layout: components before the
    /// active one at their end, components after it at their begin.
    pub fn new(current: L, begin: L, end: L) -> Self {
        const { assert!(L::ARITY > 0, "a concatenation needs at least one component") };
        trace!(
            arity = L::ARITY,
            capability = %L::CAPABILITY,
            "building concatenation cursor"
        );
        Concat {
            current,
            begin,
            end,
        }
    }

    /// Cursor positioned on the first element
    pub fn begin(begin: L, end: L) -> Self {
        Concat::new(begin.clone(), begin, end)
    }

    /// Cursor positioned past the last element
    pub fn end(begin: L, end: L) -> Self {
        Concat::new(end.clone(), begin, end)
    }

    pub fn capability(&self) -> Capability {
        L::CAPABILITY
    }

    pub fn arity(&self) -> usize {
        L::ARITY
    }

    /// Index of the component the cursor currently reads from
    pub fn active_index(&self) -> usize {
        dispatch::active_index(&self.current, &self.end)
    }

    pub fn is_end(&self) -> bool {
        !dispatch::not_equal(&self.current, &self.end)
    }

    pub fn is_begin(&self) -> bool {
        !dispatch::not_equal(&self.current, &self.begin)
    }

    /// Current component cursors
    pub fn components(&self) -> &L {
        &self.current
    }

    pub fn advance(&mut self) {
        debug_assert!(!self.is_end(), "advanced a concatenation past its end");
        dispatch::advance_one(&mut self.current, &self.end);
    }

    /// Advance and return the position held before advancing
    pub fn post_advance(&mut self) -> Self {
        let previous = self.clone();
        self.advance();
        previous
    }

    pub fn next(mut self) -> Self {
        self.advance();
        self
    }

    pub fn try_next(self) -> Result<Self, LazicombError> {
        if self.is_end() {
            return Err(LazicombError::AlreadyAtEnd);
        }
        Ok(self.next())
    }
}

impl<L: ConcatList> Concat<L> {
    /// Value of the first component that is not yet exhausted
    pub fn value(&self) -> Result<L::Item, LazicombError> {
        dispatch::dereference(&self.current, &self.end)
    }
}

impl<L: BidirectionalList> Concat<L> {
    pub fn retreat(&mut self) {
        debug_assert!(!self.is_begin(), "retreated a concatenation past its begin");
        dispatch::retreat_one(&mut self.current, &self.begin);
    }

    /// Retreat and return the position held before retreating
    pub fn post_retreat(&mut self) -> Self {
        let previous = self.clone();
        self.retreat();
        previous
    }

    pub fn prev(mut self) -> Self {
        self.retreat();
        self
    }

    pub fn try_prev(self) -> Result<Self, LazicombError> {
        if self.is_begin() {
            return Err(LazicombError::AlreadyAtBegin);
        }
        Ok(self.prev())
    }
}

impl<L: RandomAccessList> Concat<L> {
    /// Move by `offset` positions, carrying across component boundaries
    pub fn advance_by(&mut self, offset: isize) {
        match offset.cmp(&0) {
            Ordering::Greater => dispatch::add_offset(&mut self.current, &self.end, offset),
            Ordering::Less => dispatch::subtract_offset(&mut self.current, &self.begin, -offset),
            Ordering::Equal => {}
        }
    }

    pub fn retreat_by(&mut self, offset: isize) {
        self.advance_by(-offset);
    }

    /// Signed number of positions from `origin` to `self`
    pub fn distance(&self, origin: &Self) -> isize {
        dispatch::total_distance(&self.current, &origin.current)
    }

    /// Zero-based position within the concatenation
    pub fn index(&self) -> usize {
        dispatch::total_distance(&self.current, &self.begin) as usize
    }

    /// Total number of elements across all components
    pub fn len(&self) -> usize {
        dispatch::total_distance(&self.end, &self.begin) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like [`Concat::advance_by`], but refuses offsets leaving `[begin, end]`
    pub fn try_advance_by(&mut self, offset: isize) -> Result<(), LazicombError> {
        let available = if offset >= 0 {
            dispatch::total_distance(&self.end, &self.current)
        } else {
            dispatch::total_distance(&self.current, &self.begin)
        };
        if offset.unsigned_abs() > available as usize {
            return Err(LazicombError::OffsetOutOfRange { offset, available });
        }
        self.advance_by(offset);
        Ok(())
    }

    pub fn try_retreat_by(&mut self, offset: isize) -> Result<(), LazicombError> {
        match offset.checked_neg() {
            Some(forward) => self.try_advance_by(forward),
            None => Err(LazicombError::OffsetOutOfRange {
                offset,
                available: dispatch::total_distance(&self.current, &self.begin),
            }),
        }
    }
}

impl<L: ConcatList + RandomAccessList> Concat<L> {
    /// Value `offset` positions away from the cursor
    pub fn at(&self, offset: isize) -> Result<L::Item, LazicombError> {
        let mut target = self.clone();
        target.try_advance_by(offset)?;
        target.value()
    }
}

impl<L: CursorList> PartialEq for Concat<L> {
    fn eq(&self, other: &Self) -> bool {
        !dispatch::not_equal(&self.current, &other.current)
    }
}

/// Ordered by the sign of the distance between the two cursors
impl<L: RandomAccessList> PartialOrd for Concat<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.distance(other).cmp(&0))
    }
}

impl<L: RandomAccessList> AddAssign<isize> for Concat<L> {
    fn add_assign(&mut self, offset: isize) {
        self.advance_by(offset);
    }
}

impl<L: RandomAccessList> SubAssign<isize> for Concat<L> {
    fn sub_assign(&mut self, offset: isize) {
        self.retreat_by(offset);
    }
}

impl<L: RandomAccessList> Add<isize> for Concat<L> {
    type Output = Concat<L>;

    fn add(mut self, offset: isize) -> Self::Output {
        self += offset;
        self
    }
}

impl<L: RandomAccessList> Sub<isize> for Concat<L> {
    type Output = Concat<L>;

    fn sub(mut self, offset: isize) -> Self::Output {
        self -= offset;
        self
    }
}

impl<L: RandomAccessList> Sub for Concat<L> {
    type Output = isize;

    fn sub(self, origin: Self) -> Self::Output {
        self.distance(&origin)
    }
}

impl<L: ConcatList> Cursor for Concat<L> {
    type Item = L::Item;

    const CAPABILITY: Capability = L::CAPABILITY;

    fn value(&self) -> Result<Self::Item, LazicombError> {
        dispatch::dereference(&self.current, &self.end)
    }

    fn advance(&mut self) {
        Concat::advance(self);
    }
}

impl<L: ConcatList + BidirectionalList> BidirectionalCursor for Concat<L> {
    fn retreat(&mut self) {
        Concat::retreat(self);
    }
}

impl<L: ConcatList + RandomAccessList> RandomAccessCursor for Concat<L> {
    fn advance_by(&mut self, offset: isize) {
        Concat::advance_by(self, offset);
    }

    fn distance(&self, origin: &Self) -> isize {
        Concat::distance(self, origin)
    }
}
