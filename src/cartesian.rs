use crate::LazicombError;
use crate::capability::Capability;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::dispatch;
use crate::list::{BidirectionalList, CursorList, ProductList, RandomAccessList};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use tracing::{debug, trace};

/// Cursor over every combination of one element from each component
///
/// Combinations are visited odometer-style: the last component varies fastest,
/// and when it runs off its end it wraps to its begin and carries one step into
/// the component before it. Once the first component overflows, every component
/// sits at its end, which is the end position of the product.
///
/// Dereferencing yields the values of all components at once.
///
/// ```
/// use lazicomb::cartesian::CartesianProduct;
/// use lazicomb::cursors::SliceCursor;
///
/// let digits = [1, 2];
/// let tens = [10, 20, 30];
/// let begin = (SliceCursor::new(&digits), SliceCursor::new(&tens));
/// let end = (SliceCursor::end(&digits), SliceCursor::end(&tens));
///
/// let mut cursor = CartesianProduct::begin(begin, end);
/// cursor.advance();
/// assert_eq!(cursor.value().unwrap(), (&1, &20));
/// assert_eq!(cursor.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct CartesianProduct<L> {
    current: L,
    begin: L,
    end: L,
}

impl<L: CursorList> CartesianProduct<L> {
    pub fn new(current: L, begin: L, end: L) -> Self {
        const { assert!(L::ARITY > 0, "a cartesian product needs at least one component") };
        trace!(
            arity = L::ARITY,
            capability = %L::CAPABILITY,
            "building cartesian product cursor"
        );
        CartesianProduct {
            current,
            begin,
            end,
        }
    }

    /// Cursor on the first combination
    ///
    /// When any component is empty the product is empty and this equals
    /// [`CartesianProduct::end`].
    pub fn begin(begin: L, end: L) -> Self {
        match (0..L::ARITY).find(|&index| begin.same_at(index, &end)) {
            Some(index) => {
                debug!(index, "empty component, cartesian product is empty");
                CartesianProduct::new(end.clone(), begin, end)
            }
            None => CartesianProduct::new(begin.clone(), begin, end),
        }
    }

    /// Cursor past the last combination: every component at its end
    pub fn end(begin: L, end: L) -> Self {
        CartesianProduct::new(end.clone(), begin, end)
    }

    pub fn capability(&self) -> Capability {
        L::CAPABILITY
    }

    pub fn arity(&self) -> usize {
        L::ARITY
    }

    pub fn is_end(&self) -> bool {
        !dispatch::not_equal(&self.current, &self.end)
    }

    /// Whether the cursor sits on the first combination
    ///
    /// An empty product starts at its end, so there begin and end coincide.
    pub fn is_begin(&self) -> bool {
        if self.has_empty_component() {
            return self.is_end();
        }
        !dispatch::not_equal(&self.current, &self.begin)
    }

    fn has_empty_component(&self) -> bool {
        (0..L::ARITY).any(|index| self.begin.same_at(index, &self.end))
    }

    pub fn components(&self) -> &L {
        &self.current
    }

    /// Step to the next combination, carrying toward index 0
    pub fn advance(&mut self) {
        debug_assert!(!self.is_end(), "advanced a cartesian product past its end");

        for index in (1..L::ARITY).rev() {
            self.current.advance_at(index);
            if !self.current.same_at(index, &self.end) {
                return;
            }
            self.current.reset_at(index, &self.begin);
        }

        self.current.advance_at(0);
        if self.current.same_at(0, &self.end) {
            trace!("cartesian product exhausted");
            self.current = self.end.clone();
        }
    }

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

impl<L: ProductList> CartesianProduct<L> {
    /// Values of every component at the current combination
    pub fn value(&self) -> Result<L::Values, LazicombError> {
        self.current.values()
    }
}

impl<L: BidirectionalList> CartesianProduct<L> {
    /// Step to the previous combination, borrowing toward index 0
    pub fn retreat(&mut self) {
        debug_assert!(!self.is_begin(), "retreated a cartesian product past its begin");

        if self.is_end() {
            // The last combination has every component on its last element
            for index in 0..L::ARITY {
                self.current.retreat_at(index);
            }
            return;
        }

        for index in (1..L::ARITY).rev() {
            if !self.current.same_at(index, &self.begin) {
                self.current.retreat_at(index);
                return;
            }
            self.current.reset_at(index, &self.end);
            self.current.retreat_at(index);
        }
        self.current.retreat_at(0);
    }

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

impl<L: RandomAccessList> CartesianProduct<L> {
    /// Length of component `index`, the radix of its digit
    fn radix(&self, index: usize) -> isize {
        self.end.distance_at(index, &self.begin)
    }

    /// Number of combinations
    pub fn len(&self) -> usize {
        (0..L::ARITY).map(|index| self.radix(index)).product::<isize>() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of the current combination, index 0 being the most
    /// significant digit
    pub fn position(&self) -> usize {
        self.flat_position() as usize
    }

    fn flat_position(&self) -> isize {
        if self.is_end() {
            return self.len() as isize;
        }
        (0..L::ARITY).fold(0, |flat, index| {
            flat * self.radix(index) + self.current.distance_at(index, &self.begin)
        })
    }

    /// Jump to the combination with flat index `position`
    ///
    /// The index is split into per-component digits by repeated division by each
    /// component length, least significant (last) component first.
    pub fn seek(&mut self, position: usize) {
        self.seek_flat(position as isize);
    }

    /// Out-of-range targets are not clamped: the excess lands on component 0.
    fn seek_flat(&mut self, target: isize) {
        let len = self.len() as isize;
        debug_assert!(
            (0..=len).contains(&target),
            "seek to {} outside a cartesian product of {} combinations",
            target,
            len
        );
        if target == len {
            self.current = self.end.clone();
            return;
        }

        let mut rest = target;
        for index in (1..L::ARITY).rev() {
            let radix = self.radix(index);
            self.current.reset_at(index, &self.begin);
            self.current.advance_at_by(index, rest.rem_euclid(radix));
            rest = rest.div_euclid(radix);
        }
        self.current.reset_at(0, &self.begin);
        self.current.advance_at_by(0, rest);
    }

    pub fn advance_by(&mut self, offset: isize) {
        if offset == 0 {
            return;
        }
        self.seek_flat(self.flat_position() + offset);
    }

    pub fn retreat_by(&mut self, offset: isize) {
        self.advance_by(-offset);
    }

    /// Signed number of combinations from `origin` to `self`
    pub fn distance(&self, origin: &Self) -> isize {
        self.flat_position() - origin.flat_position()
    }

    pub fn try_advance_by(&mut self, offset: isize) -> Result<(), LazicombError> {
        let position = self.flat_position();
        let available = if offset >= 0 {
            self.len() as isize - position
        } else {
            position
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
                available: self.flat_position(),
            }),
        }
    }
}

impl<L: ProductList + RandomAccessList> CartesianProduct<L> {
    pub fn at(&self, offset: isize) -> Result<L::Values, LazicombError> {
        let mut target = self.clone();
        target.try_advance_by(offset)?;
        target.value()
    }
}

impl<L: CursorList> PartialEq for CartesianProduct<L> {
    fn eq(&self, other: &Self) -> bool {
        !dispatch::not_equal(&self.current, &other.current)
    }
}

impl<L: RandomAccessList> PartialOrd for CartesianProduct<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.distance(other).cmp(&0))
    }
}

impl<L: RandomAccessList> AddAssign<isize> for CartesianProduct<L> {
    fn add_assign(&mut self, offset: isize) {
        self.advance_by(offset);
    }
}

impl<L: RandomAccessList> SubAssign<isize> for CartesianProduct<L> {
    fn sub_assign(&mut self, offset: isize) {
        self.retreat_by(offset);
    }
}

impl<L: RandomAccessList> Add<isize> for CartesianProduct<L> {
    type Output = CartesianProduct<L>;

    fn add(mut self, offset: isize) -> Self::Output {
        self += offset;
        self
    }
}

impl<L: RandomAccessList> Sub<isize> for CartesianProduct<L> {
    type Output = CartesianProduct<L>;

    fn sub(mut self, offset: isize) -> Self::Output {
        self -= offset;
        self
    }
}

impl<L: RandomAccessList> Sub for CartesianProduct<L> {
    type Output = isize;

    fn sub(self, origin: Self) -> Self::Output {
        self.distance(&origin)
    }
}

impl<L: ProductList> Cursor for CartesianProduct<L> {
    type Item = L::Values;

    const CAPABILITY: Capability = L::CAPABILITY;

    fn value(&self) -> Result<Self::Item, LazicombError> {
        self.current.values()
    }

    fn advance(&mut self) {
        CartesianProduct::advance(self);
    }
}

impl<L: ProductList + BidirectionalList> BidirectionalCursor for CartesianProduct<L> {
    fn retreat(&mut self) {
        CartesianProduct::retreat(self);
    }
}

impl<L: ProductList + RandomAccessList> RandomAccessCursor for CartesianProduct<L> {
    fn advance_by(&mut self, offset: isize) {
        CartesianProduct::advance_by(self, offset);
    }

    fn distance(&self, origin: &Self) -> isize {
        CartesianProduct::distance(self, origin)
    }
}
