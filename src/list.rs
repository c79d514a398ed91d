//! Fixed-arity lists of component cursors
//!
//! A list holds one cursor per constituent sequence and exposes each component by
//! index, so the composition algorithms in [`crate::dispatch`] can walk the
//! components with ordinary loops. Lists are implemented for tuples of arity 1
//! through 8 (heterogeneous cursor types) and for arrays `[C; N]`.
//!
//! A list implements [`BidirectionalList`] or [`RandomAccessList`] only when every
//! component does, which makes the capability of a composite the weakest
//! capability among its components without any runtime check.

use crate::LazicombError;
use crate::capability::Capability;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};

/// A fixed-size list of component cursors, addressed by index
pub trait CursorList: Clone + PartialEq {
    /// Number of components, fixed by the list type
    const ARITY: usize;

    /// Weakest capability among the components
    const CAPABILITY: Capability;

    /// Whether component `index` of `self` equals component `index` of `other`
    fn same_at(&self, index: usize, other: &Self) -> bool;

    fn advance_at(&mut self, index: usize);

    /// Overwrite component `index` with the matching component of `source`
    fn reset_at(&mut self, index: usize, source: &Self);
}

pub trait BidirectionalList: CursorList {
    fn retreat_at(&mut self, index: usize);
}

pub trait RandomAccessList: BidirectionalList {
    fn advance_at_by(&mut self, index: usize, offset: isize);

    /// Signed distance from component `index` of `origin` to that of `self`
    fn distance_at(&self, index: usize, origin: &Self) -> isize;
}

/// A list whose components all yield the same item type
pub trait ConcatList: CursorList {
    type Item;

    fn value_at(&self, index: usize) -> Result<Self::Item, LazicombError>;
}

/// A list that can read every component at once
pub trait ProductList: CursorList {
    type Values;

    fn values(&self) -> Result<Self::Values, LazicombError>;
}

#[cold]
fn out_of_range(index: usize, arity: usize) -> ! {
    unreachable!("component index {} out of range for arity {}", index, arity)
}

macro_rules! one {
    ($ignored:ident) => {
        1
    };
}

macro_rules! tuple_lists {
    ($( ($H:ident $hidx:tt $(, $C:ident $idx:tt)*) )+) => {$(
        impl<$H: Cursor $(, $C: Cursor)*> CursorList for ($H, $($C,)*) {
            const ARITY: usize = 1 $(+ one!($C))*;

            const CAPABILITY: Capability =
                <$H as Cursor>::CAPABILITY $(.meet(<$C as Cursor>::CAPABILITY))*;

            fn same_at(&self, index: usize, other: &Self) -> bool {
                match index {
                    $hidx => self.$hidx == other.$hidx,
                    $($idx => self.$idx == other.$idx,)*
                    _ => out_of_range(index, Self::ARITY),
                }
            }

            fn advance_at(&mut self, index: usize) {
                match index {
                    $hidx => self.$hidx.advance(),
                    $($idx => self.$idx.advance(),)*
                    _ => out_of_range(index, Self::ARITY),
                }
            }

            fn reset_at(&mut self, index: usize, source: &Self) {
                match index {
                    $hidx => self.$hidx = source.$hidx.clone(),
                    $($idx => self.$idx = source.$idx.clone(),)*
                    _ => out_of_range(index, Self::ARITY),
                }
            }
        }

        impl<$H: BidirectionalCursor $(, $C: BidirectionalCursor)*> BidirectionalList
            for ($H, $($C,)*)
        {
            fn retreat_at(&mut self, index: usize) {
                match index {
                    $hidx => self.$hidx.retreat(),
                    $($idx => self.$idx.retreat(),)*
                    _ => out_of_range(index, Self::ARITY),
                }
            }
        }

        impl<$H: RandomAccessCursor $(, $C: RandomAccessCursor)*> RandomAccessList
            for ($H, $($C,)*)
        {
            fn advance_at_by(&mut self, index: usize, offset: isize) {
                match index {
                    $hidx => self.$hidx.advance_by(offset),
                    $($idx => self.$idx.advance_by(offset),)*
                    _ => out_of_range(index, Self::ARITY),
                }
            }

            fn distance_at(&self, index: usize, origin: &Self) -> isize {
                match index {
                    $hidx => self.$hidx.distance(&origin.$hidx),
                    $($idx => self.$idx.distance(&origin.$idx),)*
                    _ => out_of_range(index, Self::ARITY),
                }
            }
        }

        impl<$H: Cursor $(, $C: Cursor<Item = <$H as Cursor>::Item>)*> ConcatList
            for ($H, $($C,)*)
        {
            type Item = <$H as Cursor>::Item;

            fn value_at(&self, index: usize) -> Result<Self::Item, LazicombError> {
                match index {
                    $hidx => self.$hidx.value(),
                    $($idx => self.$idx.value(),)*
                    _ => out_of_range(index, Self::ARITY),
                }
            }
        }

        impl<$H: Cursor $(, $C: Cursor)*> ProductList for ($H, $($C,)*) {
            type Values = (<$H as Cursor>::Item, $(<$C as Cursor>::Item,)*);

            fn values(&self) -> Result<Self::Values, LazicombError> {
                Ok((self.$hidx.value()?, $(self.$idx.value()?,)*))
            }
        }
    )+};
}

tuple_lists! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
}

impl<C: Cursor, const N: usize> CursorList for [C; N] {
    const ARITY: usize = N;

    const CAPABILITY: Capability = C::CAPABILITY;

    fn same_at(&self, index: usize, other: &Self) -> bool {
        self[index] == other[index]
    }

    fn advance_at(&mut self, index: usize) {
        self[index].advance();
    }

    fn reset_at(&mut self, index: usize, source: &Self) {
        self[index] = source[index].clone();
    }
}

impl<C: BidirectionalCursor, const N: usize> BidirectionalList for [C; N] {
    fn retreat_at(&mut self, index: usize) {
        self[index].retreat();
    }
}

impl<C: RandomAccessCursor, const N: usize> RandomAccessList for [C; N] {
    fn advance_at_by(&mut self, index: usize, offset: isize) {
        self[index].advance_by(offset);
    }

    fn distance_at(&self, index: usize, origin: &Self) -> isize {
        self[index].distance(&origin[index])
    }
}

impl<C: Cursor, const N: usize> ConcatList for [C; N] {
    type Item = C::Item;

    fn value_at(&self, index: usize) -> Result<Self::Item, LazicombError> {
        self[index].value()
    }
}

impl<C: Cursor, const N: usize> ProductList for [C; N] {
    type Values = Vec<C::Item>;

    fn values(&self) -> Result<Self::Values, LazicombError> {
        self.iter().map(Cursor::value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{CharCursor, ForwardOnly, SliceCursor};

    #[test]
    fn test_arity() {
        let a = [1u8];
        type Three<'a> = (SliceCursor<'a, u8>, SliceCursor<'a, u8>, SliceCursor<'a, u8>);
        assert_eq!(<(SliceCursor<'_, u8>,) as CursorList>::ARITY, 1);
        assert_eq!(<Three<'_> as CursorList>::ARITY, 3);
        assert_eq!(<[SliceCursor<'_, u8>; 5] as CursorList>::ARITY, 5);

        let list = (SliceCursor::new(&a),);
        assert!(list.same_at(0, &list.clone()));
    }

    #[test]
    fn test_capability_is_weakest_component() {
        type Strong<'a> = (SliceCursor<'a, char>, SliceCursor<'a, char>);
        type Mixed<'a> = (SliceCursor<'a, char>, CharCursor<'a>);
        type Weak<'a> = (CharCursor<'a>, ForwardOnly<CharCursor<'a>>, SliceCursor<'a, u8>);

        assert_eq!(<Strong<'_> as CursorList>::CAPABILITY, Capability::RandomAccess);
        assert_eq!(<Mixed<'_> as CursorList>::CAPABILITY, Capability::Bidirectional);
        assert_eq!(<Weak<'_> as CursorList>::CAPABILITY, Capability::Forward);
    }

    #[test]
    fn test_per_index_operations() {
        let numbers = [1, 2, 3];
        let text = "xy";
        let begin = (SliceCursor::new(&numbers), CharCursor::new(text));
        let mut list = begin;

        list.advance_at(1);
        assert!(list.same_at(0, &begin));
        assert!(!list.same_at(1, &begin));
        assert_eq!(list.values().unwrap(), (&1, 'y'));

        list.advance_at(0);
        list.retreat_at(1);
        assert_eq!(list.values().unwrap(), (&2, 'x'));

        list.reset_at(0, &begin);
        assert_eq!(list, begin);
    }

    #[test]
    fn test_random_access_per_index() {
        let first = [1, 2, 3, 4];
        let second = [5, 6];
        let begin = [SliceCursor::new(&first), SliceCursor::new(&second)];
        let mut list = begin;

        list.advance_at_by(0, 3);
        list.advance_at_by(1, 2);
        assert_eq!(list.distance_at(0, &begin), 3);
        assert_eq!(list.distance_at(1, &begin), 2);
        assert_eq!(*list.value_at(0).unwrap(), 4);
        assert!(list.value_at(1).is_err());
    }

    #[test]
    fn test_concat_values_share_item() {
        let first = [1, 2];
        let second = [3];
        let list = (SliceCursor::new(&first), SliceCursor::new(&second));

        assert_eq!(*list.value_at(0).unwrap(), 1);
        assert_eq!(*list.value_at(1).unwrap(), 3);
    }

    #[test]
    fn test_array_values() {
        let first = [1, 2];
        let second = [3, 4];
        let list = [SliceCursor::new(&first), SliceCursor::at(&second, 1)];

        assert_eq!(list.values().unwrap(), vec![&1, &4]);

        let exhausted = [SliceCursor::new(&first), SliceCursor::end(&second)];
        assert!(matches!(
            exhausted.values(),
            Err(LazicombError::CannotReadValueAtEnd { position: 2 })
        ));
    }
}
