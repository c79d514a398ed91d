//! # LaziComb - Lazy Sequence Composition
//!
//! A library of cursor combinators that present several independent sequences as
//! one logical sequence, without copying or materialising anything.
//!
//! LaziComb provides two composite cursors built over a fixed-arity list of
//! component cursors (a tuple or an array):
//!
//! - **Concatenation** ([`Concat`]): visit the first sequence fully, then the
//!   second, and so on
//! - **Cartesian product** ([`CartesianProduct`]): visit every combination of one
//!   element per sequence, last sequence varying fastest
//!
//! Every composite supports the strongest operation set common to all of its
//! components: forward cursors can only advance, bidirectional cursors can also
//! retreat, and random-access cursors add offset arithmetic, distance and
//! ordering. The capability is decided by the component types at compile time,
//! so asking a list with a forward-only component to jump by an offset does not
//! compile.
//!
//! ```
//! use lazicomb::concat;
//!
//! let (begin, end) = concat((&[1, 2], &[3, 4, 5]));
//! let mut cursor = begin.clone();
//! cursor.advance();
//! cursor += 2;
//! assert_eq!(*cursor.value().unwrap(), 4);
//! assert_eq!(end.distance(&begin), 5);
//! ```
//!
//! ```compile_fail
//! use lazicomb::{Concat, ForwardOnly, SliceCursor};
//!
//! let data = [1, 2];
//! let begin = (ForwardOnly(SliceCursor::new(&data)), SliceCursor::new(&data));
//! let end = (ForwardOnly(SliceCursor::end(&data)), SliceCursor::end(&data));
//! let mut cursor = Concat::begin(begin, end);
//! cursor.advance_by(1); // forward-only component: no offset arithmetic
//! ```

pub mod bounds;
pub mod capability;
pub mod cartesian;
pub mod concat;
pub mod cursor;
pub mod cursors;
pub mod dispatch;
pub mod error;
pub mod list;

pub use bounds::{IntoCursors, ListBounds, cartesian, cartesian_range, concat, concat_range};
pub use capability::Capability;
pub use cartesian::CartesianProduct;
pub use concat::Concat;
pub use cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
pub use cursors::{BidirectionalOnly, CharCursor, ForwardOnly, SliceCursor};
pub use error::LazicombError;
pub use list::{BidirectionalList, ConcatList, CursorList, ProductList, RandomAccessList};
