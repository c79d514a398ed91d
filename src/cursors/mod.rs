pub mod chars;
pub mod restrict;
pub mod slice;

pub use chars::CharCursor;
pub use restrict::{BidirectionalOnly, ForwardOnly};
pub use slice::SliceCursor;
