//! Fixed-size vectors and matrices on top of a small cursor algebra.
//!
//! # Overview
//!
//! All sizes are const generic parameters, so every container lives inline and length mismatches
//! are type errors:
//!
//! - [`Vector`] is an `N`-element vector with positional access, a [`dot`] product and tuple
//!   conversions.
//! - [`Matrix`] is a row-major matrix made of [`Row`]s.
//! - The [`literal`] module builds vectors from operands of mixed numeric types
//!   (`vec | 1 | 2.5 | end`).
//!
//! Underneath, the containers are walked with *cursors* (see the [`cursor`] module): positions that
//! can be dereferenced, moved by arbitrary offsets and compared. A sequence is a pair of begin/end
//! cursors, and the [`iter`] and [`range`] modules provide algorithms over such pairs. Most
//! notably, [`iter::zip`] and [`range::zip`] walk two sequences in lockstep, and stop at the end of
//! the shorter one.
//!
//! ```
//! # use algae::*;
//! # use algae::range;
//! let m = Matrix::new([[1, 2], [3, 4]]);
//! let v = vec2(10, 20);
//! let products: Vec<i32> = (&m).walk().map(|row| dot(&Vector::new(*row.as_array()), &v)).collect();
//! assert_eq!(products, [50, 110]);
//!
//! let pairs = range::accumulate(range::zip(&v, &[1, 2, 3]), 0, |n, _| n + 1);
//! assert_eq!(pairs, 2);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics keeps the API
//!   simple and allocation-free.
//! - Don't provide an arithmetic operator suite. The dot product is the only reduction, and it sums
//!   strictly from the first to the last element, so floating-point results are reproducible.
//! - Out-of-bounds access is a bug in the caller, and panics.

pub mod cursor;
pub mod iter;
pub mod literal;
mod matrix;
pub mod range;
mod row;
mod traits;
mod vector;

pub use cursor::{
    BidirectionalCursor, Cursor, ElemIter, ElemIterMut, IntoCursors, Ptr, RandomAccessCursor, Rev,
    RowIter, RowIterMut, Walk,
};
pub use matrix::*;
pub use row::*;
pub use traits::*;
pub use vector::*;
