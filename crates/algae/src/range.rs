//! Sequence-level algorithms.
//!
//! Everything that implements [`IntoCursors`] is a range: borrowed [`Vector`]s, [`Row`]s and
//! [`Matrix`]es (walking their rows), arrays and slices, and [`ZipRange`]s of any of those. Shared
//! and exclusive borrows can be mixed, which is how values are copied between containers:
//!
//! ```
//! # use algae::*;
//! # use algae::range;
//! let src = vec3(1, 2, 3);
//! let mut dst = Vector::<i32, 3>::default();
//! for (s, d) in range::zip(&src, &mut dst).walk() {
//!     d.set(*s);
//! }
//! assert_eq!(dst, src);
//! ```
//!
//! [`Vector`]: crate::Vector
//! [`Row`]: crate::Row
//! [`Matrix`]: crate::Matrix

use crate::{
    cursor::{Cursor, IntoCursors},
    iter::{self, Zip},
};

/// Two ranges walked in lockstep.
///
/// Created by [`zip`]. Its cursors are [`Zip`] cursors, so walking it stops at the end of the
/// shorter range.
///
/// The reverse cursors zip the reverse cursors of both ranges, so they start at the *last* element
/// of each range. For ranges of different lengths, that pairs up different elements than the
/// forward direction does.
#[derive(Clone, Copy, Debug)]
pub struct ZipRange<R1, R2> {
    r1: R1,
    r2: R2,
}

/// Zips two ranges together.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// # use algae::range;
/// let a = vec2(1, 2);
/// let b = [10, 20, 30];
/// let sums: Vec<i32> = range::zip(&a, &b).walk().map(|(x, y)| x + y).collect();
/// assert_eq!(sums, [11, 22]);
///
/// let rsums: Vec<i32> = range::zip(&a, &b).walk_rev().map(|(x, y)| x + y).collect();
/// assert_eq!(rsums, [32, 21]);
/// ```
#[inline]
pub fn zip<R1: IntoCursors, R2: IntoCursors>(r1: R1, r2: R2) -> ZipRange<R1, R2> {
    ZipRange { r1, r2 }
}

impl<R1: IntoCursors, R2: IntoCursors> IntoCursors for ZipRange<R1, R2> {
    type Cursor = Zip<R1::Cursor, R2::Cursor>;
    type RevCursor = Zip<R1::RevCursor, R2::RevCursor>;

    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        let (begin1, end1) = self.r1.into_cursors();
        let (begin2, end2) = self.r2.into_cursors();
        (iter::zip(begin1, begin2), iter::zip(end1, end2))
    }

    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        let (rbegin1, rend1) = self.r1.into_rev_cursors();
        let (rbegin2, rend2) = self.r2.into_rev_cursors();
        (iter::zip(rbegin1, rbegin2), iter::zip(rend1, rend2))
    }
}

/// Cursor accessors for zipped shared ranges.
impl<R1, R2> ZipRange<R1, R2>
where
    R1: IntoCursors + Copy,
    R2: IntoCursors + Copy,
{
    /// Returns the zipped begin cursor.
    pub fn begin(&self) -> Zip<R1::Cursor, R2::Cursor> {
        self.into_cursors().0
    }

    /// Returns the zipped end cursor.
    pub fn end(&self) -> Zip<R1::Cursor, R2::Cursor> {
        self.into_cursors().1
    }

    /// Returns the zipped reverse begin cursor.
    pub fn rbegin(&self) -> Zip<R1::RevCursor, R2::RevCursor> {
        self.into_rev_cursors().0
    }

    /// Returns the zipped reverse end cursor.
    pub fn rend(&self) -> Zip<R1::RevCursor, R2::RevCursor> {
        self.into_rev_cursors().1
    }
}

/// Folds all elements of `range` into `init`, front to back.
///
/// See [`iter::accumulate`].
///
/// # Examples
///
/// ```
/// # use algae::*;
/// # use algae::range;
/// let m = Matrix::new([[1, 2], [3, 4]]);
/// let total = range::accumulate(&m, 0, |acc, row| {
///     range::accumulate(row, acc, |acc, x| acc + x)
/// });
/// assert_eq!(total, 10);
/// ```
pub fn accumulate<R, T, F>(range: R, init: T, op: F) -> T
where
    R: IntoCursors,
    R::Cursor: PartialEq,
    F: FnMut(T, <R::Cursor as Cursor>::Ref) -> T,
{
    let (first, last) = range.into_cursors();
    iter::accumulate(first, last, init, op)
}

/// Returns whether both ranges have the same length and pairwise equal elements.
///
/// See [`iter::equal`].
pub fn equal<L, R>(lhs: L, rhs: R) -> bool
where
    L: IntoCursors,
    R: IntoCursors,
    L::Cursor: PartialEq,
    R::Cursor: PartialEq,
    <L::Cursor as Cursor>::Ref: PartialEq<<R::Cursor as Cursor>::Ref>,
{
    let (lhs_first, lhs_last) = lhs.into_cursors();
    let (rhs_first, rhs_last) = rhs.into_cursors();
    iter::equal(lhs_first, lhs_last, rhs_first, rhs_last)
}

/// Returns whether every pair of elements differs, up to the end of the shorter range.
///
/// See [`iter::not_equal`] for why this is not the negation of [`equal`].
pub fn not_equal<L, R>(lhs: L, rhs: R) -> bool
where
    L: IntoCursors,
    R: IntoCursors,
    L::Cursor: PartialEq,
    R::Cursor: PartialEq,
    <L::Cursor as Cursor>::Ref: PartialEq<<R::Cursor as Cursor>::Ref>,
{
    let (lhs_first, lhs_last) = lhs.into_cursors();
    let (rhs_first, rhs_last) = rhs.into_cursors();
    iter::not_equal(lhs_first, lhs_last, rhs_first, rhs_last)
}

#[cfg(test)]
mod tests {
    use crate::{cursor::RandomAccessCursor, vec2, vec3, Vector};

    use super::*;

    #[test]
    fn accumulate_zip_of_different_lengths() {
        let a = [1, 2];
        let b = [1, 2, 3];
        assert_eq!(accumulate(zip(&a, &b), 0, |n, _| n + 1), 2);
        assert_eq!(accumulate(zip(&b, &a), 0, |n, _| n + 1), 2);
        assert_eq!(accumulate(zip(&b, &b), 0, |n, _| n + 1), 3);
    }

    #[test]
    fn shared_accessors() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        let zipped = zip(&a, &b);

        assert_eq!(zipped.begin().get(), (&1, &4));
        assert_eq!(zipped.rbegin().get(), (&3, &6));
        assert_eq!(zipped.end().first().distance_from(&a.begin()), 3);
        assert_eq!(zipped.rend().second().distance_from(&b.rbegin()), 3);

        let dot = iter::accumulate(zipped.begin(), zipped.end(), 0, |acc, (x, y)| acc + x * y);
        assert_eq!(dot, 32);
    }

    #[test]
    fn reverse_zip_aligns_ends() {
        let a = [1, 2];
        let b = [10, 20, 30];
        let pairs: Vec<(i32, i32)> = zip(&a, &b).walk_rev().map(|(x, y)| (*x, *y)).collect();
        assert_eq!(pairs, [(2, 30), (1, 20)]);
    }

    #[test]
    fn nested_zip() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let c = [7, 8];
        let sums: Vec<i32> = zip(zip(&a, &b), &c)
            .walk()
            .map(|((x, y), z)| x + y + z)
            .collect();
        assert_eq!(sums, [12, 15]);
    }

    #[test]
    fn copy_between_containers() {
        let src = [7, 8, 9];
        let mut dst = Vector::<i32, 3>::default();
        accumulate(zip(&src, &mut dst), (), |(), (s, d)| d.set(*s));
        assert_eq!(dst, vec3(7, 8, 9));

        // Swap in place through two exclusive ranges.
        let mut other = vec3(1, 2, 3);
        for (x, y) in zip(&mut dst, &mut other).walk() {
            x.swap(y);
        }
        assert_eq!(dst, vec3(1, 2, 3));
        assert_eq!(other, vec3(7, 8, 9));
    }

    #[test]
    fn equal_and_not_equal() {
        assert!(equal(&vec2(1, 2), &[1, 2]));
        assert!(!equal(&vec2(1, 2), &[1, 2, 3]));
        assert!(!equal(&vec2(1, 2), &vec2(1, 3)));
        assert!(equal(&[0u8; 0], &[0u8; 0]));

        assert!(not_equal(&vec2(1, 2), &vec2(2, 1)));
        assert!(!not_equal(&vec2(1, 2), &vec2(1, 3)));
        assert!(not_equal(&vec2(1, 2), &[2, 3, 1]));
        assert!(not_equal(&[0u8; 0], &[1u8]));
    }
}
