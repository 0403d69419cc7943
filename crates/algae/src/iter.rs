//! Cursor-pair algorithms and the zip cursor.
//!
//! The functions in this module operate on explicit `first`/`last` cursor pairs. The
//! [`range`][crate::range] module has the same functions taking whole sequences.

use crate::cursor::{BidirectionalCursor, Cursor};

/// A cursor advancing two cursors in lockstep.
///
/// Dereferencing yields a tuple with the elements both cursors point at.
///
/// Two zip cursors compare equal as soon as *either* side compares equal. Walking from a zipped
/// begin to a zipped end therefore stops when the shorter of the two sequences is exhausted.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// # use algae::iter;
/// let a = [1, 2];
/// let b = [10, 20, 30];
/// let (a0, a1) = a.into_cursors();
/// let (b0, b1) = b.into_cursors();
/// let steps = iter::accumulate(iter::zip(a0, b0), iter::zip(a1, b1), 0, |n, _| n + 1);
/// assert_eq!(steps, 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Combines two cursors into a [`Zip`] cursor.
#[inline]
pub fn zip<A: Cursor, B: Cursor>(a: A, b: B) -> Zip<A, B> {
    Zip { a, b }
}

impl<A, B> Zip<A, B> {
    /// Returns the first of the zipped cursors.
    #[inline]
    pub fn first(&self) -> &A {
        &self.a
    }

    /// Returns the second of the zipped cursors.
    #[inline]
    pub fn second(&self) -> &B {
        &self.b
    }

    /// Splits the zip cursor into its parts.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Ref = (A::Ref, B::Ref);

    #[inline]
    fn get(&self) -> Self::Ref {
        (self.a.get(), self.b.get())
    }

    #[inline]
    fn step(&mut self) {
        self.a.step();
        self.b.step();
    }
}

impl<A: BidirectionalCursor, B: BidirectionalCursor> BidirectionalCursor for Zip<A, B> {
    #[inline]
    fn step_back(&mut self) {
        self.a.step_back();
        self.b.step_back();
    }
}

impl<A, B, A2, B2> PartialEq<Zip<A2, B2>> for Zip<A, B>
where
    A: PartialEq<A2>,
    B: PartialEq<B2>,
{
    #[inline]
    fn eq(&self, other: &Zip<A2, B2>) -> bool {
        self.a == other.a || self.b == other.b
    }
}

/// Folds the elements from `first` up to (excluding) `last` into `init`, front to back.
///
/// `op` is called with the running value and each dereferenced element in order, and the result
/// replaces the running value.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// # use algae::iter;
/// let v = vec4(1, 2, 3, 4);
/// assert_eq!(iter::accumulate(v.begin(), v.end(), 0, |acc, x| acc + x), 10);
/// assert_eq!(iter::accumulate(v.begin(), v.begin(), 7, |acc, x| acc + x), 7);
/// ```
pub fn accumulate<I, E, T, F>(mut first: I, last: E, mut init: T, mut op: F) -> T
where
    I: Cursor + PartialEq<E>,
    F: FnMut(T, I::Ref) -> T,
{
    while first != last {
        init = op(init, first.get());
        first.step();
    }
    init
}

/// Returns whether both sequences have the same length and pairwise equal elements.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// # use algae::iter;
/// let a = [1, 2, 3];
/// let b = [1, 2, 3, 4];
/// let (a0, a1) = a.into_cursors();
/// let (b0, b1) = b.into_cursors();
/// assert!(iter::equal(a0, a1, b0, b1 - 1));
/// assert!(!iter::equal(a0, a1, b0, b1));
/// ```
pub fn equal<L, LE, R, RE>(mut lhs: L, lhs_last: LE, mut rhs: R, rhs_last: RE) -> bool
where
    L: Cursor + PartialEq<LE>,
    R: Cursor + PartialEq<RE>,
    L::Ref: PartialEq<R::Ref>,
{
    while lhs != lhs_last && rhs != rhs_last {
        if lhs.get() != rhs.get() {
            return false;
        }
        lhs.step();
        rhs.step();
    }
    lhs == lhs_last && rhs == rhs_last
}

/// Returns whether every pair of elements differs, up to the end of the shorter sequence.
///
/// This is *not* the negation of [`equal`]: it returns `false` as soon as one pair compares equal,
/// and `true` if the shorter sequence runs out first. Sequences of different lengths are not
/// considered different just for that reason.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// # use algae::iter;
/// let a = [1, 2];
/// let b = [3, 4, 2];
/// let c = [3, 2];
/// let (a0, a1) = a.into_cursors();
/// let (b0, b1) = b.into_cursors();
/// let (c0, c1) = c.into_cursors();
/// assert!(iter::not_equal(a0, a1, b0, b1));
/// assert!(!iter::not_equal(a0, a1, c0, c1));
/// assert!(!iter::equal(a0, a1, b0, b1));
/// ```
pub fn not_equal<L, LE, R, RE>(mut lhs: L, lhs_last: LE, mut rhs: R, rhs_last: RE) -> bool
where
    L: Cursor + PartialEq<LE>,
    R: Cursor + PartialEq<RE>,
    L::Ref: PartialEq<R::Ref>,
{
    while lhs != lhs_last && rhs != rhs_last {
        if lhs.get() == rhs.get() {
            return false;
        }
        lhs.step();
        rhs.step();
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::cursor::{IntoCursors, RandomAccessCursor, Walk};

    use super::*;

    #[test]
    fn zip_equality_is_any_side() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let (a0, a1) = a.into_cursors();
        let (b0, b1) = b.into_cursors();

        assert_eq!(zip(a0, b0), zip(a0, b1));
        assert_eq!(zip(a1, b0), zip(a0, b0));
        assert_ne!(zip(a0, b0), zip(a1, b1));
        assert_ne!(zip(a0 + 1, b0), zip(a0, b0 + 1));
    }

    #[test]
    fn zip_deref_and_step() {
        let a = [1, 2, 3];
        let b = ['a', 'b', 'c'];
        let (a0, _) = a.into_cursors();
        let (b0, _) = b.into_cursors();

        let mut it = zip(a0, b0);
        assert_eq!(it.get(), (&1, &'a'));
        assert_eq!(it.inc().get(), (&2, &'b'));
        assert_eq!(it.post_inc().get(), (&2, &'b'));
        assert_eq!(it.get(), (&3, &'c'));
        it.step_back();
        assert_eq!(it.get(), (&2, &'b'));
        assert_eq!(it.first().distance_from(&a0), 1);
        assert_eq!(it.second().distance_from(&b0), 1);

        let (a, b) = it.into_parts();
        assert_eq!((*a, *b), (2, 'b'));
    }

    #[test]
    fn zip_stops_at_shorter() {
        let short = [1, 2];
        let long = [10, 20, 30];
        let (s0, s1) = short.into_cursors();
        let (l0, l1) = long.into_cursors();

        let pairs: Vec<(i32, i32)> = Walk::new(zip(s0, l0), zip(s1, l1))
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(pairs, [(1, 10), (2, 20)]);

        let pairs: Vec<(i32, i32)> = Walk::new(zip(l0, s0), zip(l1, s1))
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(pairs, [(10, 1), (20, 2)]);
    }

    #[test]
    fn zip_with_exclusive_side() {
        let src = [1, 2, 3];
        let mut dst = [0; 3];
        let (s0, s1) = src.into_cursors();
        let (d0, d1) = (&mut dst).into_cursors();
        accumulate(zip(s0, d0), zip(s1, d1), (), |(), (s, d)| d.set(*s * 2));
        assert_eq!(dst, [2, 4, 6]);
    }

    #[test]
    fn accumulate_order() {
        let words = ["a", "b", "c"];
        let (first, last) = words.into_cursors();
        let joined = accumulate(first, last, String::new(), |mut acc, w| {
            acc.push_str(w);
            acc
        });
        assert_eq!(joined, "abc");

        let (rfirst, rlast) = words.into_rev_cursors();
        let joined = accumulate(rfirst, rlast, String::new(), |acc, w| acc + *w);
        assert_eq!(joined, "cba");
    }

    #[test]
    fn equal_lengths_matter() {
        let a = [1, 2, 3];
        let b = [1, 2];
        let (a0, a1) = a.into_cursors();
        let (b0, b1) = b.into_cursors();

        assert!(equal(a0, a1, a0, a1));
        assert!(!equal(a0, a1, b0, b1));
        assert!(!equal(b0, b1, a0, a1));
        assert!(equal(a0, a1 - 1, b0, b1));
        assert!(equal(a0, a0, b0, b0));
    }

    #[test]
    fn first_mismatch() {
        let a = [1u8, 2];
        let b = [1u8, 3];
        let (a0, a1) = a.into_cursors();
        let (b0, b1) = b.into_cursors();
        assert!(!equal(a0, a1, b0, b1));
        assert!(!not_equal(a0, a1, b0, b1));
    }

    #[test]
    fn not_equal_is_pairwise() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let c = [4, 2, 6];
        let (a0, a1) = a.into_cursors();
        let (b0, b1) = b.into_cursors();
        let (c0, c1) = c.into_cursors();

        assert!(not_equal(a0, a1, b0, b1));
        assert!(!not_equal(a0, a1, c0, c1));
        assert!(!not_equal(a0, a1, a0, a1));

        // Empty and length-mismatched sequences only compare the common prefix.
        assert!(not_equal(a0, a0, b0, b1));
        assert!(not_equal(a0, a1, b0, b0 + 1));
        assert!(!equal(a0, a1, b0, b0 + 1));
    }
}
