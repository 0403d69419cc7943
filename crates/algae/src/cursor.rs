//! Cursors: positions in a sequence that can be dereferenced, moved and compared.
//!
//! A cursor is the building block of the [`iter`][crate::iter] and [`range`][crate::range]
//! algebra. Sequences are described by a pair of cursors, one at the first element (*begin*) and
//! one just past the last element (*end*); an algorithm walks from begin until the cursor compares
//! equal to end.
//!
//! # Access flavours
//!
//! [`Ptr`] is the random-access cursor over contiguous storage used by every container in this
//! crate. It is generic over its *slot* type, which selects how elements are exposed:
//!
//! - `Ptr<'a, T>` is the **shared** flavour. It dereferences to `&'a T` and is created from a
//!   shared borrow of the container ([`ElemIter`], [`RowIter`]).
//! - `Ptr<'a, Cell<T>>` is the **exclusive** flavour. It is created from a mutable borrow of the
//!   container, which is reinterpreted as a slice of [`Cell`]s, and dereferences to
//!   `&'a Cell<T>` ([`ElemIterMut`], [`RowIterMut`]). This lets a begin/end pair (or both sides of
//!   a [`Zip`][crate::iter::Zip]) coexist while still allowing mutation.
//!
//! There is no conversion from a live exclusive cursor to a shared one: the resulting `&T` could
//! be mutated through another copy of the exclusive cursor. Reborrow the container instead, and use
//! [`Ptr::offset`] to get back to the same position.
//!
//! # Examples
//!
//! ```
//! # use algae::*;
//! let row = Row::new([1, 2, 3]);
//! let mut it = row.begin();
//! assert_eq!(*it, 1);
//! it += 2;
//! assert_eq!(*it, 3);
//! assert_eq!(row.end() - it, 1);
//! assert_eq!(it[-1], 2);
//! ```

use std::{
    cell::Cell,
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Deref, Index, Sub, SubAssign},
};

use crate::Row;

/// A position in a sequence.
///
/// Dereferencing a cursor yields [`Cursor::Ref`], which is a reference for all cursors in this
/// crate (or a tuple of references for [`Zip`][crate::iter::Zip]).
pub trait Cursor: Clone {
    /// What dereferencing the cursor yields.
    type Ref;

    /// Dereferences the cursor, returning the element it points at.
    ///
    /// # Panics
    ///
    /// Cursors into storage will panic when dereferenced outside of that storage.
    fn get(&self) -> Self::Ref;

    /// Moves the cursor one position forward.
    fn step(&mut self);

    /// Moves the cursor one position forward and returns it (prefix increment).
    #[inline]
    fn inc(&mut self) -> &mut Self {
        self.step();
        self
    }

    /// Moves the cursor one position forward and returns a copy of the cursor from before the move
    /// (postfix increment).
    #[inline]
    fn post_inc(&mut self) -> Self {
        let prev = self.clone();
        self.step();
        prev
    }
}

/// A [`Cursor`] that can also move backwards.
pub trait BidirectionalCursor: Cursor {
    /// Moves the cursor one position backward.
    fn step_back(&mut self);

    /// Moves the cursor one position backward and returns it (prefix decrement).
    #[inline]
    fn dec(&mut self) -> &mut Self {
        self.step_back();
        self
    }

    /// Moves the cursor one position backward and returns a copy of the cursor from before the move
    /// (postfix decrement).
    #[inline]
    fn post_dec(&mut self) -> Self {
        let prev = self.clone();
        self.step_back();
        prev
    }
}

/// A [`Cursor`] that can move by arbitrary offsets in constant time.
///
/// Positions within the same sequence are totally ordered via [`PartialOrd`].
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Moves the cursor by `n` positions (backwards if `n` is negative).
    fn jump(&mut self, n: isize);

    /// Returns the signed number of positions from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;

    /// Dereferences the position `n` steps away from `self`, without moving `self`.
    #[inline]
    fn at(&self, n: isize) -> Self::Ref {
        let mut c = self.clone();
        c.jump(n);
        c.get()
    }
}

/// Types that describe a sequence as a pair of cursors, going forward and in reverse.
///
/// This is the capability the [`range`][crate::range] functions require. It is implemented for
/// borrowed containers, like `&Vector` and `&mut Vector`, and for slices and arrays, so that all of
/// them can be mixed freely. Implementing it for a third-party container is enough to make it work
/// with [`range::zip`][crate::range::zip] and friends.
pub trait IntoCursors: Sized {
    /// The forward cursor type.
    type Cursor: Cursor;
    /// The reverse cursor type.
    type RevCursor: Cursor;

    /// Returns the begin and end cursors of the sequence.
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor);

    /// Returns the begin and end cursors of the reversed sequence.
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor);

    /// Returns an [`Iterator`] over the elements of the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let v = vec3(1, 2, 3);
    /// let doubled: Vec<i32> = (&v).walk().map(|x| x * 2).collect();
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    fn walk(self) -> Walk<Self::Cursor>
    where
        Self::Cursor: PartialEq,
    {
        let (begin, end) = self.into_cursors();
        Walk::new(begin, end)
    }

    /// Returns an [`Iterator`] over the elements of the sequence, back to front.
    fn walk_rev(self) -> Walk<Self::RevCursor>
    where
        Self::RevCursor: PartialEq,
    {
        let (begin, end) = self.into_rev_cursors();
        Walk::new(begin, end)
    }
}

/// An [`Iterator`] walking from a begin cursor to an end cursor.
///
/// Created by [`IntoCursors::walk`] or [`Walk::new`].
#[derive(Clone, Debug)]
pub struct Walk<C> {
    cur: C,
    end: C,
}

impl<C: Cursor + PartialEq> Walk<C> {
    /// Creates an iterator yielding every element from `begin` up to (excluding) `end`.
    pub fn new(begin: C, end: C) -> Self {
        Self { cur: begin, end }
    }
}

impl<C: Cursor + PartialEq> Iterator for Walk<C> {
    type Item = C::Ref;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == self.end {
            None
        } else {
            Some(self.cur.post_inc().get())
        }
    }
}

/// Random-access cursor into contiguous storage.
///
/// `S` is the slot type: `T` for shared access to `T` elements, [`Cell<T>`] for exclusive access.
/// See the [module documentation][self] for details.
///
/// Moving a [`Ptr`] is never checked, so it may point anywhere. Only dereferencing it outside of the
/// storage it was created from panics.
pub struct Ptr<'a, S> {
    slots: &'a [S],
    pos: isize,
}

/// Shared cursor over the elements of a [`Row`] (or any other contiguous storage).
pub type ElemIter<'a, T> = Ptr<'a, T>;
/// Exclusive cursor over the elements of a [`Row`] (or any other contiguous storage).
pub type ElemIterMut<'a, T> = Ptr<'a, Cell<T>>;
/// Shared cursor over the rows of a [`Matrix`][crate::Matrix].
pub type RowIter<'a, T, const W: usize> = Ptr<'a, Row<T, W>>;
/// Exclusive cursor over the rows of a [`Matrix`][crate::Matrix].
pub type RowIterMut<'a, T, const W: usize> = Ptr<'a, Cell<Row<T, W>>>;

impl<'a, S> Ptr<'a, S> {
    /// Creates a cursor pointing at `offset` within `slots`.
    #[inline]
    pub fn new(slots: &'a [S], offset: isize) -> Self {
        Self { slots, pos: offset }
    }

    /// Returns the cursors to the first slot and just past the last slot of `slots`.
    #[inline]
    pub fn bounds(slots: &'a [S]) -> (Self, Self) {
        (Self::new(slots, 0), Self::new(slots, slots.len() as isize))
    }

    /// Returns the reverse cursors to the last slot and just before the first slot of `slots`.
    #[inline]
    pub fn rev_bounds(slots: &'a [S]) -> (Rev<Self>, Rev<Self>) {
        let (begin, end) = Self::bounds(slots);
        (Rev::new(end), Rev::new(begin))
    }

    /// Returns the offset of this cursor from the start of its storage.
    ///
    /// Exclusive cursors can't be turned into shared ones, since copies of them may still be
    /// around. Instead, the offset is carried over to a shared cursor created once the exclusive
    /// borrow has ended:
    ///
    /// ```
    /// # use algae::*;
    /// let mut data = [1, 2, 3];
    /// let (begin, _) = (&mut data).into_cursors();
    /// let it = begin + 2;
    /// it.get().set(30);
    /// let offset = it.offset();
    ///
    /// let shared = ElemIter::new(&data[..], offset);
    /// assert_eq!(*shared, 30);
    /// assert_eq!(shared[-2], 1);
    /// ```
    #[inline]
    pub fn offset(&self) -> isize {
        self.pos
    }

    fn slot(&self) -> &'a S {
        match usize::try_from(self.pos).ok().and_then(|i| self.slots.get(i)) {
            Some(slot) => slot,
            None => panic!(
                "attempt to dereference a cursor at offset {} of a sequence of length {}",
                self.pos,
                self.slots.len()
            ),
        }
    }

    fn same_storage(&self, other: &Self) -> bool {
        self.slots.as_ptr() == other.slots.as_ptr() && self.slots.len() == other.slots.len()
    }
}

impl<'a, T> Ptr<'a, Cell<T>> {
    /// Creates an exclusive cursor pointing at `offset` within `slice`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let mut data = [1, 2, 3];
    /// let it = ElemIterMut::from_mut(&mut data, 1);
    /// let other = it;
    /// it.get().set(20);
    /// let cell = other.get();
    /// cell.set(cell.get() + 1);
    /// assert_eq!(data, [1, 21, 3]);
    /// ```
    #[inline]
    pub fn from_mut(slice: &'a mut [T], offset: isize) -> Self {
        Self::new(Cell::from_mut(slice).as_slice_of_cells(), offset)
    }
}

impl<'a, S> Clone for Ptr<'a, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S> Copy for Ptr<'a, S> {}

impl<'a, S> fmt::Debug for Ptr<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ptr")
            .field("offset", &self.pos)
            .field("len", &self.slots.len())
            .finish()
    }
}

impl<'a, S> Cursor for Ptr<'a, S> {
    type Ref = &'a S;

    #[inline]
    fn get(&self) -> &'a S {
        self.slot()
    }

    #[inline]
    fn step(&mut self) {
        self.pos += 1;
    }
}

impl<'a, S> BidirectionalCursor for Ptr<'a, S> {
    #[inline]
    fn step_back(&mut self) {
        self.pos -= 1;
    }
}

impl<'a, S> RandomAccessCursor for Ptr<'a, S> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.pos += n;
    }

    fn distance_from(&self, origin: &Self) -> isize {
        if !self.same_storage(origin) {
            panic!("attempt to compute the distance between cursors into different sequences");
        }
        self.pos - origin.pos
    }
}

impl<'a, S> Deref for Ptr<'a, S> {
    type Target = S;

    #[inline]
    fn deref(&self) -> &S {
        self.slot()
    }
}

impl<'a, S> PartialEq for Ptr<'a, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same_storage(other) && self.pos == other.pos
    }
}

impl<'a, S> Eq for Ptr<'a, S> {}

/// Cursors into different storage are unordered.
impl<'a, S> PartialOrd for Ptr<'a, S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_storage(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<'a, S> AddAssign<isize> for Ptr<'a, S> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.jump(n);
    }
}

impl<'a, S> SubAssign<isize> for Ptr<'a, S> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.jump(-n);
    }
}

impl<'a, S> Add<isize> for Ptr<'a, S> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'a, S> Add<Ptr<'a, S>> for isize {
    type Output = Ptr<'a, S>;

    #[inline]
    fn add(self, ptr: Ptr<'a, S>) -> Ptr<'a, S> {
        ptr + self
    }
}

impl<'a, S> Sub<isize> for Ptr<'a, S> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Signed distance between two cursors into the same storage.
impl<'a, S> Sub for Ptr<'a, S> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance_from(&origin)
    }
}

impl<'a, S> Index<isize> for Ptr<'a, S> {
    type Output = S;

    #[inline]
    fn index(&self, n: isize) -> &S {
        self.at(n)
    }
}

/// A cursor adaptor that walks a sequence back to front.
///
/// A [`Rev`] stores a *base* cursor and dereferences to the element just before it, so the reverse
/// begin wraps the forward end, and the reverse end wraps the forward begin.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// let v = vec3(1, 2, 3);
/// let mut it = v.rbegin();
/// assert_eq!(*it, 3);
/// it += 2;
/// assert_eq!(*it, 1);
/// assert_eq!(v.rend() - it, 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rev<C> {
    base: C,
}

impl<C> Rev<C> {
    /// Wraps `base`; the result dereferences to the element before `base`.
    #[inline]
    pub fn new(base: C) -> Self {
        Self { base }
    }

    /// Returns the wrapped forward cursor.
    #[inline]
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwraps the forward cursor.
    #[inline]
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: BidirectionalCursor> Cursor for Rev<C> {
    type Ref = C::Ref;

    #[inline]
    fn get(&self) -> C::Ref {
        let mut c = self.base.clone();
        c.step_back();
        c.get()
    }

    #[inline]
    fn step(&mut self) {
        self.base.step_back();
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for Rev<C> {
    #[inline]
    fn step_back(&mut self) {
        self.base.step();
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Rev<C> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.base.jump(-n);
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> isize {
        origin.base.distance_from(&self.base)
    }
}

impl<C: PartialEq<D>, D> PartialEq<Rev<D>> for Rev<C> {
    #[inline]
    fn eq(&self, other: &Rev<D>) -> bool {
        self.base == other.base
    }
}

impl<C: Eq> Eq for Rev<C> {}

impl<C: PartialOrd> PartialOrd for Rev<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<'a, S> Deref for Rev<Ptr<'a, S>> {
    type Target = S;

    #[inline]
    fn deref(&self) -> &S {
        self.get()
    }
}

impl<'a, S> Index<isize> for Rev<Ptr<'a, S>> {
    type Output = S;

    #[inline]
    fn index(&self, n: isize) -> &S {
        self.at(n)
    }
}

impl<C: RandomAccessCursor> AddAssign<isize> for Rev<C> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.jump(n);
    }
}

impl<C: RandomAccessCursor> SubAssign<isize> for Rev<C> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.jump(-n);
    }
}

impl<C: RandomAccessCursor> Add<isize> for Rev<C> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<C: RandomAccessCursor> Add<Rev<C>> for isize {
    type Output = Rev<C>;

    #[inline]
    fn add(self, rev: Rev<C>) -> Rev<C> {
        rev + self
    }
}

impl<C: RandomAccessCursor> Sub<isize> for Rev<C> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<C: RandomAccessCursor> Sub for Rev<C> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance_from(&origin)
    }
}

impl<'a, T> IntoCursors for &'a [T] {
    type Cursor = ElemIter<'a, T>;
    type RevCursor = Rev<ElemIter<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        Ptr::bounds(self)
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        Ptr::rev_bounds(self)
    }
}

impl<'a, T> IntoCursors for &'a mut [T] {
    type Cursor = ElemIterMut<'a, T>;
    type RevCursor = Rev<ElemIterMut<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        Ptr::bounds(Cell::from_mut(self).as_slice_of_cells())
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        Ptr::rev_bounds(Cell::from_mut(self).as_slice_of_cells())
    }
}

impl<'a, T, const N: usize> IntoCursors for &'a [T; N] {
    type Cursor = ElemIter<'a, T>;
    type RevCursor = Rev<ElemIter<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        self.as_slice().into_cursors()
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        self.as_slice().into_rev_cursors()
    }
}

impl<'a, T, const N: usize> IntoCursors for &'a mut [T; N] {
    type Cursor = ElemIterMut<'a, T>;
    type RevCursor = Rev<ElemIterMut<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        self.as_mut_slice().into_cursors()
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        self.as_mut_slice().into_rev_cursors()
    }
}

/// An array reached through an exclusive cursor can itself be walked exclusively.
impl<'a, T, const N: usize> IntoCursors for &'a Cell<[T; N]> {
    type Cursor = ElemIterMut<'a, T>;
    type RevCursor = Rev<ElemIterMut<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        let cells: &'a Cell<[T]> = self;
        Ptr::bounds(cells.as_slice_of_cells())
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        let cells: &'a Cell<[T]> = self;
        Ptr::rev_bounds(cells.as_slice_of_cells())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_access_laws() {
        let data = [10, 20, 30, 40, 50];
        let (begin, end) = data.into_cursors();

        assert_eq!(end - begin, 5);
        assert_eq!(begin - end, -5);
        for n in 0..5 {
            let it = begin + n;
            assert_eq!(it - begin, n);
            assert_eq!(n + begin, it);
            assert_eq!(begin[n], *it);
            assert_eq!(it - n, begin);
        }

        assert!(begin < end);
        assert!(begin <= begin);
        assert!(end > begin);
        assert!(end >= end);
        assert_ne!(begin, end);
    }

    #[test]
    fn increment_decrement() {
        let data = [1, 2, 3];
        let mut it = Ptr::new(&data[..], 0);

        assert_eq!(*it.post_inc(), 1);
        assert_eq!(*it, 2);
        assert_eq!(**it.inc(), 3);
        assert_eq!(*it.post_dec(), 3);
        assert_eq!(**it.dec(), 1);
        assert_eq!(it.offset(), 0);
    }

    #[test]
    fn cursors_into_different_storage() {
        let a = [1, 2];
        let b = [1, 2];
        let (ab, _) = a.into_cursors();
        let (bb, _) = b.into_cursors();
        assert_ne!(ab, bb);
        assert_eq!(ab.partial_cmp(&bb), None);
    }

    #[test]
    #[should_panic(expected = "different sequences")]
    fn distance_between_storages() {
        let a = [1, 2];
        let b = [1, 2];
        let _ = Ptr::new(&a[..], 0) - Ptr::new(&b[..], 0);
    }

    #[test]
    #[should_panic(expected = "attempt to dereference a cursor at offset 3 of a sequence of length 3")]
    fn deref_end() {
        let data = [1, 2, 3];
        let (_, end) = data.into_cursors();
        let _ = end.get();
    }

    #[test]
    #[should_panic(expected = "offset -1")]
    fn deref_before_begin() {
        let data = [1, 2, 3];
        let (begin, _) = data.into_cursors();
        let _value = begin[-1];
    }

    #[test]
    fn exclusive_cursors() {
        let mut data = [1, 2, 3];
        let (mut it, end) = (&mut data).into_cursors();
        while it != end {
            let cell = it.get();
            cell.set(cell.get() * 10);
            it.step();
        }
        assert_eq!(data, [10, 20, 30]);
    }

    #[test]
    fn shared_cursor_from_exclusive_offset() {
        let mut data = [1, 2, 3, 4];
        let (_, end) = (&mut data).into_cursors();
        let it = end - 1;
        it.get().set(40);
        let offset = it.offset();

        let (begin, end) = data.into_cursors();
        let shared = ElemIter::new(&data[..], offset);
        assert_eq!(*shared, 40);
        assert_eq!(shared - begin, 3);
        assert_eq!(shared + 1, end);
    }

    #[test]
    fn reverse() {
        let data = [1, 2, 3, 4];
        let (rbegin, rend) = data.into_rev_cursors();
        let collected: Vec<i32> = Walk::new(rbegin, rend).copied().collect();
        assert_eq!(collected, [4, 3, 2, 1]);

        assert_eq!(rend - rbegin, 4);
        assert!(rbegin < rend);
        assert_eq!(rbegin[1], 3);
        assert_eq!(*(2 + rbegin), 2);
        assert_eq!(*(rbegin.into_base() - 1), 4);

        let mut it = rend;
        it -= 1;
        assert_eq!(*it, 1);
    }

    #[test]
    fn reverse_exclusive() {
        let mut data = [1, 2, 3];
        let mut next = 0;
        for cell in (&mut data).walk_rev() {
            next += 1;
            cell.set(next);
        }
        assert_eq!(data, [3, 2, 1]);
    }

    #[test]
    fn walk_nested_cells() {
        let mut rows = [[1, 2], [3, 4]];
        for row in (&mut rows).walk() {
            for elem in row.walk() {
                elem.set(elem.get() + 100);
            }
        }
        assert_eq!(rows, [[101, 102], [103, 104]]);
    }
}
