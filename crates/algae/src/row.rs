use std::{
    cell::Cell,
    fmt,
    ops::{Index, IndexMut},
};

use crate::cursor::{ElemIter, ElemIterMut, IntoCursors, Ptr, Rev};

/// One row of a [`Matrix`][crate::Matrix]: `W` elements stored contiguously.
///
/// Rows are what [`RowIter`][crate::RowIter]s point at. Their elements are walked with
/// [`ElemIter`]s.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// let row = Row::new([1, 2, 3]);
/// assert_eq!(row[1], 2);
/// assert_eq!(*row.rbegin(), 3);
/// assert_eq!(row.end() - row.begin(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Row<T, const W: usize>([T; W]);

unsafe impl<T: bytemuck::Zeroable, const W: usize> bytemuck::Zeroable for Row<T, W> {}
unsafe impl<T: bytemuck::Pod, const W: usize> bytemuck::Pod for Row<T, W> {}

impl<T, const W: usize> Row<T, W> {
    /// Creates a row from its elements.
    #[inline]
    pub const fn new(elems: [T; W]) -> Self {
        Self(elems)
    }

    /// Returns the elements as an array.
    #[inline]
    pub fn as_array(&self) -> &[T; W] {
        &self.0
    }

    /// Returns the elements as a mutable array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; W] {
        &mut self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; W] {
        self.0
    }

    /// Returns a cursor to the first element.
    #[inline]
    pub fn begin(&self) -> ElemIter<'_, T> {
        self.into_cursors().0
    }

    /// Returns a cursor just past the last element.
    #[inline]
    pub fn end(&self) -> ElemIter<'_, T> {
        self.into_cursors().1
    }

    /// Returns a reverse cursor to the last element.
    #[inline]
    pub fn rbegin(&self) -> Rev<ElemIter<'_, T>> {
        self.into_rev_cursors().0
    }

    /// Returns a reverse cursor just before the first element.
    #[inline]
    pub fn rend(&self) -> Rev<ElemIter<'_, T>> {
        self.into_rev_cursors().1
    }

    /// Returns exclusive begin and end cursors.
    #[inline]
    pub fn cursors_mut(&mut self) -> (ElemIterMut<'_, T>, ElemIterMut<'_, T>) {
        self.into_cursors()
    }

    /// Returns exclusive reverse begin and end cursors.
    #[inline]
    pub fn rev_cursors_mut(&mut self) -> (Rev<ElemIterMut<'_, T>>, Rev<ElemIterMut<'_, T>>) {
        self.into_rev_cursors()
    }

    /// Projects a row behind a [`Cell`] to its elements.
    ///
    /// This is how the elements of a row reached through a
    /// [`RowIterMut`][crate::RowIterMut] are accessed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// # use std::cell::Cell;
    /// let mut row = Row::new([1, 2]);
    /// let cell = Cell::from_mut(&mut row);
    /// Row::as_cells(cell)[0].set(5);
    /// assert_eq!(row, Row::new([5, 2]));
    /// ```
    pub fn as_cells(this: &Cell<Self>) -> &[Cell<T>] {
        // SAFETY: `Row` is `repr(transparent)` over `[T; W]`, and `Cell` is
        // `repr(transparent)` over its contents.
        let cells = unsafe { &*(this as *const Cell<Self> as *const Cell<[T; W]>) };
        let cells: &Cell<[T]> = cells;
        cells.as_slice_of_cells()
    }
}

impl<T: Default, const W: usize> Default for Row<T, W> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const W: usize> From<[T; W]> for Row<T, W> {
    #[inline]
    fn from(elems: [T; W]) -> Self {
        Self(elems)
    }
}

impl<T, const W: usize> From<Row<T, W>> for [T; W] {
    #[inline]
    fn from(row: Row<T, W>) -> Self {
        row.0
    }
}

impl<T, const W: usize> Index<usize> for Row<T, W> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const W: usize> IndexMut<usize> for Row<T, W> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

// Written by hand so that `{:#?}` on a matrix puts each row on its own line.
impl<T: fmt::Debug, const W: usize> fmt::Debug for Row<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Debug::fmt(elem, f)?;
        }
        f.write_str("]")
    }
}

impl<'a, T, const W: usize> IntoCursors for &'a Row<T, W> {
    type Cursor = ElemIter<'a, T>;
    type RevCursor = Rev<ElemIter<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        Ptr::bounds(&self.0)
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        Ptr::rev_bounds(&self.0)
    }
}

impl<'a, T, const W: usize> IntoCursors for &'a mut Row<T, W> {
    type Cursor = ElemIterMut<'a, T>;
    type RevCursor = Rev<ElemIterMut<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        Row::as_cells(Cell::from_mut(self)).into_cursors()
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        Row::as_cells(Cell::from_mut(self)).into_rev_cursors()
    }
}

/// A row reached through a [`RowIterMut`][crate::RowIterMut] can be walked exclusively.
impl<'a, T, const W: usize> IntoCursors for &'a Cell<Row<T, W>> {
    type Cursor = ElemIterMut<'a, T>;
    type RevCursor = Rev<ElemIterMut<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        Row::as_cells(self).into_cursors()
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        Row::as_cells(self).into_rev_cursors()
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::Cursor;

    use super::*;

    #[test]
    fn cursors() {
        let row = Row::new([1, 2, 3]);
        assert_eq!(*row.begin(), 1);
        assert_eq!(row.begin()[2], 3);
        assert_eq!(*row.rbegin(), 3);
        assert_eq!(row.rbegin()[2], 1);
        assert_eq!(row.end() - row.begin(), 3);
        assert_eq!(row.rend() - row.rbegin(), 3);
        assert_eq!(row.rbegin().into_base(), row.end());
        assert_eq!(row.rend().into_base(), row.begin());
    }

    #[test]
    fn mutate_through_cursors() {
        let mut row = Row::new([1, 2, 3]);
        let (mut it, end) = row.cursors_mut();
        while it != end {
            let cell = it.post_inc().get();
            cell.set(cell.get() * 2);
        }
        assert_eq!(row.into_array(), [2, 4, 6]);

        let mut row = Row::new([0; 3]);
        let (rbegin, rend) = row.rev_cursors_mut();
        let mut n = 0;
        for cell in crate::cursor::Walk::new(rbegin, rend) {
            n += 1;
            cell.set(n);
        }
        assert_eq!(row, Row::new([3, 2, 1]));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Row::new([1, 2])), "[1, 2]");
        assert_eq!(format!("{:?}", Row::new([0.5f32])), "[0.5]");
        assert_eq!(format!("{:?}", Row::<i32, 0>::default()), "[]");
    }

    #[test]
    fn pod() {
        let row = Row::new([1u16, 2]);
        let bytes: &[u8] = bytemuck::bytes_of(&row);
        assert_eq!(bytes.len(), 4);
        let back: Row<u16, 2> = bytemuck::pod_read_unaligned(bytes);
        assert_eq!(back, row);
    }
}
