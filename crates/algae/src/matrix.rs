use std::{
    array,
    cell::Cell,
    fmt,
    ops::{Index, IndexMut},
};

use crate::{
    cursor::{IntoCursors, Ptr, Rev, RowIter, RowIterMut},
    range, Row,
};

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;

/// A row-major matrix with `H` rows of `W` elements of type `T`.
///
/// # Construction
///
/// - [`Matrix::new`] (and the equivalent [`From`] impl) moves the elements of a nested array, given
///   row by row, into the matrix.
/// - The [`Default`] implementation initializes each element with its default value.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*. Indices are 0-based.
///
/// ```
/// # use algae::*;
/// let mut mat = Matrix::new([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// Rows are walked with [`RowIter`]s ([`Matrix::begin`], [`Matrix::end`], [`Matrix::rbegin`],
/// [`Matrix::rend`]), and each [`Row`] hands out element cursors. `&Matrix` and `&mut Matrix`
/// implement [`IntoCursors`], walking rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const H: usize, const W: usize>([Row<T, W>; H]);

unsafe impl<T: bytemuck::Zeroable, const H: usize, const W: usize> bytemuck::Zeroable
    for Matrix<T, H, W>
{
}
unsafe impl<T: bytemuck::Pod, const H: usize, const W: usize> bytemuck::Pod for Matrix<T, H, W> {}

impl<T: Default, const H: usize, const W: usize> Matrix<T, H, W> {
    /// Creates a matrix from its rows, given top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let mat = Matrix::new([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat[(1, 0)], 3);
    /// assert_eq!(*mat.begin()[1].begin(), 3);
    /// ```
    pub fn new(mut rows: [[T; W]; H]) -> Self {
        log::trace!("building a {}x{} matrix", H, W);

        let mut this = Self::default();
        for (src, dst) in range::zip(&mut rows, &mut this).walk() {
            for (s, d) in range::zip(src, dst).walk() {
                d.swap(s);
            }
        }
        this
    }
}

impl<T, const H: usize, const W: usize> Matrix<T, H, W> {
    /// The number of rows.
    pub const HEIGHT: usize = H;
    /// The number of elements in each row.
    pub const WIDTH: usize = W;

    /// Returns a reference to the element at `row` and `col`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let mat = Matrix::new([[1, 2]]);
    /// assert_eq!(mat.get(0, 1), Some(&2));
    /// assert_eq!(mat.get(1, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row)?.as_slice().get(col)
    }

    /// Returns a mutable reference to the element at `row` and `col`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row)?.as_mut_slice().get_mut(col)
    }

    /// Returns a reference to the rows of the matrix.
    #[inline]
    pub fn rows(&self) -> &[Row<T, W>; H] {
        &self.0
    }

    /// Returns a mutable reference to the rows of the matrix.
    #[inline]
    pub fn rows_mut(&mut self) -> &mut [Row<T, W>; H] {
        &mut self.0
    }

    /// Returns a cursor to the first row.
    #[inline]
    pub fn begin(&self) -> RowIter<'_, T, W> {
        self.into_cursors().0
    }

    /// Returns a cursor just past the last row.
    #[inline]
    pub fn end(&self) -> RowIter<'_, T, W> {
        self.into_cursors().1
    }

    /// Returns a reverse cursor to the last row.
    #[inline]
    pub fn rbegin(&self) -> Rev<RowIter<'_, T, W>> {
        self.into_rev_cursors().0
    }

    /// Returns a reverse cursor just before the first row.
    #[inline]
    pub fn rend(&self) -> Rev<RowIter<'_, T, W>> {
        self.into_rev_cursors().1
    }

    /// Returns exclusive cursors to the first row and just past the last row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let mut mat = Matrix::new([[1, 2], [3, 4]]);
    /// let (first, _) = mat.cursors_mut();
    /// for elem in (first + 1).get().walk() {
    ///     elem.set(0);
    /// }
    /// assert_eq!(mat, Matrix::new([[1, 2], [0, 0]]));
    /// ```
    #[inline]
    pub fn cursors_mut(&mut self) -> (RowIterMut<'_, T, W>, RowIterMut<'_, T, W>) {
        self.into_cursors()
    }

    /// Returns exclusive reverse cursors to the last row and just before the first row.
    #[inline]
    pub fn rev_cursors_mut(&mut self) -> (Rev<RowIterMut<'_, T, W>>, Rev<RowIterMut<'_, T, W>>) {
        self.into_rev_cursors()
    }
}

impl<T: Default, const H: usize, const W: usize> Default for Matrix<T, H, W> {
    fn default() -> Self {
        Self(array::from_fn(|_| Row::default()))
    }
}

impl<T: Default, const H: usize, const W: usize> From<[[T; W]; H]> for Matrix<T, H, W> {
    #[inline]
    fn from(rows: [[T; W]; H]) -> Self {
        Self::new(rows)
    }
}

impl<T, const H: usize, const W: usize> Index<(usize, usize)> for Matrix<T, H, W> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[row][col]
    }
}

impl<T, const H: usize, const W: usize> IndexMut<(usize, usize)> for Matrix<T, H, W> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[row][col]
    }
}

impl<T: fmt::Debug, const H: usize, const W: usize> fmt::Debug for Matrix<T, H, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a, T, const H: usize, const W: usize> IntoCursors for &'a Matrix<T, H, W> {
    type Cursor = RowIter<'a, T, W>;
    type RevCursor = Rev<RowIter<'a, T, W>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        Ptr::bounds(&self.0)
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        Ptr::rev_bounds(&self.0)
    }
}

impl<'a, T, const H: usize, const W: usize> IntoCursors for &'a mut Matrix<T, H, W> {
    type Cursor = RowIterMut<'a, T, W>;
    type RevCursor = Rev<RowIterMut<'a, T, W>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        Ptr::bounds(Cell::from_mut(&mut self.0[..]).as_slice_of_cells())
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        Ptr::rev_bounds(Cell::from_mut(&mut self.0[..]).as_slice_of_cells())
    }
}
