use std::{array, cell::Cell, fmt};

use crate::{
    cursor::{ElemIter, ElemIterMut, IntoCursors, Ptr, Rev},
    iter,
    traits::{Number, Zero},
};

mod ops;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::new`] and the [`From`] impl create a vector from an array.
/// - The [`literal`][crate::literal] builder creates a vector from operands of mixed numeric
///   types.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - The [`Default`] implementation initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::get`], [`Vector::get_mut`] and [`Vector::into_elem`] take the position as a const
///   generic parameter, and reject positions past the end at compile time.
/// - [`Vector::into_array`] and the [`From`] impls for arrays and tuples (up to 4 elements)
///   destructure the vector.
/// - [`Vector::begin`], [`Vector::end`], [`Vector::rbegin`] and [`Vector::rend`] return cursors for
///   use with the [`iter`] functions. `&Vector` and `&mut Vector` implement [`IntoCursors`] for use
///   with the [`range`][crate::range] functions.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

/// Compile-time check for positional access.
struct Position<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> Position<I, N> {
    const IN_BOUNDS: () = assert!(I < N, "positional access out of bounds");
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of elements in the vector.
    pub const LEN: usize = N;

    /// Creates a vector from an array of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let v = Vector::new([1, 2, 3]);
    /// assert_eq!(v, vec3(1, 2, 3));
    /// ```
    #[inline]
    pub const fn new(elems: [T; N]) -> Self {
        Self(elems)
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Returns a reference to the element at position `I`.
    ///
    /// Positions past the end of the vector fail to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(*v.get::<2>(), 3);
    /// ```
    ///
    /// ```compile_fail
    /// # use algae::*;
    /// let v = vec3(1, 2, 3);
    /// let _ = v.get::<3>();
    /// ```
    #[inline]
    pub fn get<const I: usize>(&self) -> &T {
        let () = Position::<I, N>::IN_BOUNDS;
        &self.0[I]
    }

    /// Returns a mutable reference to the element at position `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let mut v = vec2(1, 2);
    /// *v.get_mut::<0>() = 5;
    /// assert_eq!(v, vec2(5, 2));
    /// ```
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut T {
        let () = Position::<I, N>::IN_BOUNDS;
        &mut self.0[I]
    }

    /// Consumes the vector and returns the element at position `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let v = vec2(String::from("a"), String::from("b"));
    /// assert_eq!(v.into_elem::<1>(), "b");
    /// ```
    #[inline]
    pub fn into_elem<const I: usize>(self) -> T {
        let () = Position::<I, N>::IN_BOUNDS;
        let mut elems = self.0.into_iter();
        match elems.nth(I) {
            Some(elem) => elem,
            None => unreachable!(),
        }
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// This is the way to destructure a vector of any length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let [x, y, z] = vec3(1, 2, 3).into_array();
    /// assert_eq!((x, y, z), (1, 2, 3));
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
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
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// # use algae::iter;
    /// let mut v = vec3(1, 2, 3);
    /// let (begin, end) = v.cursors_mut();
    /// iter::accumulate(begin, end, (), |(), x| x.set(x.get() * 2));
    /// assert_eq!(v, vec3(2, 4, 6));
    /// ```
    #[inline]
    pub fn cursors_mut(&mut self) -> (ElemIterMut<'_, T>, ElemIterMut<'_, T>) {
        self.into_cursors()
    }

    /// Returns exclusive reverse begin and end cursors.
    #[inline]
    pub fn rev_cursors_mut(&mut self) -> (Rev<ElemIterMut<'_, T>>, Rev<ElemIterMut<'_, T>>) {
        self.into_rev_cursors()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// This is the method form of [`dot`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use algae::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(&b), 3);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> T
    where
        T: Number,
    {
        dot(self, other)
    }
}

/// Computes the dot product of two vectors.
///
/// The pairwise products are summed up strictly from the first to the last element, starting at
/// [`T::ZERO`][Zero::ZERO]. For floating-point elements the result is therefore reproducible
/// bit for bit.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// assert_eq!(dot(&vec2(5, -5), &vec2(1, -2)), 15);
/// assert_eq!(dot(&vec3(0.5, 1.0, 2.0), &vec3(2.0, 1.0, 0.25)), 2.5);
/// assert_eq!(dot(&Vector::<u8, 0>::ZERO, &Vector::ZERO), 0);
/// ```
pub fn dot<T: Number, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<T, N>) -> T {
    iter::accumulate(
        iter::zip(lhs.begin(), rhs.begin()),
        iter::zip(lhs.end(), rhs.end()),
        T::ZERO,
        dot_step,
    )
}

fn dot_step<T: Number>(sum: T, (a, b): (&T, &T)) -> T {
    sum + *a * *b
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

macro_rules! tuple_conversions {
    ($( $n:literal => ($($elem:ident),+); )+) => {
        $(
            impl<T> From<Vector<T, $n>> for ($(tuple_conversions!(@ty $elem),)+) {
                #[inline]
                fn from(value: Vector<T, $n>) -> Self {
                    let [$($elem),+] = value.0;
                    ($($elem,)+)
                }
            }

            impl<T> From<($(tuple_conversions!(@ty $elem),)+)> for Vector<T, $n> {
                #[inline]
                fn from(($($elem,)+): ($(tuple_conversions!(@ty $elem),)+)) -> Self {
                    Self([$($elem),+])
                }
            }
        )+
    };
    (@ty $elem:ident) => { T };
}

tuple_conversions! {
    1 => (x);
    2 => (x, y);
    3 => (x, y, z);
    4 => (x, y, z, w);
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<'a, T, const N: usize> IntoCursors for &'a Vector<T, N> {
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

impl<'a, T, const N: usize> IntoCursors for &'a mut Vector<T, N> {
    type Cursor = ElemIterMut<'a, T>;
    type RevCursor = Rev<ElemIterMut<'a, T>>;

    #[inline]
    fn into_cursors(self) -> (Self::Cursor, Self::Cursor) {
        Ptr::bounds(Cell::from_mut(self.as_mut_slice()).as_slice_of_cells())
    }

    #[inline]
    fn into_rev_cursors(self) -> (Self::RevCursor, Self::RevCursor) {
        Ptr::rev_bounds(Cell::from_mut(self.as_mut_slice()).as_slice_of_cells())
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
