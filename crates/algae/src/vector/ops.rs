//! Implementations of `std::ops` and `std::cmp`.

use std::ops::{Index, IndexMut};

use crate::{iter, range};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        iter::equal(self.begin(), self.end(), other.begin(), other.end())
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        range::equal(self, other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        range::equal(self, other)
    }
}

#[cfg(test)]
mod tests {
    use crate::{range, vec1, vec2, vec3, Vector};

    #[test]
    fn equality() {
        assert_eq!(vec3(1, 2, 3), vec3(1, 2, 3));
        assert_ne!(vec3(1, 2, 3), vec3(1, 2, 4));
        assert_eq!(vec2(1, 2), [1, 2]);
        assert_eq!([1, 2], vec2(1, 2));
        assert_ne!(vec2(0.0, f64::NAN), vec2(0.0, f64::NAN));
        assert_eq!(Vector::<u8, 0>::default(), Vector::<u8, 0>::default());

        // Mixed element types.
        assert_eq!(vec2("a", "b"), vec2(String::from("a"), String::from("b")));
    }

    #[test]
    fn single_difference() {
        let v = vec3(1, 2, 3);
        for i in 0..3 {
            let mut u = v;
            u[i] += 1;
            assert_ne!(v, u);
            assert!(!range::equal(&v, &u));
            assert!(!range::not_equal(&v, &u));
        }

        let v = vec1(1);
        let u = vec1(2);
        assert!(!range::equal(&v, &u));
        assert!(range::not_equal(&v, &u));
    }

    #[test]
    fn index_mut() {
        let mut v = vec3(1, 2, 3);
        v[0] = 9;
        v[2] *= 2;
        assert_eq!(v, [9, 2, 6]);
    }
}
