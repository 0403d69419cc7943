//! Vector literals with operands of mixed numeric types.
//!
//! A literal starts with [`vec`], appends operands with `|`, and is closed with [`end`]:
//!
//! ```
//! # use algae::*;
//! use algae::literal::{end, vec};
//!
//! let v: Vector<i32, 3> = vec | 0 | 1 | 2 | end;
//! assert_eq!(v, Vector::new([0, 1, 2]));
//!
//! // Mixing integers and floats results in a float vector.
//! let v = vec | 1u8 | 2.5f32 | end;
//! assert_eq!(v, vec2(1.0f32, 2.5));
//! ```
//!
//! The element type of the resulting [`Vector`] is the common type of all operands, as computed
//! by [`Promote`] from the first to the last operand. Each operand is then converted to it as if
//! by an `as` cast.
//!
//! Literals without operands don't compile, and neither do literals with more than 12 operands:
//!
//! ```compile_fail
//! # use algae::literal::{end, vec};
//! let v = vec | end;
//! ```
//!
//! The method forms [`VecLiteral::push`], [`Builder::push`] and [`Builder::finish`] do the same
//! without operators.

use std::ops::BitOr;

use num_traits::AsPrimitive;

use crate::{traits::Promote, Vector};

/// Starts a vector literal. See the [module documentation][self].
#[allow(non_upper_case_globals)]
pub const vec: VecLiteral = VecLiteral;

/// Ends a vector literal. See the [module documentation][self].
#[allow(non_upper_case_globals)]
pub const end: End = End;

/// The type of [`vec`], a vector literal without operands.
#[derive(Clone, Copy, Debug, Default)]
pub struct VecLiteral;

/// The type of [`end`].
#[derive(Clone, Copy, Debug, Default)]
pub struct End;

/// A vector literal holding the tuple of operands `L` appended so far.
#[derive(Clone, Copy, Debug)]
pub struct Builder<L> {
    operands: L,
}

impl<L> Builder<L> {
    /// Returns the operands appended so far.
    pub fn operands(&self) -> &L {
        &self.operands
    }
}

/// Types that can be used as operands of a vector literal.
pub trait Operand: Copy + 'static {}

macro_rules! operands {
    ($($t:ty),+) => {
        $( impl Operand for $t {} )+
    };
}
operands!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Computes the common type of a tuple of operands.
///
/// The common type of a single operand is its own type. For more operands, the first two are
/// replaced by their [`Promote`]d type until one is left.
pub trait Unify {
    /// The common type.
    type Common: Copy + 'static;
}

/// The element type of the vector produced by a literal with operands `L`.
pub type Unified<L> = <L as Unify>::Common;

macro_rules! unify {
    ($a:ident) => {
        impl<$a: Operand> Unify for ($a,) {
            type Common = $a;
        }
    };
    ($a:ident, $b:ident $(, $rest:ident)*) => {
        impl<$a, $b $(, $rest)*> Unify for ($a, $b $(, $rest)*)
        where
            $a: Promote<$b>,
            (<$a as Promote<$b>>::Output, $($rest,)*): Unify,
        {
            type Common = Unified<(<$a as Promote<$b>>::Output, $($rest,)*)>;
        }

        unify!($b $(, $rest)*);
    };
}
unify!(A, B, C, D, E, F, G, H, I, J, K, L);

impl<X: Operand> BitOr<X> for VecLiteral {
    type Output = Builder<(X,)>;

    #[inline]
    fn bitor(self, operand: X) -> Builder<(X,)> {
        self.push(operand)
    }
}

impl VecLiteral {
    /// Appends the first operand.
    #[inline]
    pub fn push<X: Operand>(self, operand: X) -> Builder<(X,)> {
        Builder { operands: (operand,) }
    }
}

// Appending to a literal with operands `$t`, which are bound to `$v` when destructuring.
macro_rules! append {
    ($($t:ident $v:ident),+) => {
        impl<$($t,)+ X: Operand> BitOr<X> for Builder<($($t,)+)> {
            type Output = Builder<($($t,)+ X)>;

            #[inline]
            fn bitor(self, operand: X) -> Self::Output {
                self.push(operand)
            }
        }

        impl<$($t),+> Builder<($($t,)+)> {
            /// Appends another operand.
            #[inline]
            pub fn push<X: Operand>(self, operand: X) -> Builder<($($t,)+ X)> {
                let ($($v,)+) = self.operands;
                Builder { operands: ($($v,)+ operand) }
            }
        }
    };
}

append!(A a);
append!(A a, B b);
append!(A a, B b, C c);
append!(A a, B b, C c, D d);
append!(A a, B b, C c, D d, E e);
append!(A a, B b, C c, D d, E e, F f);
append!(A a, B b, C c, D d, E e, F f, G g);
append!(A a, B b, C c, D d, E e, F f, G g, H h);
append!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
append!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
append!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);

// Closing a literal with `$n` operands.
macro_rules! finish {
    (@impl $n:literal; $tuple:ty; $($t:ident $v:ident),+) => {
        impl<$($t),+> BitOr<End> for Builder<$tuple>
        where
            $tuple: Unify,
            $($t: AsPrimitive<Unified<$tuple>>,)+
        {
            type Output = Vector<Unified<$tuple>, $n>;

            #[inline]
            fn bitor(self, _: End) -> Self::Output {
                self.finish()
            }
        }

        impl<$($t),+> Builder<$tuple> {
            /// Converts all operands to their common type, and returns them as a [`Vector`].
            ///
            /// This is the same as appending [`end`].
            pub fn finish(self) -> Vector<Unified<$tuple>, $n>
            where
                $tuple: Unify,
                $($t: AsPrimitive<Unified<$tuple>>,)+
            {
                let ($($v,)+) = self.operands;
                Vector::new([$($v.as_(),)+])
            }
        }
    };
    ($n:literal; $($t:ident $v:ident),+) => {
        finish!(@impl $n; ($($t,)+); $($t $v),+);
    };
}

finish!(1; A a);
finish!(2; A a, B b);
finish!(3; A a, B b, C c);
finish!(4; A a, B b, C c, D d);
finish!(5; A a, B b, C c, D d, E e);
finish!(6; A a, B b, C c, D d, E e, F f);
finish!(7; A a, B b, C c, D d, E e, F f, G g);
finish!(8; A a, B b, C c, D d, E e, F f, G g, H h);
finish!(9; A a, B b, C c, D d, E e, F f, G g, H h, I i);
finish!(10; A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
finish!(11; A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
finish!(12; A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use crate::{vec3, Vec2};

    use super::*;

    fn type_of<T: 'static>(_: &T) -> TypeId {
        TypeId::of::<T>()
    }

    #[test]
    fn integers() {
        let v: Vector<i32, 3> = vec | 0 | 1 | 2 | end;
        assert_eq!(v[0], 0);
        assert_eq!(v[1], 1);
        assert_eq!(v[2], 2);
        assert_eq!(v, Vector::new([0, 1, 2]));
    }

    #[test]
    fn single_operand() {
        let v = vec | 7u16 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vector<u16, 1>>());
        assert_eq!(v[0], 7);
    }

    #[test]
    fn integer_then_float() {
        let v = vec | 1i32 | 2.5f64 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vec2<f64>>());
        assert_eq!(v, [1.0, 2.5]);

        let v = vec | 3i64 | 0.5f32 | 2u8 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vector<f32, 3>>());
        assert_eq!(v, [3.0, 0.5, 2.0]);
    }

    #[test]
    fn mixed_signedness() {
        let v = vec | 200u8 | -1i8 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vector<i16, 2>>());
        assert_eq!(v, [200, -1]);

        let v = vec | u32::MAX | 0i32 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vector<i64, 2>>());
        assert_eq!(v[0], i64::from(u32::MAX));
    }

    #[test]
    fn promotion_is_folded_left_to_right() {
        // (u8, i8) -> i16, then (i16, u16) -> i32.
        let v = vec | 1u8 | 2i8 | 3u16 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vector<i32, 3>>());
        assert_eq!(v, vec3(1, 2, 3));
    }

    #[test]
    fn method_form() {
        let v = vec.push(1u8).push(2u8).push(3u8).finish();
        assert_eq!(v, vec3(1u8, 2, 3));

        let builder = vec | 1.5f32 | 2i16;
        assert_eq!(builder.operands(), &(1.5, 2));
        assert_eq!(builder | end, [1.5, 2.0]);
    }

    #[test]
    fn pointer_sized_and_u128() {
        let v: Vector<usize, 2> = vec | 1usize | 2usize | end;
        assert_eq!(v, [1, 2]);

        let v = vec | -3isize | 4i8 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vector<isize, 2>>());
        assert_eq!(v, [-3, 4]);

        let v = vec | u128::MAX | 1u8 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vector<u128, 2>>());
        assert_eq!(v[0], u128::MAX);

        let v = vec | 7usize | 0.5f64 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vec2<f64>>());
        assert_eq!(v, [7.0, 0.5]);
    }

    #[test]
    fn twelve_operands() {
        let v = vec | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12.0 | end;
        assert_eq!(type_of(&v), TypeId::of::<Vector<f64, 12>>());
        assert_eq!(v[11], 12.0);
        assert_eq!(v.dot(&Vector::splat(1.0)), 78.0);
    }
}
