use std::ops;

/// Types that have a "zero" value (an additive identity).
///
/// Reductions like [`dot`][crate::dot] start from this value.
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// A trait for numeric types that support the arithmetic needed by [`dot`][crate::dot].
///
/// Unlike a full "number" trait this does not require negation or division, so unsigned integers
/// qualify too.
pub trait Number: Zero + ops::Add<Output = Self> + ops::Mul<Output = Self> + Copy {}
impl<T> Number for T where T: Zero + ops::Add<Output = Self> + ops::Mul<Output = Self> + Copy {}

macro_rules! zero {
    ($($types:ty),+ => $zero:expr) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
        )+
    };
}
zero!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize => 0);
zero!(f32, f64 => 0.0);

/// Computes the common type of `Self` and `Rhs`.
///
/// This is the type both operands are converted to when they end up in the same
/// [`Vector`][crate::Vector], for example via the [`literal`][crate::literal] builder.
///
/// - Identical types stay as they are.
/// - If a float is involved, the result is the widest float ([`f32`] unless [`f64`] is involved).
/// - Two signed or two unsigned integers result in the wider of the two.
/// - A signed and an unsigned integer result in the signed type if it is strictly wider, and in
///   the next signed type that can hold every value of the unsigned one otherwise. The widening is
///   deliberate and preserves every value of both operands: `u32` and `i32` promote to [`i64`],
///   never to an unsigned type.
/// - [`isize`] combines with [`i8`], [`i16`] and [`u8`], [`usize`] with [`u8`] and [`u16`], and
///   [`u128`] with the narrower unsigned integers. No other integer mixes with them, since they are
///   only guaranteed to be 16 bits wide (or there is no wider type). All three combine with floats.
///
/// # Examples
///
/// ```
/// # use algae::*;
/// fn common<A: Promote<B>, B>() -> &'static str {
///     std::any::type_name::<A::Output>()
/// }
/// assert_eq!(common::<i32, f32>(), "f32");
/// assert_eq!(common::<u8, i8>(), "i16");
/// assert_eq!(common::<f32, f64>(), "f64");
/// ```
pub trait Promote<Rhs> {
    /// The common type.
    type Output;
}

macro_rules! promote_same {
    ($($types:ty),+) => {
        $(
            impl Promote<$types> for $types {
                type Output = $types;
            }
        )+
    };
}
promote_same!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// Each unordered pair is listed once, both directions are generated.
macro_rules! promote {
    ($( $a:ty, $b:ty => $out:ty; )+) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;
            }
            impl Promote<$a> for $b {
                type Output = $out;
            }
        )+
    };
}

#[rustfmt::skip]
promote! {
    // signed with signed
    i8, i16 => i16;     i8, i32 => i32;     i8, i64 => i64;     i8, i128 => i128;
    i16, i32 => i32;    i16, i64 => i64;    i16, i128 => i128;
    i32, i64 => i64;    i32, i128 => i128;
    i64, i128 => i128;

    // unsigned with unsigned
    u8, u16 => u16;     u8, u32 => u32;     u8, u64 => u64;
    u16, u32 => u32;    u16, u64 => u64;
    u32, u64 => u64;
    u8, u128 => u128;   u16, u128 => u128;  u32, u128 => u128;  u64, u128 => u128;

    // pointer-sized integers are at least 16 bits wide
    i8, isize => isize;     i16, isize => isize;    u8, isize => isize;
    u8, usize => usize;     u16, usize => usize;

    // unsigned with signed
    u8, i8 => i16;      u8, i16 => i16;     u8, i32 => i32;     u8, i64 => i64;     u8, i128 => i128;
    u16, i8 => i32;     u16, i16 => i32;    u16, i32 => i32;    u16, i64 => i64;    u16, i128 => i128;
    u32, i8 => i64;     u32, i16 => i64;    u32, i32 => i64;    u32, i64 => i64;    u32, i128 => i128;
    u64, i8 => i128;    u64, i16 => i128;   u64, i32 => i128;   u64, i64 => i128;   u64, i128 => i128;

    // integers with floats
    i8, f32 => f32;     i16, f32 => f32;    i32, f32 => f32;    i64, f32 => f32;    i128, f32 => f32;
    u8, f32 => f32;     u16, f32 => f32;    u32, f32 => f32;    u64, f32 => f32;
    i8, f64 => f64;     i16, f64 => f64;    i32, f64 => f64;    i64, f64 => f64;    i128, f64 => f64;
    u8, f64 => f64;     u16, f64 => f64;    u32, f64 => f64;    u64, f64 => f64;
    isize, f32 => f32;  usize, f32 => f32;  u128, f32 => f32;
    isize, f64 => f64;  usize, f64 => f64;  u128, f64 => f64;

    f32, f64 => f64;
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn common<A: Promote<B>, B>() -> TypeId
    where
        A::Output: 'static,
    {
        TypeId::of::<A::Output>()
    }

    #[test]
    fn promotion_is_symmetric() {
        assert_eq!(common::<i64, u16>(), common::<u16, i64>());
        assert_eq!(common::<f32, u64>(), common::<u64, f32>());
        assert_eq!(common::<i8, i128>(), common::<i128, i8>());
    }

    #[test]
    fn promotion_table() {
        assert_eq!(common::<i32, i32>(), TypeId::of::<i32>());
        assert_eq!(common::<i32, f64>(), TypeId::of::<f64>());
        assert_eq!(common::<i64, f32>(), TypeId::of::<f32>());
        assert_eq!(common::<u32, i32>(), TypeId::of::<i64>());
        assert_eq!(common::<u16, i64>(), TypeId::of::<i64>());
        assert_eq!(common::<u64, i8>(), TypeId::of::<i128>());
        assert_eq!(common::<u8, u64>(), TypeId::of::<u64>());
    }

    #[test]
    fn pointer_sized_and_u128() {
        assert_eq!(common::<usize, usize>(), TypeId::of::<usize>());
        assert_eq!(common::<isize, isize>(), TypeId::of::<isize>());
        assert_eq!(common::<u128, u128>(), TypeId::of::<u128>());
        assert_eq!(common::<u16, usize>(), TypeId::of::<usize>());
        assert_eq!(common::<isize, i8>(), TypeId::of::<isize>());
        assert_eq!(common::<u32, u128>(), TypeId::of::<u128>());
        assert_eq!(common::<usize, f32>(), TypeId::of::<f32>());
        assert_eq!(common::<f64, u128>(), TypeId::of::<f64>());
    }

    #[test]
    fn zero() {
        assert_eq!(i32::ZERO, 0);
        assert_eq!(u8::ZERO, 0);
        assert_eq!(f64::ZERO, 0.0);
    }
}
