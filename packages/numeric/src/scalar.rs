use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Sub},
};

use gcd::Gcd;

use crate::zero::{One, Zero};

/// A primitive numeric value the wrappers of this crate are generic over.
///
/// Arithmetic and comparison semantics are those of the primitive.
pub trait Scalar
where
    Self: Copy
        + Debug
        + Display
        + PartialOrd
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + Zero
        + One,
{
}

impl<T> Scalar for T where
    T: Copy
        + Debug
        + Display
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Zero
        + One
{
}

pub trait Float
where
    Self: Scalar,
{
    fn floor(self) -> Self;
}

/// An integral scalar with overflow-aware arithmetic.
pub trait Integer
where
    Self: Scalar + Ord,
{
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;

    /// The greatest common divisor of the absolute values.
    ///
    /// `None` if it is not representable in `Self`, i.e. `gcd(MIN, MIN)`
    /// or `gcd(MIN, 0)` of a signed type.
    fn gcd(self, other: Self) -> Option<Self>;
}

/// Narrowing to an integral type, truncating any fractional digits.
pub trait ToInteger<I> {
    fn to_integer(self) -> Option<I>;
}

macro_rules! impl_float {
    ($($type: ty),+ $(,)?) => {
        $(
            impl Float for $type {
                fn floor(self) -> Self {
                    <$type>::floor(self)
                }
            }
        )+
    };
}

macro_rules! impl_integer_ops {
    ($type: ty) => {
        fn checked_add(self, rhs: Self) -> Option<Self> {
            <$type>::checked_add(self, rhs)
        }

        fn checked_sub(self, rhs: Self) -> Option<Self> {
            <$type>::checked_sub(self, rhs)
        }

        fn checked_mul(self, rhs: Self) -> Option<Self> {
            <$type>::checked_mul(self, rhs)
        }

        fn checked_neg(self) -> Option<Self> {
            <$type>::checked_neg(self)
        }
    };
}

macro_rules! impl_signed {
    ($($type: ty),+ $(,)?) => {
        $(
            impl Integer for $type {
                impl_integer_ops!($type);

                fn gcd(self, other: Self) -> Option<Self> {
                    Self::try_from(Gcd::gcd(self.unsigned_abs(), other.unsigned_abs())).ok()
                }
            }
        )+
    };
}

macro_rules! impl_unsigned {
    ($($type: ty),+ $(,)?) => {
        $(
            impl Integer for $type {
                impl_integer_ops!($type);

                fn gcd(self, other: Self) -> Option<Self> {
                    Some(Gcd::gcd(self, other))
                }
            }
        )+
    };
}

macro_rules! impl_to_integer {
    (int: $($from: ty),+ $(,)?) => {
        $(
            impl_to_integer!(@int $from => i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
        )+
    };

    (float: $($from: ty),+ $(,)?) => {
        $(
            impl_to_integer!(@float $from => i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
        )+
    };

    (@int $from: ty => $($to: ty),+) => {
        $(
            impl ToInteger<$to> for $from {
                fn to_integer(self) -> Option<$to> {
                    <$to>::try_from(self).ok()
                }
            }
        )+
    };

    // `as` saturates, out of range values must not get clamped
    (@float $from: ty => $($to: ty),+) => {
        $(
            impl ToInteger<$to> for $from {
                fn to_integer(self) -> Option<$to> {
                    let whole = self.trunc();
                    (whole.is_finite()
                        && whole >= <$to>::MIN as $from
                        && whole <= <$to>::MAX as $from)
                        .then_some(whole as $to)
                }
            }
        )+
    };
}

impl_float!(f32, f64);

impl_signed!(i8, i16, i32, i64, i128, isize);

impl_unsigned!(u8, u16, u32, u64, u128, usize);

impl_to_integer!(int: i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

impl_to_integer!(float: f32, f64);

#[cfg(test)]
mod test {
    use super::{Float, Integer, ToInteger};

    #[test]
    fn gcd_signed() {
        assert_eq!(Some(6), Integer::gcd(-12i32, 18));
        assert_eq!(Some(6), Integer::gcd(12i32, -18));
        assert_eq!(Some(7), Integer::gcd(0i64, -7));
        assert_eq!(Some(0), Integer::gcd(0i8, 0));
        assert_eq!(Some(1), Integer::gcd(i8::MIN, 3));
        assert_eq!(None, Integer::gcd(i8::MIN, 0));
    }

    #[test]
    fn gcd_unsigned() {
        assert_eq!(Some(5), Integer::gcd(15u8, 25));
        assert_eq!(Some(1), Integer::gcd(17u64, 4));
    }

    #[test]
    fn checked_ops() {
        assert_eq!(None, Integer::checked_mul(i8::MAX, 2));
        assert_eq!(None, Integer::checked_neg(i8::MIN));
        assert_eq!(None, Integer::checked_neg(1u32));
        assert_eq!(Some(0), Integer::checked_neg(0u32));
        assert_eq!(Some(-3), Integer::checked_sub(2i16, 5));
    }

    #[test]
    fn float_to_integer() {
        assert_eq!(Some(3i64), 3.75f64.to_integer());
        assert_eq!(Some(-3i64), (-3.75f64).to_integer());
        assert_eq!(Some(0u8), 0.5f32.to_integer());
        assert_eq!(None::<u8>, (-1.0f64).to_integer());
        assert_eq!(None::<i8>, 300.0f64.to_integer());
        assert_eq!(None::<i64>, f64::NAN.to_integer());
        assert_eq!(None::<i64>, f64::INFINITY.to_integer());
    }

    #[test]
    fn integer_to_integer() {
        assert_eq!(Some(-5i64), (-5i32).to_integer());
        assert_eq!(None::<u32>, (-5i32).to_integer());
        assert_eq!(None::<i8>, 128u64.to_integer());
        assert_eq!(Some(42i32), 42i32.to_integer());
    }

    #[test]
    fn floor() {
        assert_eq!(3.0, 3.75f64.floor());
        assert_eq!(-4.0, Float::floor(-3.25f32));
    }
}
