use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, Div, Mul, Sub},
};

use serde::{Deserialize, Serialize};

use crate::{
    scalar::Scalar,
    zero::{One, Zero},
};

/// A single scalar value.
///
/// The arithmetic is not closed over `Number`. Combining two numbers, or a
/// number and a primitive, yields the primitive result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number<T>(T);

impl<T> Number<T>
where
    T: Scalar,
{
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> T {
        self.0
    }

    /// The value following this one, `self + 1`. The receiver is left intact.
    pub fn next_value(&self) -> T {
        self.0 + T::ONE
    }

    /// The value preceding this one, `self - 1`. The receiver is left intact.
    pub fn previous_value(&self) -> T {
        self.0 - T::ONE
    }
}

impl<T> Default for Number<T>
where
    T: Zero,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> Zero for Number<T>
where
    T: Zero,
{
    const ZERO: Self = Self(T::ZERO);
}

impl<T> One for Number<T>
where
    T: One,
{
    const ONE: Self = Self(T::ONE);
}

impl<T> From<T> for Number<T>
where
    T: Scalar,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Display for Number<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

macro_rules! impl_ops {
    ($($trait: ident :: $fn: ident),+ $(,)?) => {
        $(
            impl<T> $trait for Number<T>
            where
                T: Scalar,
            {
                type Output = T;

                fn $fn(self, rhs: Self) -> T {
                    self.0.$fn(rhs.0)
                }
            }
        )+
    };
}

macro_rules! impl_primitive_ops {
    ($($type: ty),+ $(,)?) => {
        $(
            impl Add<$type> for Number<$type> {
                type Output = $type;

                fn add(self, rhs: $type) -> $type {
                    self.0 + rhs
                }
            }

            impl Sub<$type> for Number<$type> {
                type Output = $type;

                fn sub(self, rhs: $type) -> $type {
                    self.0 - rhs
                }
            }

            impl Mul<$type> for Number<$type> {
                type Output = $type;

                fn mul(self, rhs: $type) -> $type {
                    self.0 * rhs
                }
            }

            impl Div<$type> for Number<$type> {
                type Output = $type;

                fn div(self, rhs: $type) -> $type {
                    self.0 / rhs
                }
            }
        )+
    };
}

impl_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

impl_primitive_ops!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64
);

#[cfg(test)]
mod test {
    use serde_test::{Token, assert_tokens};

    use super::Number;

    #[test]
    fn default_is_zero() {
        assert_eq!(0, Number::<i32>::default().value());
        assert_eq!(0.0, Number::<f64>::default().value());
    }

    #[test]
    fn arithmetic_yields_primitive() {
        let lhs = Number::new(12i32);
        let rhs = Number::new(5i32);

        assert_eq!(17, lhs + rhs);
        assert_eq!(7, lhs - rhs);
        assert_eq!(60, lhs * rhs);
        assert_eq!(2, lhs / rhs);

        assert_eq!(15, lhs + 3);
        assert_eq!(9, lhs - 3);
        assert_eq!(36, lhs * 3);
        assert_eq!(4, lhs / 3);

        assert_eq!(2.5, Number::new(5.0f64) / 2.0);
    }

    #[test]
    fn next_and_previous_do_not_mutate() {
        let n = Number::new(41u32);

        assert_eq!(42, n.next_value());
        assert_eq!(40, n.previous_value());
        assert_eq!(41, n.value());

        assert_eq!(2.5, Number::new(1.5f64).next_value());
    }

    #[test]
    fn copy_is_independent() {
        let origin = Number::new(7i32);
        let mut copy = origin;
        copy = Number::new(copy + 1);

        assert_eq!(7, origin.value());
        assert_eq!(8, copy.value());
    }

    #[test]
    fn display() {
        assert_eq!("-17", format!("{}", Number::new(-17i32)));
        assert_eq!("0.25", format!("{}", Number::new(0.25f64)));
    }

    #[test]
    fn serde_transparent() {
        assert_tokens(&Number::new(-3i64), &[Token::I64(-3)]);
    }
}
