use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, Div, Mul, Sub},
};

use serde::{Deserialize, Serialize};

use crate::{
    decimal::Decimal,
    error::Result,
    number::Number,
    scalar::{Float, Scalar},
    zero::Zero,
};

/// A real number kept as an integer part plus a fractional part in `[0, 1)`.
///
/// Arithmetic operates on the combined [`Real::value`] and yields the
/// primitive result. There is no carry between the parts of two operands,
/// e.g. `1.75 + 1.75` evaluates to `3.5` and turns into a `Real` again only
/// through [`Real::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    rename_all = "snake_case",
    bound(
        serialize = "T: Serialize",
        deserialize = "T: Scalar + Deserialize<'de>"
    )
)]
pub struct Real<T> {
    integer: Number<T>,
    fractional: Decimal<T>,
}

impl<T> Real<T>
where
    T: Float,
{
    /// Split `value` into its whole and fractional parts.
    ///
    /// The integer part is the floor of `value`, so negative values keep a
    /// non-negative fractional part, e.g. `-3.25` becomes `-4 + 0.75`.
    ///
    /// The fractional part of a negative value is computed with a rounding
    /// loss, hence [`Real::value`] may differ from `value` in the last digits,
    /// e.g. `-0.1` comes back as `-0.09999999999999998`. A negative value too
    /// close to its ceiling has a fractional part rounding up to `1`. It is
    /// carried into the integer part, e.g. `-1e-20` becomes `0 + 0`.
    ///
    /// Only non-finite values are rejected.
    pub fn new(value: T) -> Result<Self> {
        let floor = value.floor();
        let fractional = value - floor;

        if fractional >= T::ONE {
            Ok(Self::from_parts((floor + T::ONE).into(), Decimal::ZERO))
        } else {
            Decimal::new(fractional)
                .map(|fractional| Self::from_parts(floor.into(), fractional))
        }
    }

    pub fn try_from_parts(integer: T, fractional: T) -> Result<Self> {
        Decimal::new(fractional)
            .map(|fractional| Self::from_parts(integer.into(), fractional))
    }
}

impl<T> Real<T>
where
    T: Scalar,
{
    pub const fn from_parts(integer: Number<T>, fractional: Decimal<T>) -> Self {
        Self {
            integer,
            fractional,
        }
    }

    pub const fn integer(&self) -> Number<T> {
        self.integer
    }

    pub const fn fractional(&self) -> Decimal<T> {
        self.fractional
    }

    pub fn value(&self) -> T {
        self.integer.value() + self.fractional.value()
    }

    pub fn next_value(&self) -> T {
        self.value() + T::ONE
    }

    pub fn previous_value(&self) -> T {
        self.value() - T::ONE
    }
}

impl<T> Default for Real<T>
where
    T: Zero,
{
    fn default() -> Self {
        Self {
            integer: Number::ZERO,
            fractional: Decimal::ZERO,
        }
    }
}

impl<T> Display for Real<T>
where
    T: Scalar,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value(), f)
    }
}

macro_rules! impl_ops {
    ($($trait: ident :: $fn: ident),+ $(,)?) => {
        $(
            impl<T> $trait for Real<T>
            where
                T: Scalar,
            {
                type Output = T;

                fn $fn(self, rhs: Self) -> T {
                    self.value().$fn(rhs.value())
                }
            }
        )+
    };
}

macro_rules! impl_primitive_ops {
    ($($type: ty),+ $(,)?) => {
        $(
            impl TryFrom<$type> for Real<$type> {
                type Error = crate::error::Error;

                fn try_from(value: $type) -> Result<Self> {
                    Self::new(value)
                }
            }

            impl Add<$type> for Real<$type> {
                type Output = $type;

                fn add(self, rhs: $type) -> $type {
                    self.value() + rhs
                }
            }

            impl Sub<$type> for Real<$type> {
                type Output = $type;

                fn sub(self, rhs: $type) -> $type {
                    self.value() - rhs
                }
            }

            impl Mul<$type> for Real<$type> {
                type Output = $type;

                fn mul(self, rhs: $type) -> $type {
                    self.value() * rhs
                }
            }

            impl Div<$type> for Real<$type> {
                type Output = $type;

                fn div(self, rhs: $type) -> $type {
                    self.value() / rhs
                }
            }
        )+
    };
}

impl_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

impl_primitive_ops!(f32, f64);
