use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, Div, Mul, Sub},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as DeError};
use tracing::debug;

use crate::{
    error::{Error, Result},
    scalar::Scalar,
    zero::Zero,
};

/// A fractional value within `[0, 1)`.
///
/// The range is checked on construction and deserialization.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Decimal<T>(T);

impl<T> Decimal<T>
where
    T: Scalar,
{
    pub fn new(value: T) -> Result<Self> {
        if value >= T::ZERO && value < T::ONE {
            Ok(Self(value))
        } else {
            let err = Error::decimal_out_of_range();
            debug!(%value, error = %err, "Rejected a decimal");
            Err(err)
        }
    }

    pub const fn value(&self) -> T {
        self.0
    }
}

impl<T> Default for Decimal<T>
where
    T: Zero,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> Zero for Decimal<T>
where
    T: Zero,
{
    const ZERO: Self = Self(T::ZERO);
}

impl<T> Display for Decimal<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl<T> Serialize for Decimal<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Decimal<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).and_then(|value| Self::new(value).map_err(DeError::custom))
    }
}

macro_rules! impl_ops {
    ($($trait: ident :: $fn: ident),+ $(,)?) => {
        $(
            impl<T> $trait for Decimal<T>
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

macro_rules! impl_primitive {
    ($($type: ty),+ $(,)?) => {
        $(
            impl TryFrom<$type> for Decimal<$type> {
                type Error = Error;

                fn try_from(value: $type) -> Result<Self> {
                    Self::new(value)
                }
            }

            impl Add<$type> for Decimal<$type> {
                type Output = $type;

                fn add(self, rhs: $type) -> $type {
                    self.0 + rhs
                }
            }

            impl Sub<$type> for Decimal<$type> {
                type Output = $type;

                fn sub(self, rhs: $type) -> $type {
                    self.0 - rhs
                }
            }

            impl Mul<$type> for Decimal<$type> {
                type Output = $type;

                fn mul(self, rhs: $type) -> $type {
                    self.0 * rhs
                }
            }

            impl Div<$type> for Decimal<$type> {
                type Output = $type;

                fn div(self, rhs: $type) -> $type {
                    self.0 / rhs
                }
            }
        )+
    };
}

impl_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

impl_primitive!(f32, f64);
