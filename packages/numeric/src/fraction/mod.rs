use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    number::Number,
    scalar::{Integer, Scalar, ToInteger},
    zero::{One, Zero},
};

mod text;
mod unchecked;

/// An exact rational number `numerator / denominator`.
///
/// The denominator is never zero and never negative, the sign is carried
/// by the numerator. A fraction is not reduced on construction, though every
/// arithmetic operation yields a result in lowest terms. Equality is
/// structural, hence `2/4` equals `1/2` only after [`Fraction::reduce`].
///
/// The arithmetic is checked. Division by a zero fraction fails with the
/// same error as constructing a fraction with a zero denominator, and
/// intermediate results not fitting into `T` fail with
/// [`Error::Overflow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "unchecked::Fraction<T>",
    rename_all = "snake_case",
    bound(
        serialize = "T: Serialize",
        deserialize = "T: Integer + Deserialize<'de>"
    )
)]
pub struct Fraction<T> {
    numerator: Number<T>,
    denominator: Number<T>,
}

impl<T> Fraction<T>
where
    T: Integer,
{
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        match denominator.cmp(&T::ZERO) {
            Ordering::Greater => Ok(Self::new_unchecked(numerator, denominator)),
            Ordering::Less => numerator
                .checked_neg()
                .zip(denominator.checked_neg())
                .map(|(numerator, denominator)| Self::new_unchecked(numerator, denominator))
                .ok_or_else(|| Error::overflow(numerator, "/", denominator)),
            Ordering::Equal => {
                let err = Error::zero_denominator();
                debug!(%numerator, error = %err, "Rejected a fraction");
                Err(err)
            }
        }
    }

    /// Build a fraction out of two arbitrary numbers, truncating them to
    /// integers first.
    pub fn from_numbers<N>(numerator: Number<N>, denominator: Number<N>) -> Result<Self>
    where
        N: Scalar + ToInteger<T>,
    {
        let numerator = Self::narrow(numerator)?;
        let denominator = Self::narrow(denominator)?;

        Self::new(numerator, denominator)
    }

    pub const fn numerator(&self) -> Number<T> {
        self.numerator
    }

    pub const fn denominator(&self) -> Number<T> {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.value() == T::ZERO
    }

    /// The same rational number in lowest terms.
    ///
    /// Whole numbers, `n/1`, are returned as they are.
    pub fn reduce(self) -> Self {
        let numerator = self.numerator.value();
        let denominator = self.denominator.value();

        if denominator == T::ONE {
            self
        } else {
            // the denominator is positive, so is the divisor
            numerator.gcd(denominator).map_or(self, |gcd| {
                Self::new_unchecked(numerator / gcd, denominator / gcd)
            })
        }
    }

    pub fn recip(self) -> Result<Self> {
        Self::new(self.denominator.value(), self.numerator.value())
    }

    // (a / b) + (c / d) = (a * d + b * c) / (b * d)
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.terms_with(&rhs);

        Self::times(a, d).and_then(|ad| {
            Self::times(b, c).and_then(|bc| {
                ad.checked_add(bc)
                    .ok_or_else(|| Error::overflow(ad, "+", bc))
                    .and_then(|numerator| Self::reduced(numerator, Self::times(b, d)?))
            })
        })
    }

    // (a / b) - (c / d) = (a * d - b * c) / (b * d)
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.terms_with(&rhs);

        Self::times(a, d).and_then(|ad| {
            Self::times(b, c).and_then(|bc| {
                ad.checked_sub(bc)
                    .ok_or_else(|| Error::overflow(ad, "-", bc))
                    .and_then(|numerator| Self::reduced(numerator, Self::times(b, d)?))
            })
        })
    }

    // (a / b) * (c / d) = (a * c) / (b * d)
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.terms_with(&rhs);

        Self::times(a, c).and_then(|numerator| Self::reduced(numerator, Self::times(b, d)?))
    }

    // (a / b) / (c / d) = (a * d) / (b * c)
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.terms_with(&rhs);

        Self::times(a, d).and_then(|numerator| Self::reduced(numerator, Self::times(b, c)?))
    }

    const fn new_unchecked(numerator: T, denominator: T) -> Self {
        Self {
            numerator: Number::new(numerator),
            denominator: Number::new(denominator),
        }
    }

    fn reduced(numerator: T, denominator: T) -> Result<Self> {
        Self::new(numerator, denominator).map(Self::reduce)
    }

    fn terms_with(&self, rhs: &Self) -> (T, T, T, T) {
        (
            self.numerator.value(),
            self.denominator.value(),
            rhs.numerator.value(),
            rhs.denominator.value(),
        )
    }

    fn times(lhs: T, rhs: T) -> Result<T> {
        lhs.checked_mul(rhs)
            .ok_or_else(|| Error::overflow(lhs, "*", rhs))
    }

    fn narrow<N>(number: Number<N>) -> Result<T>
    where
        N: Scalar + ToInteger<T>,
    {
        number
            .value()
            .to_integer()
            .ok_or_else(|| Error::not_an_integer(number))
    }
}

impl<T> Default for Fraction<T>
where
    T: Integer,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> Zero for Fraction<T>
where
    T: Integer,
{
    const ZERO: Self = Self::new_unchecked(T::ZERO, T::ONE);
}

impl<T> One for Fraction<T>
where
    T: Integer,
{
    const ONE: Self = Self::new_unchecked(T::ONE, T::ONE);
}

impl<T> From<T> for Fraction<T>
where
    T: Integer,
{
    fn from(whole: T) -> Self {
        Self::new_unchecked(whole, T::ONE)
    }
}

impl<T> Neg for Fraction<T>
where
    T: Integer,
{
    type Output = Result<Self>;

    fn neg(self) -> Self::Output {
        let numerator = self.numerator.value();

        numerator
            .checked_neg()
            .map(|negated| Self::new_unchecked(negated, self.denominator.value()))
            .ok_or_else(|| Error::overflow(T::ZERO, "-", numerator))
    }
}

macro_rules! impl_ops {
    ($($trait: ident :: $fn: ident => $checked: ident),+ $(,)?) => {
        $(
            impl<T> $trait for Fraction<T>
            where
                T: Integer,
            {
                type Output = Result<Self>;

                fn $fn(self, rhs: Self) -> Self::Output {
                    self.$checked(rhs)
                }
            }
        )+
    };
}

impl_ops!(
    Add::add => checked_add,
    Sub::sub => checked_sub,
    Mul::mul => checked_mul,
    Div::div => checked_div,
);
