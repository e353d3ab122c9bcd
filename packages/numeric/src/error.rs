use std::fmt::{Debug, Display};

use thiserror::Error;

pub const DECIMAL_OUT_OF_RANGE: &str = "Decimal must be between 0.00 and 1!";
pub const ZERO_DENOMINATOR: &str = "Denominator can't be 0!";

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Please enter a valid number. {0}")]
    InvalidNumber(String),

    #[error("[Numeric] Arithmetic overflow when evaluating `{details}`")]
    Overflow { details: String },
}

impl Error {
    pub fn decimal_out_of_range() -> Self {
        Self::InvalidNumber(DECIMAL_OUT_OF_RANGE.into())
    }

    pub fn zero_denominator() -> Self {
        Self::InvalidNumber(ZERO_DENOMINATOR.into())
    }

    pub fn not_an_integer<V>(value: V) -> Self
    where
        V: Display,
    {
        Self::InvalidNumber(format!("'{value}' does not fit into an integer!"))
    }

    pub fn unparsable(text: &str) -> Self {
        Self::InvalidNumber(format!("Cannot parse '{text}' as a fraction!"))
    }

    pub fn overflow<L, R>(lhs: L, op: &str, rhs: R) -> Self
    where
        L: Debug,
        R: Debug,
    {
        Self::Overflow {
            details: format!("({lhs:?} {op} {rhs:?})"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
