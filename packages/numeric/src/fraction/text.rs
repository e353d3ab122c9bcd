use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::{
    error::{Error, Result},
    scalar::Integer,
};

use super::Fraction;

impl<T> Display for Fraction<T>
where
    T: Integer,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.numerator.fmt(f)?;

        if self.denominator.value() != T::ONE {
            write!(f, "/{}", self.denominator)?;
        }
        Ok(())
    }
}

/// Parses either a whole number, `"n"`, or a fraction, `"n/d"`.
impl<T> FromStr for Fraction<T>
where
    T: Integer + FromStr,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| part.trim().parse::<T>().map_err(|_| Error::unparsable(s));

        match s.split_once('/') {
            Some((numerator, denominator)) => Self::new(parse(numerator)?, parse(denominator)?),
            None => parse(s).map(Self::from),
        }
    }
}
