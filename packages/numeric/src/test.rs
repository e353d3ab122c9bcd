use crate::{decimal::Decimal, fraction::Fraction, real::Real};

pub fn fraction(numerator: i64, denominator: i64) -> Fraction<i64> {
    Fraction::new(numerator, denominator).expect("the denominator should not be zero")
}

pub fn decimal(value: f64) -> Decimal<f64> {
    Decimal::new(value).expect("the value should be within [0, 1)")
}

pub fn real(value: f64) -> Real<f64> {
    Real::new(value).expect("the value should be finite, NaN and infinities are rejected")
}
