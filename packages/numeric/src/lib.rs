pub mod decimal;
pub mod error;
pub mod fraction;
pub mod number;
pub mod real;
pub mod scalar;
#[cfg(any(test, feature = "testing"))]
pub mod test;
pub mod zero;
