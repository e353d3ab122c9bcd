use serde::Deserialize;

use crate::{error::Error, scalar::Integer};

use super::Fraction as ValidatedFraction;

/// Brings invariant checking as a step in deserializing a Fraction
#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub(super) struct Fraction<T> {
    numerator: T,
    denominator: T,
}

impl<T> TryFrom<Fraction<T>> for ValidatedFraction<T>
where
    T: Integer,
{
    type Error = Error;

    fn try_from(dto: Fraction<T>) -> Result<Self, Self::Error> {
        Self::new(dto.numerator, dto.denominator)
    }
}

#[cfg(test)]
mod test {
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};

    use crate::test::fraction;

    use super::ValidatedFraction;

    const FRACTION_STRUCT_NAME: &str = "Fraction";

    fn tokens(numerator: i64, denominator: i64) -> [Token; 6] {
        [
            Token::Struct {
                name: FRACTION_STRUCT_NAME,
                len: 2,
            },
            Token::Str("numerator"),
            Token::I64(numerator),
            Token::Str("denominator"),
            Token::I64(denominator),
            Token::StructEnd,
        ]
    }

    #[test]
    fn serde() {
        assert_tokens(&fraction(-3, 4), &tokens(-3, 4));
    }

    #[test]
    fn normalizes_sign() {
        serde_test::assert_de_tokens(&fraction(-3, 4), &tokens(3, -4));
    }

    #[test]
    fn rejects_zero_denominator() {
        assert_de_tokens_error::<ValidatedFraction<i64>>(
            &tokens(3, 0),
            "Please enter a valid number. Denominator can't be 0!",
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        assert_de_tokens_error::<ValidatedFraction<i64>>(
            &[
                Token::Struct {
                    name: FRACTION_STRUCT_NAME,
                    len: 3,
                },
                Token::Str("numerator"),
                Token::I64(1),
                Token::Str("denominator"),
                Token::I64(2),
                Token::Str("whole"),
            ],
            "unknown field `whole`, expected `numerator` or `denominator`",
        );
    }
}
