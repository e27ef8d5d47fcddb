use logos::Logos;

use crate::error::InvalidNumber;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")] // Leading and trailing whitespace is fine
enum Token {
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,
}

/// Anything that can stand for a temperature reading: a plain number or a
/// numeric string such as `"98.6"`.
pub trait Numeric {
    fn to_f64(&self) -> Result<f64, InvalidNumber>;
}

macro_rules! numeric_primitive {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn to_f64(&self) -> Result<f64, InvalidNumber> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

numeric_primitive!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl Numeric for str {
    fn to_f64(&self) -> Result<f64, InvalidNumber> {
        parse_number(self)
    }
}

impl Numeric for String {
    fn to_f64(&self) -> Result<f64, InvalidNumber> {
        parse_number(self)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_f64(&self) -> Result<f64, InvalidNumber> {
        (**self).to_f64()
    }
}

/// A string is a number only if it lexes to exactly one `Number` token.
fn parse_number(s: &str) -> Result<f64, InvalidNumber> {
    let invalid = || InvalidNumber {
        input: s.to_string(),
    };

    let mut lexer = Token::lexer(s);
    let number = match lexer.next() {
        Some(Ok(Token::Number)) => lexer.slice(),
        _ => return Err(invalid()),
    };
    if lexer.next().is_some() {
        return Err(invalid());
    }

    number.parse().map_err(|_| invalid())
}

/// Round to one decimal place. Formatting works on the exact binary value and
/// sends exact ties to the even digit, so `0.25` gives `0.2` while `0.35`
/// (stored as 0.34999...) gives `0.3`.
pub(crate) fn round_tenths(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Converts a Fahrenheit reading to Celsius, rounded to one decimal place.
pub fn convert_f_to_c(fahrenheit: impl Numeric) -> Result<f64, InvalidNumber> {
    let fahrenheit = fahrenheit.to_f64()?;
    Ok(round_tenths((fahrenheit - 32.0) * 5.0 / 9.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_and_boiling() {
        assert_eq!(convert_f_to_c(32).unwrap(), 0.0);
        assert_eq!(convert_f_to_c(212).unwrap(), 100.0);
        assert_eq!(convert_f_to_c(-40).unwrap(), -40.0);
    }

    #[test]
    fn numeric_strings() {
        assert_eq!(convert_f_to_c("98.6").unwrap(), 37.0);
        assert_eq!(convert_f_to_c(" 77 ").unwrap(), 25.0);
        assert_eq!(convert_f_to_c(String::from("+50")).unwrap(), 10.0);
        assert_eq!(convert_f_to_c("1e2").unwrap(), 37.8);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(convert_f_to_c(49).unwrap(), 9.4);
        assert_eq!(convert_f_to_c(69).unwrap(), 20.6);
        assert_eq!(convert_f_to_c(0).unwrap(), -17.8);
        assert_eq!(convert_f_to_c(50.5).unwrap(), 10.3);
    }

    #[test]
    fn negative_zero_survives_rounding() {
        let c = convert_f_to_c(31.95).unwrap();
        assert_eq!(c, 0.0);
        assert!(c.is_sign_negative());
    }

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_tenths(0.25), 0.2);
        assert_eq!(round_tenths(0.75), 0.8);
        assert_eq!(round_tenths(-0.25), -0.2);
        assert_eq!(round_tenths(0.35), 0.3);
    }

    #[test]
    fn rejects_non_numbers() {
        for input in ["", "   ", "abc", "12abc", "1 2", "inf", "NaN", "1_000", "--1"] {
            assert_eq!(
                convert_f_to_c(input),
                Err(InvalidNumber {
                    input: input.to_string()
                }),
                "{input:?} should be rejected"
            );
        }
    }
}
