use std::str::FromStr;
use thiserror::Error;

/// A complex number with `f32` parts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex64 {
    /// The real part.
    pub re: f32,
    /// The imaginary part.
    pub im: f32,
}

/// A complex number with `f64` parts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex128 {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex64 {
    /// Create a complex number from its parts.
    pub fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

impl Complex128 {
    /// Create a complex number from its parts.
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// The text could not be read as a complex number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid complex number '{0}'.")]
pub struct ParseComplexError(String);

/// Whether `value` only became infinite because `text` overflowed the float width.
pub(crate) fn overflowed(text: &str, value_is_infinite: bool) -> bool {
    value_is_infinite && !text.to_ascii_lowercase().contains("inf")
}

// Splits `N`, `Ni`, `N+Ni`, `N-Ni` (optionally parenthesized) into the real and imaginary texts.
fn split_parts(token: &str) -> Option<(Option<&str>, Option<&str>)> {
    let text = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(token);

    if text.is_empty() {
        return None;
    }

    let body = match text.strip_suffix('i') {
        Some(body) => body,
        None => return Some((Some(text), None)),
    };

    // The separating sign is the right-most one that isn't part of an exponent.
    let bytes = body.as_bytes();
    let separator = (1..bytes.len()).rev().find(|&i| {
        (bytes[i] == b'+' || bytes[i] == b'-') && !matches!(bytes[i - 1], b'e' | b'E')
    });

    match separator {
        Some(i) => Some((Some(&body[..i]), Some(&body[i..]))),
        None => Some((None, Some(body))),
    }
}

macro_rules! complex_impl {
    ($complex:ident, $float:ty) => {
        impl FromStr for $complex {
            type Err = ParseComplexError;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                let invalid = || ParseComplexError(token.to_string());
                // Each part needs its own digits, and may only be infinite when spelled so.
                let part = |text: &str| -> Result<$float, ParseComplexError> {
                    let value: $float = text.parse().map_err(|_| invalid())?;
                    if overflowed(text, value.is_infinite()) {
                        Err(invalid())
                    } else {
                        Ok(value)
                    }
                };
                let (re_text, im_text) = split_parts(token).ok_or_else(invalid)?;
                let re = re_text.map(part).transpose()?.unwrap_or(0.0);
                let im = im_text.map(part).transpose()?.unwrap_or(0.0);

                Ok(Self { re, im })
            }
        }

        impl std::fmt::Display for $complex {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let sign = if self.im.is_sign_negative() && !self.im.is_nan() {
                    ""
                } else {
                    "+"
                };
                write!(f, "({}{sign}{}i)", self.re, self.im)
            }
        }
    };
}

complex_impl!(Complex64, f32);
complex_impl!(Complex128, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1.0, 0.0)]
    #[case("-2.5", -2.5, 0.0)]
    #[case("3i", 0.0, 3.0)]
    #[case("-3i", 0.0, -3.0)]
    #[case("1+2i", 1.0, 2.0)]
    #[case("1-2i", 1.0, -2.0)]
    #[case("(1+2i)", 1.0, 2.0)]
    #[case("1e3+2e-1i", 1000.0, 0.2)]
    #[case("1e+3i", 0.0, 1000.0)]
    #[case("-1.5e2-4i", -150.0, -4.0)]
    #[case("2+infi", 2.0, f64::INFINITY)]
    #[case("(-inf-1i)", f64::NEG_INFINITY, -1.0)]
    fn complex128_from_str(#[case] token: &str, #[case] re: f64, #[case] im: f64) {
        assert_eq!(Complex128::from_str(token).unwrap(), Complex128::new(re, im));
    }

    #[rstest]
    #[case("")]
    #[case("()")]
    #[case("abc")]
    #[case("1+2j")]
    #[case("1+xi")]
    #[case("1++2i")]
    #[case("(1+2i")]
    #[case("i")]
    #[case("2+i")]
    #[case("2-i")]
    #[case("(+i)")]
    fn complex128_from_str_invalid(#[case] token: &str) {
        assert_matches!(Complex128::from_str(token), Err(ParseComplexError(t)) if t == token);
    }

    #[test]
    fn complex64_from_str() {
        assert_eq!(
            Complex64::from_str("0.5-0.25i").unwrap(),
            Complex64::new(0.5, -0.25)
        );
        // Fits an f64, not an f32.
        assert!(Complex64::from_str("1e300+1i").is_err());
        assert!(Complex128::from_str("1e300+1i").is_ok());
        // Infinity is accepted when spelled out.
        assert_eq!(Complex64::from_str("inf").unwrap().re, f32::INFINITY);
        // Only the part spelling infinity may be infinite.
        assert!(Complex64::from_str("1e39+infi").is_err());
        assert!(Complex64::from_str("inf+1e39i").is_err());
        assert_eq!(
            Complex64::from_str("1+infi").unwrap(),
            Complex64::new(1.0, f32::INFINITY)
        );
        assert_eq!(
            Complex128::from_str("1e39+infi").unwrap(),
            Complex128::new(1e39, f64::INFINITY)
        );
    }

    #[rstest]
    #[case(Complex128::new(1.0, 2.0), "(1+2i)")]
    #[case(Complex128::new(1.5, -2.0), "(1.5-2i)")]
    #[case(Complex128::new(0.0, 0.0), "(0+0i)")]
    #[case(Complex128::new(f64::NAN, f64::NAN), "(NaN+NaNi)")]
    fn complex128_display(#[case] value: Complex128, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn complex64_display() {
        assert_eq!(Complex64::new(-1.0, 0.5).to_string(), "(-1+0.5i)");
    }
}
