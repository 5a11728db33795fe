use std::str::FromStr;
use thiserror::Error;

use crate::complex::overflowed;
use crate::model::{TypeTag, Value};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub(crate) struct InvalidConversion {
    pub(crate) token: String,
    pub(crate) type_name: &'static str,
}

/// Convert `value` into the `target` type.
///
/// Only text is converted; any other value is already typed and passes through.
/// Text bound for `string` or `bool` stays text.
pub(crate) fn coerce(value: Value, target: TypeTag) -> Result<Value, InvalidConversion> {
    let text = match value {
        Value::Text(text) => text,
        typed => return Ok(typed),
    };

    match target {
        TypeTag::Text | TypeTag::Bool => Ok(Value::Text(text)),
        TypeTag::U8 => unsigned(&text, target).map(Value::U8),
        TypeTag::U16 => unsigned(&text, target).map(Value::U16),
        TypeTag::U32 => unsigned(&text, target).map(Value::U32),
        TypeTag::U64 => unsigned(&text, target).map(Value::U64),
        // The plain integers are parsed within the 32 bit range.
        TypeTag::Uint => unsigned::<u32>(&text, target).map(|v| Value::Uint(v as usize)),
        TypeTag::I8 => convert(&text, target).map(Value::I8),
        TypeTag::I16 => convert(&text, target).map(Value::I16),
        TypeTag::I32 => convert(&text, target).map(Value::I32),
        TypeTag::I64 => convert(&text, target).map(Value::I64),
        TypeTag::Int => convert::<i32>(&text, target).map(|v| Value::Int(v as isize)),
        TypeTag::F32 => convert::<f32>(&text, target)
            .and_then(|v| in_range(&text, target, v.is_infinite()).map(|_| v))
            .map(Value::F32),
        TypeTag::F64 => convert::<f64>(&text, target)
            .and_then(|v| in_range(&text, target, v.is_infinite()).map(|_| v))
            .map(Value::F64),
        TypeTag::C64 => convert(&text, target).map(Value::C64),
        TypeTag::C128 => convert(&text, target).map(Value::C128),
    }
}

fn convert<T: FromStr>(text: &str, target: TypeTag) -> Result<T, InvalidConversion> {
    T::from_str(text).map_err(|_| invalid(text, target))
}

// Unsigned text carries no sign at all.
fn unsigned<T: FromStr>(text: &str, target: TypeTag) -> Result<T, InvalidConversion> {
    if text.starts_with('+') {
        return Err(invalid(text, target));
    }

    convert(text, target)
}

fn in_range(text: &str, target: TypeTag, is_infinite: bool) -> Result<(), InvalidConversion> {
    if overflowed(text, is_infinite) {
        Err(invalid(text, target))
    } else {
        Ok(())
    }
}

fn invalid(text: &str, target: TypeTag) -> InvalidConversion {
    InvalidConversion {
        token: text.to_string(),
        type_name: target.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{Complex128, Complex64};
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case("255", TypeTag::U8, Value::U8(255))]
    #[case("65535", TypeTag::U16, Value::U16(65535))]
    #[case("4294967295", TypeTag::U32, Value::U32(u32::MAX))]
    #[case("18446744073709551615", TypeTag::U64, Value::U64(u64::MAX))]
    #[case("4294967295", TypeTag::Uint, Value::Uint(4294967295))]
    #[case("-128", TypeTag::I8, Value::I8(-128))]
    #[case("-32768", TypeTag::I16, Value::I16(i16::MIN))]
    #[case("42", TypeTag::I32, Value::I32(42))]
    #[case("-9223372036854775808", TypeTag::I64, Value::I64(i64::MIN))]
    #[case("+7", TypeTag::I8, Value::I8(7))]
    #[case("-2147483648", TypeTag::Int, Value::Int(-2147483648))]
    #[case("1.5", TypeTag::F32, Value::F32(1.5))]
    #[case("-2.25e3", TypeTag::F64, Value::F64(-2250.0))]
    #[case("inf", TypeTag::F64, Value::F64(f64::INFINITY))]
    #[case("1+2i", TypeTag::C64, Value::C64(Complex64::new(1.0, 2.0)))]
    #[case("(3-4i)", TypeTag::C128, Value::C128(Complex128::new(3.0, -4.0)))]
    #[case("hello", TypeTag::Text, Value::from("hello"))]
    #[case("true", TypeTag::Bool, Value::from("true"))]
    #[case("yes", TypeTag::Bool, Value::from("yes"))]
    fn coerce_text(#[case] text: &str, #[case] target: TypeTag, #[case] expected: Value) {
        assert_eq!(coerce(Value::from(text), target).unwrap(), expected);
    }

    #[rstest]
    #[case("256", TypeTag::U8, "u8")]
    #[case("+5", TypeTag::U8, "u8")]
    #[case("+5", TypeTag::U64, "u64")]
    #[case("+5", TypeTag::Uint, "usize")]
    #[case("-1", TypeTag::U16, "u16")]
    #[case("4294967296", TypeTag::U32, "u32")]
    #[case("0x10", TypeTag::U64, "u64")]
    #[case("4294967296", TypeTag::Uint, "usize")]
    #[case("128", TypeTag::I8, "i8")]
    #[case("1.0", TypeTag::I16, "i16")]
    #[case("notanumber", TypeTag::I32, "i32")]
    #[case("", TypeTag::I64, "i64")]
    #[case("2147483648", TypeTag::Int, "isize")]
    #[case("i", TypeTag::C128, "complex128")]
    #[case("2+i", TypeTag::C128, "complex128")]
    #[case("1e39+infi", TypeTag::C64, "complex64")]
    #[case("1e39", TypeTag::F32, "f32")]
    #[case("1e309", TypeTag::F64, "f64")]
    #[case("notanumber", TypeTag::F64, "f64")]
    #[case("1+2j", TypeTag::C64, "complex64")]
    #[case("abc", TypeTag::C128, "complex128")]
    fn coerce_invalid(#[case] text: &str, #[case] target: TypeTag, #[case] type_name: &str) {
        assert_eq!(
            coerce(Value::from(text), target).unwrap_err(),
            InvalidConversion {
                token: text.to_string(),
                type_name: target.name(),
            }
        );
        assert_eq!(target.name(), type_name);
    }

    #[rstest]
    #[case(Value::I32(5), TypeTag::I32)]
    #[case(Value::Bool(true), TypeTag::Bool)]
    #[case(Value::F64(0.5), TypeTag::F64)]
    #[case(Value::U8(1), TypeTag::U8)]
    fn coerce_typed_passthrough(#[case] value: Value, #[case] target: TypeTag) {
        assert_eq!(coerce(value.clone(), target).unwrap(), value);
    }

    #[test]
    fn coerce_random_integers() {
        for _ in 0..100 {
            let expected: i64 = thread_rng().gen();
            assert_eq!(
                coerce(Value::Text(expected.to_string()), TypeTag::I64).unwrap(),
                Value::I64(expected)
            );

            let expected: u16 = thread_rng().gen();
            assert_eq!(
                coerce(Value::Text(expected.to_string()), TypeTag::U16).unwrap(),
                Value::U16(expected)
            );

            let expected: i32 = thread_rng().gen();
            assert_eq!(
                coerce(Value::Text(expected.to_string()), TypeTag::Int).unwrap(),
                Value::Int(expected as isize)
            );
        }
    }
}
