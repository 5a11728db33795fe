use thiserror::Error;

use crate::complex::{Complex128, Complex64};

/// A flag value.
///
/// The variant of a flag's default value is its type: parsed text is converted into that same variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text; never converted.
    Text(String),
    /// A boolean.
    /// Booleans are not converted from text, the raw text is kept as [`Value::Text`].
    Bool(bool),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// The plain unsigned integer, limited to the 32 bit range when parsed.
    Uint(usize),
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// The plain signed integer, limited to the 32 bit range when parsed.
    Int(isize),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// A complex number with `f32` parts.
    C64(Complex64),
    /// A complex number with `f64` parts.
    C128(Complex128),
}

/// The type of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Text.
    Text,
    /// `bool`
    Bool,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Uint,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Int,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// [`Complex64`]
    C64,
    /// [`Complex128`]
    C128,
}

impl TypeTag {
    /// The type name shown in reports.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Text => "string",
            TypeTag::Bool => "bool",
            TypeTag::U8 => "u8",
            TypeTag::U16 => "u16",
            TypeTag::U32 => "u32",
            TypeTag::U64 => "u64",
            TypeTag::Uint => "usize",
            TypeTag::I8 => "i8",
            TypeTag::I16 => "i16",
            TypeTag::I32 => "i32",
            TypeTag::I64 => "i64",
            TypeTag::Int => "isize",
            TypeTag::F32 => "f32",
            TypeTag::F64 => "f64",
            TypeTag::C64 => "complex64",
            TypeTag::C128 => "complex128",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Value {
    /// The type of this value.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Text(_) => TypeTag::Text,
            Value::Bool(_) => TypeTag::Bool,
            Value::U8(_) => TypeTag::U8,
            Value::U16(_) => TypeTag::U16,
            Value::U32(_) => TypeTag::U32,
            Value::U64(_) => TypeTag::U64,
            Value::Uint(_) => TypeTag::Uint,
            Value::I8(_) => TypeTag::I8,
            Value::I16(_) => TypeTag::I16,
            Value::I32(_) => TypeTag::I32,
            Value::I64(_) => TypeTag::I64,
            Value::Int(_) => TypeTag::Int,
            Value::F32(_) => TypeTag::F32,
            Value::F64(_) => TypeTag::F64,
            Value::C64(_) => TypeTag::C64,
            Value::C128(_) => TypeTag::C128,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::C64(v) => write!(f, "{v}"),
            Value::C128(v) => write!(f, "{v}"),
        }
    }
}

/// The value is a different variant than the one requested.
#[derive(Debug, Error, PartialEq)]
#[error("cannot read {found} as {expected}.")]
pub struct WrongType {
    /// The requested type.
    pub expected: TypeTag,
    /// The type actually held.
    pub found: TypeTag,
}

macro_rules! value_conversions {
    ($($variant:ident => $t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(value)
                }
            }

            impl TryFrom<Value> for $t {
                type Error = WrongType;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(WrongType {
                            expected: TypeTag::$variant,
                            found: other.type_tag(),
                        }),
                    }
                }
            }
        )*
    };
}

value_conversions! {
    Text => String,
    Bool => bool,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    Uint => usize,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    Int => isize,
    F32 => f32,
    F64 => f64,
    C64 => Complex64,
    C128 => Complex128,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}
