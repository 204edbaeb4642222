//! Element type tags carried by tensor types.
use std::fmt;

/// Element type of a tensor, as declared by a graph description.
///
/// Graph descriptions spell these tags freely (`float32`, `f32`, `FLOAT`...).
/// Spellings we know are folded onto one variant, anything else is kept
/// verbatim in `Other` so that no declared information is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DatumType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F16,
    #[default]
    F32,
    F64,
    String,
    Other(String),
}

impl DatumType {
    pub fn is_float(&self) -> bool {
        matches!(self, DatumType::F16 | DatumType::F32 | DatumType::F64)
    }

    pub fn is_integer(&self) -> bool {
        use DatumType::*;
        matches!(self, U8 | U16 | U32 | U64 | I8 | I16 | I32 | I64)
    }

    /// Canonical lower-case name, used for display.
    pub fn name(&self) -> &str {
        match self {
            DatumType::Bool => "bool",
            DatumType::U8 => "uint8",
            DatumType::U16 => "uint16",
            DatumType::U32 => "uint32",
            DatumType::U64 => "uint64",
            DatumType::I8 => "int8",
            DatumType::I16 => "int16",
            DatumType::I32 => "int32",
            DatumType::I64 => "int64",
            DatumType::F16 => "float16",
            DatumType::F32 => "float32",
            DatumType::F64 => "float64",
            DatumType::String => "string",
            DatumType::Other(s) => s,
        }
    }
}

impl std::str::FromStr for DatumType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = match &*s.to_ascii_lowercase() {
            "bool" | "boolean" => DatumType::Bool,
            "uint8" | "u8" => DatumType::U8,
            "uint16" | "u16" => DatumType::U16,
            "uint32" | "u32" => DatumType::U32,
            "uint64" | "u64" => DatumType::U64,
            "int8" | "i8" => DatumType::I8,
            "int16" | "i16" => DatumType::I16,
            "int32" | "i32" => DatumType::I32,
            "int64" | "i64" => DatumType::I64,
            "float16" | "f16" | "half" => DatumType::F16,
            "float32" | "f32" | "float" => DatumType::F32,
            "float64" | "f64" | "double" => DatumType::F64,
            "string" | "str" => DatumType::String,
            _ => DatumType::Other(s.to_string()),
        };
        Ok(dt)
    }
}

impl From<&str> for DatumType {
    fn from(s: &str) -> DatumType {
        match s.parse() {
            Ok(dt) => dt,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for DatumType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl serde::Serialize for DatumType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
