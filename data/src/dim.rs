//! Tensor dimensions: concrete sizes or symbolic placeholders.
use std::fmt;

/// One dimension of a declared tensor shape.
///
/// Graph descriptions mix concrete sizes (`224`) with symbolic ones
/// (`"batch"`, `"N"`) and occasionally leave a slot undetermined (`null`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dim {
    Int(i64),
    Sym(String),
    Unknown,
}

impl Dim {
    /// Interpret one item of a JSON shape array.
    ///
    /// Integral numbers become `Int`, strings and other numbers become
    /// `Sym` (rendered as they appear), null becomes `Unknown`. Booleans,
    /// arrays and objects are not dimensions.
    pub fn from_json(v: &serde_json::Value) -> Option<Dim> {
        use serde_json::Value;
        match v {
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => Dim::Int(i),
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Dim::Int(f as i64),
                    _ => Dim::Sym(n.to_string()),
                },
            }),
            Value::String(s) => Some(Dim::parse(s)),
            Value::Null => Some(Dim::Unknown),
            _ => None,
        }
    }

    /// Parse a textual dimension: integers stay integers, `?` is unknown,
    /// anything else is a symbol.
    pub fn parse(s: &str) -> Dim {
        let s = s.trim();
        if s == "?" {
            Dim::Unknown
        } else if let Ok(i) = s.parse::<i64>() {
            Dim::Int(i)
        } else {
            Dim::Sym(s.to_string())
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dim::Int(i) => write!(fmt, "{i}"),
            Dim::Sym(s) => write!(fmt, "{s}"),
            Dim::Unknown => write!(fmt, "?"),
        }
    }
}

macro_rules! dim_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Dim {
            fn from(it: $t) -> Dim {
                Dim::Int(it as i64)
            }
        })*
    }
}

dim_from_int!(i32, i64, u32, usize);

impl From<&str> for Dim {
    fn from(it: &str) -> Dim {
        Dim::parse(it)
    }
}

impl From<String> for Dim {
    fn from(it: String) -> Dim {
        Dim::parse(&it)
    }
}

impl serde::Serialize for Dim {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dim::Int(i) => serializer.serialize_i64(*i),
            Dim::Sym(s) => serializer.serialize_str(s),
            Dim::Unknown => serializer.serialize_none(),
        }
    }
}
