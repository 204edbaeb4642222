use itertools::Itertools;
use std::fmt;

/// A closed, typed rendition of a free-form JSON value.
///
/// Used wherever graph descriptions carry arbitrary payloads: node
/// attributes and raw tensor values. Object entries keep document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Literal {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Integers beyond `i64::MAX`.
    UInt(u64),
    Float(f64),
    String(String),
    Array(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

impl Literal {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Int(i) => Some(*i as f64),
            Literal::UInt(u) => Some(*u as f64),
            Literal::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number of scalar leaves under this literal. Arrays and objects are
    /// walked recursively.
    pub fn leaf_count(&self) -> usize {
        match self {
            Literal::Array(items) => items.iter().map(|it| it.leaf_count()).sum(),
            Literal::Object(entries) => entries.iter().map(|(_, it)| it.leaf_count()).sum(),
            _ => 1,
        }
    }
}

impl From<&serde_json::Value> for Literal {
    fn from(v: &serde_json::Value) -> Literal {
        use serde_json::Value;
        match v {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Literal::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Literal::UInt(u)
                } else {
                    Literal::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Literal::String(s.clone()),
            Value::Array(items) => Literal::Array(items.iter().map(Literal::from).collect()),
            Value::Object(map) => {
                Literal::Object(map.iter().map(|(k, v)| (k.clone(), Literal::from(v))).collect())
            }
        }
    }
}

impl From<serde_json::Value> for Literal {
    fn from(v: serde_json::Value) -> Literal {
        Literal::from(&v)
    }
}

impl From<i64> for Literal {
    fn from(i: i64) -> Literal {
        Literal::Int(i)
    }
}

impl From<f64> for Literal {
    fn from(f: f64) -> Literal {
        Literal::Float(f)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Literal {
        Literal::String(s.to_string())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Null => write!(fmt, "null"),
            Literal::Bool(b) => write!(fmt, "{b}"),
            Literal::Int(i) => write!(fmt, "{i}"),
            Literal::UInt(u) => write!(fmt, "{u}"),
            Literal::Float(f) => write!(fmt, "{f}"),
            Literal::String(s) => write!(fmt, "{s:?}"),
            Literal::Array(items) => write!(fmt, "[{}]", items.iter().join(",")),
            Literal::Object(entries) => {
                write!(fmt, "{{{}}}", entries.iter().map(|(k, v)| format!("{k:?}:{v}")).join(","))
            }
        }
    }
}

impl serde::Serialize for Literal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};
        match self {
            Literal::Null => serializer.serialize_unit(),
            Literal::Bool(b) => serializer.serialize_bool(*b),
            Literal::Int(i) => serializer.serialize_i64(*i),
            Literal::UInt(u) => serializer.serialize_u64(*u),
            Literal::Float(f) => serializer.serialize_f64(*f),
            Literal::String(s) => serializer.serialize_str(s),
            Literal::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for it in items {
                    seq.serialize_element(it)?;
                }
                seq.end()
            }
            Literal::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_keeps_structure_and_order() {
        let lit = Literal::from(json!({"units": 10, "act": "relu", "rate": 0.5, "pads": [1, 1]}));
        let Literal::Object(entries) = &lit else { panic!("expected an object, got {lit:?}") };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| &**k).collect();
        assert_eq!(keys, ["units", "act", "rate", "pads"]);
        assert_eq!(entries[0].1, Literal::Int(10));
        assert_eq!(entries[1].1.as_str(), Some("relu"));
        assert_eq!(entries[2].1.as_f64(), Some(0.5));
        assert_eq!(entries[3].1, Literal::Array(vec![Literal::Int(1), Literal::Int(1)]));
    }

    #[test]
    fn display_is_compact() {
        let lit = Literal::from(json!({"a": [1, 2.5, "x", null, true]}));
        assert_eq!(lit.to_string(), r#"{"a":[1,2.5,"x",null,true]}"#);
    }

    #[test]
    fn serializes_back_to_same_json() {
        let doc = json!({"k": [[1, 2], [3, 4]], "s": "v", "big": u64::MAX, "neg": i64::MIN});
        assert_eq!(serde_json::to_value(Literal::from(&doc)).unwrap(), doc);
    }

    #[test]
    fn large_integers_keep_precision() {
        let lit = Literal::from(json!(u64::MAX));
        assert_eq!(lit, Literal::UInt(u64::MAX));
        assert_eq!(lit.to_string(), "18446744073709551615");
        assert_eq!(serde_json::to_string(&lit).unwrap(), "18446744073709551615");
        assert_eq!(Literal::from(json!(i64::MAX)), Literal::Int(i64::MAX));
    }

    #[test]
    fn leaf_count_walks_nested_arrays() {
        assert_eq!(Literal::from(json!([[1, 2], [3, 4], [5, 6]])).leaf_count(), 6);
        assert_eq!(Literal::from(json!(3)).leaf_count(), 1);
    }
}
