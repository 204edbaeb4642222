//! Constant tensors embedded in graph descriptions, and their types.
use crate::datum::DatumType;
use crate::dim::Dim;
use crate::literal::Literal;
use crate::shape::TensorShape;
use std::fmt;

/// Type of a tensor slot: an optional element type and a shape.
///
/// Some graph descriptions have no notion of element type at all; their
/// types carry only a shape and render as the bare bracketed shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TensorType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DatumType>,
    pub shape: TensorShape,
}

impl TensorType {
    pub fn new(data_type: DatumType, shape: TensorShape) -> TensorType {
        TensorType { data_type: Some(data_type), shape }
    }

    pub fn shape_only(shape: TensorShape) -> TensorType {
        TensorType { data_type: None, shape }
    }
}

impl fmt::Display for TensorType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if let Some(dt) = &self.data_type {
            write!(fmt, "{dt}")?;
        }
        write!(fmt, "{}", self.shape)
    }
}

/// Byte order marker for tensors whose payload came as a flat sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    LittleEndian,
}

impl fmt::Display for Encoding {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Encoding::LittleEndian => write!(fmt, "<"),
        }
    }
}

impl serde::Serialize for Encoding {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A constant tensor (typically weights) and its raw payload.
///
/// The payload is kept as it was written, flat or nested; its numerical
/// consistency with the type is not checked.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Tensor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TensorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    pub values: Literal,
}

impl Tensor {
    /// A float32 tensor of rank one over a flat sequence.
    pub fn from_flat(name: impl Into<String>, values: Vec<Literal>) -> Tensor {
        let shape = TensorShape::from_dims([Dim::from(values.len())]);
        Tensor {
            name: name.into(),
            ty: TensorType::new(DatumType::F32, shape),
            encoding: Some(Encoding::LittleEndian),
            values: Literal::Array(values),
        }
    }

    /// Build a tensor from its JSON description.
    ///
    /// An array is a flat float32 payload. An object reads `shape`
    /// (default: empty), `dtype` (default: float32) and its payload from
    /// `values`, else `data` (default: empty). Anything else is not a
    /// tensor.
    pub fn from_json(name: impl Into<String>, v: &serde_json::Value) -> Option<Tensor> {
        use serde_json::Value;
        match v {
            Value::Array(items) => {
                Some(Tensor::from_flat(name, items.iter().map(Literal::from).collect()))
            }
            Value::Object(map) => {
                let shape = map.get("shape").and_then(TensorShape::from_json).unwrap_or_default();
                let data_type = map
                    .get("dtype")
                    .and_then(|dt| dt.as_str())
                    .filter(|dt| !dt.is_empty())
                    .map(DatumType::from)
                    .unwrap_or_default();
                let values = ["values", "data"]
                    .iter()
                    .filter_map(|k| map.get(*k))
                    .find(|v| !v.is_null())
                    .map(Literal::from)
                    .unwrap_or_else(|| Literal::Array(vec![]));
                Some(Tensor {
                    name: name.into(),
                    ty: TensorType::new(data_type, shape),
                    encoding: None,
                    values,
                })
            }
            _ => None,
        }
    }
}
