use crate::TVec;
use crate::dim::Dim;
use itertools::Itertools;
use std::fmt;

/// Ordered dimensions of a tensor.
///
/// Renders as `[d0,d1,...]`, or as the empty string when no dimension is
/// known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TensorShape {
    dims: TVec<Dim>,
}

impl TensorShape {
    pub fn from_dims(dims: impl IntoIterator<Item = Dim>) -> TensorShape {
        TensorShape { dims: dims.into_iter().collect() }
    }

    /// Interpret a declared `shape` field.
    ///
    /// Accepts an array of dimensions, a single integer (rank one), or a
    /// string such as `"[1,3,224,224]"` or `"1x3x224x224"`. Returns `None`
    /// when the value does not describe a shape at all.
    pub fn from_json(v: &serde_json::Value) -> Option<TensorShape> {
        use serde_json::Value;
        match v {
            Value::Array(items) => Some(TensorShape::from_dims(
                items.iter().map(|d| Dim::from_json(d).unwrap_or(Dim::Unknown)),
            )),
            Value::Number(_) => Dim::from_json(v).map(|d| TensorShape::from_dims([d])),
            Value::String(s) => Some(TensorShape::parse(s)),
            _ => None,
        }
    }

    /// Parse a textual shape. Commas separate dimensions; without commas,
    /// `x` does, as long as every piece is numeric (so `"max_len"` stays a
    /// single symbol).
    pub fn parse(s: &str) -> TensorShape {
        let s = s.trim().trim_start_matches(['[', '(']).trim_end_matches([']', ')']).trim();
        if s.is_empty() {
            return TensorShape::default();
        }
        if s.contains(',') {
            return TensorShape::from_dims(s.split(',').map(Dim::parse));
        }
        let pieces: Vec<&str> = s.split('x').map(|p| p.trim()).collect();
        if pieces.len() > 1 && pieces.iter().all(|p| *p == "?" || p.parse::<i64>().is_ok()) {
            TensorShape::from_dims(pieces.into_iter().map(Dim::parse))
        } else {
            TensorShape::from_dims([Dim::parse(s)])
        }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[Dim] {
        &self.dims
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }
}

impl From<TVec<Dim>> for TensorShape {
    fn from(dims: TVec<Dim>) -> TensorShape {
        TensorShape { dims }
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.dims.is_empty() {
            Ok(())
        } else {
            write!(fmt, "[{}]", self.dims.iter().join(","))
        }
    }
}

impl serde::Serialize for TensorShape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.dims.len()))?;
        for d in &self.dims {
            seq.serialize_element(d)?;
        }
        seq.end()
    }
}
