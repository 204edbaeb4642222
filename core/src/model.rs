//! The canonical graph model every format normalizes into.
//!
//! Ownership is a plain tree: a `Model` owns its graphs, graphs own their
//! nodes, nodes own their arguments, and so on down to embedded tensors.
//! Everything is built once while a document is read and never mutated
//! afterwards.
use graphjson_data::prelude::*;
use serde::Serialize;
use std::fmt;

/// A normalized model: metadata and its graphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    /// Human readable format label, possibly with a version suffix.
    pub format: String,
    pub name: String,
    pub producer: String,
    pub description: String,
    #[serde(rename = "modules")]
    pub graphs: Vec<Graph>,
}

impl Model {
    pub fn new(format: impl Into<String>, graphs: Vec<Graph>) -> Model {
        Model {
            format: format.into(),
            name: String::new(),
            producer: String::new(),
            description: String::new(),
            graphs,
        }
    }

    /// The main graph. Formats build exactly one.
    pub fn graph(&self) -> Option<&Graph> {
        self.graphs.first()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Graph {
    pub name: String,
    pub inputs: Vec<Argument>,
    pub outputs: Vec<Argument>,
    pub nodes: Vec<Node>,
}

impl Graph {
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn input_by_name(&self, name: &str) -> Option<&Argument> {
        self.inputs.iter().find(|a| a.name == name)
    }
}

/// Type descriptor of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, new)]
pub struct Op {
    pub name: String,
}

impl fmt::Display for Op {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Unique within a graph by convention only.
    pub name: String,
    #[serde(rename = "type")]
    pub op: Op,
    pub inputs: Vec<Argument>,
    pub outputs: Vec<Argument>,
    pub attributes: Vec<Attribute>,
}

impl Node {
    pub fn new(name: impl Into<String>, op: impl Into<String>) -> Node {
        Node {
            name: name.into(),
            op: Op::new(op.into()),
            inputs: vec![],
            outputs: vec![],
            attributes: vec![],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn input(&self, name: &str) -> Option<&Argument> {
        self.inputs.iter().find(|a| a.name == name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:?} {}", self.name, self.op)
    }
}

/// A named port grouping one or more values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "value")]
    pub values: Vec<Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TensorType>,
    /// Auxiliary arguments such as weights are hidden by default.
    pub visible: bool,
}

impl Argument {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Argument {
        Argument { name: name.into(), values, ty: None, visible: true }
    }

    pub fn single(value: Value) -> Argument {
        Argument::new(value.name.clone(), vec![value])
    }

    pub fn hidden(self) -> Argument {
        Argument { visible: false, ..self }
    }
}

/// A named tensor slot, with its type when known and its constant content
/// when embedded in the document.
#[derive(Debug, Clone, PartialEq, Serialize, new)]
pub struct Value {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<TensorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Tensor>,
}

impl Value {
    pub fn untyped(name: impl Into<String>) -> Value {
        Value::new(name.into(), None, None)
    }

    pub fn typed(name: impl Into<String>, ty: Option<TensorType>) -> Value {
        Value::new(name.into(), ty, None)
    }

    pub fn constant(tensor: Tensor) -> Value {
        Value::new(tensor.name.clone(), Some(tensor.ty.clone()), Some(tensor))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match &self.ty {
            Some(ty) => write!(fmt, "{}: {}", self.name, ty),
            None => write!(fmt, "{}: ?", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, new)]
pub struct Attribute {
    pub name: String,
    pub value: Literal,
}
