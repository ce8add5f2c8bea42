use serde::{Deserialize, Serialize};

/// Category tag reported to the host for every node in this set.
pub const NODE_CATEGORY: &str = "masks";

/// Declared default/min/max metadata for a scalar input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

/// Kind tag for a declared node input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputKind {
    Float(FloatRange),
    Mask,
}

/// A single named slot in a node's declared input list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub name: String,
    pub kind: InputKind,
}

impl InputSpec {
    pub fn float(name: &str, default: f32, min: f32, max: f32) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::Float(FloatRange { default, min, max }),
        }
    }

    pub fn mask(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::Mask,
        }
    }
}

/// Kind tag for a declared node output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputKind {
    Mask,
}

/// Full input/output declaration a node reports to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSignature {
    pub name: String,
    pub category: String,
    pub inputs: Vec<InputSpec>,
    pub returns: Vec<OutputKind>,
}

impl NodeSignature {
    pub fn new(name: &str, inputs: Vec<InputSpec>, returns: Vec<OutputKind>) -> Self {
        Self {
            name: name.to_string(),
            category: NODE_CATEGORY.to_string(),
            inputs,
            returns,
        }
    }
}
