use crate::node_interface::schema::NodeSignature;
use crate::node_interface::value::NodeValue;
use ndarray::Array2;

/// Per-pixel weight plane over an image canvas. Values are conventionally in
/// `[0, 1]`; an over-merged mask may exceed 1.0 until a cleaning pass runs.
pub type Mask = Array2<f32>;

/// Fixed canvas edge length used for percentage-to-pixel conversion.
pub const CANVAS_SIZE: usize = 256;

/// Common error type for node execution.
#[derive(thiserror::Error, Debug)]
pub enum NodeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

pub type NodeResult<T> = Result<T, NodeError>;

/// Trait describing a stateless graph node operating on masks and scalars.
///
/// `execute` takes positional inputs matching `signature().inputs` and
/// returns one value per entry of `signature().returns`.
pub trait MaskNode {
    fn signature(&self) -> NodeSignature;
    fn execute(&self, inputs: &[NodeValue]) -> NodeResult<Vec<NodeValue>>;
}
