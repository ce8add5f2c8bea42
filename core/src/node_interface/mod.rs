pub mod registry;
pub mod schema;
pub mod value;

pub use registry::NodeRegistry;
pub use schema::{FloatRange, InputKind, InputSpec, NodeSignature, OutputKind, NODE_CATEGORY};
pub use value::NodeValue;
