use crate::node_interface::schema::NodeSignature;
use crate::node_interface::value::NodeValue;
use crate::nodes::{
    CleanOverlapMasks, CleanOverlapMasksExceptSelf, ExcludeFromMask, MaskFromPercent,
    OverMergeMasks,
};
use crate::prelude::{MaskNode, NodeError, NodeResult};
use crate::telemetry::MetricsRecorder;
use std::collections::BTreeMap;

/// Name-indexed set of nodes exposed to the host runtime.
///
/// The host resolves each graph node by name and calls `invoke` with the
/// positional inputs its declared signature describes.
pub struct NodeRegistry {
    nodes: BTreeMap<String, Box<dyn MaskNode + Send + Sync>>,
    metrics: MetricsRecorder,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Registry preloaded with the full builtin node set.
    pub fn with_builtin_nodes() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MaskFromPercent::new()));
        registry.register(Box::new(OverMergeMasks::new()));
        registry.register(Box::new(CleanOverlapMasks::new()));
        registry.register(Box::new(CleanOverlapMasksExceptSelf::new()));
        registry.register(Box::new(ExcludeFromMask::new()));
        registry
    }

    pub fn register(&mut self, node: Box<dyn MaskNode + Send + Sync>) {
        let name = node.signature().name;
        self.nodes.insert(name, node);
    }

    pub fn names(&self) -> Vec<&str> {
        self.nodes.keys().map(|name| name.as_str()).collect()
    }

    pub fn signature(&self, name: &str) -> Option<NodeSignature> {
        self.nodes.get(name).map(|node| node.signature())
    }

    /// Declarations for every registered node, in name order.
    pub fn signatures(&self) -> Vec<NodeSignature> {
        self.nodes.values().map(|node| node.signature()).collect()
    }

    /// Dispatches one node call and tracks it in the invocation counters.
    pub fn invoke(&self, name: &str, inputs: &[NodeValue]) -> NodeResult<Vec<NodeValue>> {
        let node = self
            .nodes
            .get(name)
            .ok_or_else(|| NodeError::InvalidInput(format!("unknown node {}", name)))?;

        match node.execute(inputs) {
            Ok(outputs) => {
                self.metrics.record_invocation(name);
                Ok(outputs)
            }
            Err(err) => {
                self.metrics.record_error(name);
                Err(err)
            }
        }
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::with_builtin_nodes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_lists_the_node_set() {
        let registry = NodeRegistry::with_builtin_nodes();
        assert_eq!(
            registry.names(),
            vec![
                "CleanOverlapMasks",
                "CleanOverlapMasksExceptSelf",
                "ExcludeFromMask",
                "MaskFromPercent",
                "OverMergeMasks",
            ]
        );
    }

    #[test]
    fn invoke_dispatches_and_counts() {
        let registry = NodeRegistry::with_builtin_nodes();
        let inputs = vec![
            NodeValue::Float(0.0),
            NodeValue::Float(0.0),
            NodeValue::Float(0.5),
            NodeValue::Float(0.5),
            NodeValue::Float(1.0),
        ];

        let outputs = registry.invoke("MaskFromPercent", &inputs).unwrap();
        assert_eq!(outputs.len(), 1);

        let snapshot = registry.metrics().snapshot();
        let entry = snapshot
            .iter()
            .find(|(name, _)| name == "MaskFromPercent")
            .unwrap();
        assert_eq!(entry.1.invocations, 1);
        assert_eq!(entry.1.errors, 0);
    }

    #[test]
    fn invoke_rejects_unknown_names() {
        let registry = NodeRegistry::with_builtin_nodes();
        assert!(registry.invoke("InvertMask", &[]).is_err());
    }

    #[test]
    fn invoke_counts_node_errors() {
        let registry = NodeRegistry::with_builtin_nodes();
        assert!(registry.invoke("OverMergeMasks", &[]).is_err());

        let snapshot = registry.metrics().snapshot();
        let entry = snapshot
            .iter()
            .find(|(name, _)| name == "OverMergeMasks")
            .unwrap();
        assert_eq!(entry.1.errors, 1);
    }

    #[test]
    fn signatures_declare_positional_inputs() {
        let registry = NodeRegistry::with_builtin_nodes();
        let signature = registry.signature("MaskFromPercent").unwrap();
        assert_eq!(signature.inputs.len(), 5);
        assert_eq!(signature.returns.len(), 1);
        assert!(registry.signature("InvertMask").is_none());
    }
}
