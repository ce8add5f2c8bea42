use crate::math::{ResizeHelper, StatsHelper};
use crate::node_interface::schema::{InputSpec, NodeSignature, OutputKind};
use crate::node_interface::value::{check_arity, NodeValue};
use crate::prelude::{Mask, MaskNode, NodeResult};
use crate::telemetry::LogManager;

/// Sums two masks after shape reconciliation.
///
/// Overlap weight above 1.0 is intentional; a cleaning pass divides it back
/// out later.
pub struct OverMergeMasks {
    logger: LogManager,
}

impl OverMergeMasks {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    pub fn merge(mask_a: Mask, mask_b: Mask) -> NodeResult<Mask> {
        let (mask_a, mask_b) = ResizeHelper::size_match(mask_a, mask_b)?;
        Ok(mask_a + mask_b)
    }
}

impl MaskNode for OverMergeMasks {
    fn signature(&self) -> NodeSignature {
        NodeSignature::new(
            "OverMergeMasks",
            vec![InputSpec::mask("mask_a"), InputSpec::mask("mask_b")],
            vec![OutputKind::Mask],
        )
    }

    fn execute(&self, inputs: &[NodeValue]) -> NodeResult<Vec<NodeValue>> {
        check_arity("OverMergeMasks", inputs, 2)?;
        let mask_a = inputs[0].as_mask()?.clone();
        let mask_b = inputs[1].as_mask()?.clone();
        self.logger.record(&format!(
            "overmerge {:?} + {:?}",
            mask_a.dim(),
            mask_b.dim()
        ));

        let merged = Self::merge(mask_a, mask_b)?;
        self.logger.record_invocation(
            "OverMergeMasks",
            &format!("peak {:.4}", StatsHelper::peak(&merged)),
        );
        Ok(vec![NodeValue::Mask(merged)])
    }
}
