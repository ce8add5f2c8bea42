use crate::math::{ResizeHelper, StatsHelper};
use crate::node_interface::schema::{InputSpec, NodeSignature, OutputKind};
use crate::node_interface::value::{check_arity, NodeValue};
use crate::prelude::{Mask, MaskNode, NodeResult};
use crate::telemetry::LogManager;

/// Renormalizes two overlapping masks into a partition of unity.
///
/// Wherever the combined weight exceeds 1.0 both masks are divided by it;
/// wherever it does not, both masks pass through unchanged.
pub struct CleanOverlapMasks {
    logger: LogManager,
}

impl CleanOverlapMasks {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    pub fn clean(mask_a: Mask, mask_b: Mask) -> NodeResult<(Mask, Mask)> {
        let (mask_a, mask_b) = ResizeHelper::size_match(mask_a, mask_b)?;
        let floored_sum = (&mask_a + &mask_b).mapv_into(|v| v.max(1.0));
        Ok((mask_a / &floored_sum, mask_b / &floored_sum))
    }
}

impl MaskNode for CleanOverlapMasks {
    fn signature(&self) -> NodeSignature {
        NodeSignature::new(
            "CleanOverlapMasks",
            vec![InputSpec::mask("mask_a"), InputSpec::mask("mask_b")],
            vec![OutputKind::Mask, OutputKind::Mask],
        )
    }

    fn execute(&self, inputs: &[NodeValue]) -> NodeResult<Vec<NodeValue>> {
        check_arity("CleanOverlapMasks", inputs, 2)?;
        let mask_a = inputs[0].as_mask()?.clone();
        let mask_b = inputs[1].as_mask()?.clone();

        let (mask_a, mask_b) = Self::clean(mask_a, mask_b)?;
        self.logger.record_invocation(
            "CleanOverlapMasks",
            &format!(
                "coverage {:.4} / {:.4}",
                StatsHelper::coverage(&mask_a),
                StatsHelper::coverage(&mask_b)
            ),
        );
        Ok(vec![NodeValue::Mask(mask_a), NodeValue::Mask(mask_b)])
    }
}

/// Normalizes one mask against an already-merged total.
///
/// Divides the mask by the merged weight (floored at 1.0) without needing the
/// other constituent masks directly.
pub struct CleanOverlapMasksExceptSelf {
    logger: LogManager,
}

impl CleanOverlapMasksExceptSelf {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    pub fn clean(mask_self: Mask, mask_merged: Mask) -> NodeResult<Mask> {
        let (mask_self, mask_merged) = ResizeHelper::size_match(mask_self, mask_merged)?;
        let floored_sum = mask_merged.mapv_into(|v| v.max(1.0));
        Ok(mask_self / &floored_sum)
    }
}

impl MaskNode for CleanOverlapMasksExceptSelf {
    fn signature(&self) -> NodeSignature {
        NodeSignature::new(
            "CleanOverlapMasksExceptSelf",
            vec![InputSpec::mask("mask_self"), InputSpec::mask("mask_merged")],
            vec![OutputKind::Mask],
        )
    }

    fn execute(&self, inputs: &[NodeValue]) -> NodeResult<Vec<NodeValue>> {
        check_arity("CleanOverlapMasksExceptSelf", inputs, 2)?;
        let mask_self = inputs[0].as_mask()?.clone();
        let mask_merged = inputs[1].as_mask()?.clone();

        let cleaned = Self::clean(mask_self, mask_merged)?;
        self.logger.record_invocation(
            "CleanOverlapMasksExceptSelf",
            &format!("coverage {:.4}", StatsHelper::coverage(&cleaned)),
        );
        Ok(vec![NodeValue::Mask(cleaned)])
    }
}
