use crate::math::{ResizeHelper, StatsHelper};
use crate::node_interface::schema::{InputSpec, NodeSignature, OutputKind};
use crate::node_interface::value::{check_arity, NodeValue};
use crate::prelude::{Mask, MaskNode, NodeResult};
use crate::telemetry::LogManager;

/// Removes the influence of one region from another.
///
/// Subtracts the exclude mask from the main mask and clamps the result back
/// into `[0, 1]`.
pub struct ExcludeFromMask {
    logger: LogManager,
}

impl ExcludeFromMask {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    pub fn exclude(main_mask: Mask, exclude_mask: Mask) -> NodeResult<Mask> {
        let (main_mask, exclude_mask) = ResizeHelper::size_match(main_mask, exclude_mask)?;
        Ok((main_mask - exclude_mask).mapv_into(|v| v.clamp(0.0, 1.0)))
    }
}

impl MaskNode for ExcludeFromMask {
    fn signature(&self) -> NodeSignature {
        NodeSignature::new(
            "ExcludeFromMask",
            vec![
                InputSpec::mask("main_mask"),
                InputSpec::mask("exclude_mask"),
            ],
            vec![OutputKind::Mask],
        )
    }

    fn execute(&self, inputs: &[NodeValue]) -> NodeResult<Vec<NodeValue>> {
        check_arity("ExcludeFromMask", inputs, 2)?;
        let main_mask = inputs[0].as_mask()?.clone();
        let exclude_mask = inputs[1].as_mask()?.clone();

        let result = Self::exclude(main_mask, exclude_mask)?;
        self.logger.record_invocation(
            "ExcludeFromMask",
            &format!("coverage {:.4}", StatsHelper::coverage(&result)),
        );
        Ok(vec![NodeValue::Mask(result)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_subtracts_elementwise() {
        let main_mask = Mask::from_elem((2, 2), 0.75);
        let exclude_mask = Mask::from_elem((2, 2), 0.25);
        let result = ExcludeFromMask::exclude(main_mask, exclude_mask).unwrap();
        assert!(result.iter().all(|&v| v == 0.5));
    }

    #[test]
    fn exclusion_floors_at_zero() {
        let main_mask = Mask::from_elem((2, 2), 0.25);
        let exclude_mask = Mask::from_elem((2, 2), 0.75);
        let result = ExcludeFromMask::exclude(main_mask, exclude_mask).unwrap();
        assert!(result.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn exclusion_caps_at_one() {
        // An over-merged main mask can carry weight above 1.0 going in.
        let main_mask = Mask::from_elem((2, 2), 2.0);
        let exclude_mask = Mask::zeros((2, 2));
        let result = ExcludeFromMask::exclude(main_mask, exclude_mask).unwrap();
        assert!(result.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn exclusion_reconciles_shapes_first() {
        let main_mask = Mask::from_elem((4, 4), 1.0);
        let exclude_mask = Mask::from_elem((2, 2), 1.0);
        let result = ExcludeFromMask::exclude(main_mask, exclude_mask).unwrap();
        assert_eq!(result.dim(), (4, 4));
        assert!(result.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn execute_rejects_scalar_inputs() {
        let node = ExcludeFromMask::new();
        let result = node.execute(&[
            NodeValue::Float(1.0),
            NodeValue::Mask(Mask::zeros((2, 2))),
        ]);
        assert!(result.is_err());
    }
}
