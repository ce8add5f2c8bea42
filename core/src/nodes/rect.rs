use crate::math::StatsHelper;
use crate::node_interface::schema::{InputSpec, NodeSignature, OutputKind};
use crate::node_interface::value::{check_arity, NodeValue};
use crate::prelude::{Mask, MaskNode, NodeError, NodeResult, CANVAS_SIZE};
use crate::telemetry::LogManager;
use ndarray::s;

/// Builds a rectangular mask from percentage coordinates on the fixed canvas.
pub struct MaskFromPercent {
    logger: LogManager,
}

impl MaskFromPercent {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    /// Zero canvas with rows `[y, y+height)` x columns `[x, x+width)` (as
    /// canvas fractions) set to `strength`.
    ///
    /// Fractional pixel boundaries truncate toward zero. A span running past
    /// the canvas edge is cut at it, and an inverted span writes nothing.
    pub fn build(x: f32, y: f32, width: f32, height: f32, strength: f32) -> NodeResult<Mask> {
        for (name, value) in [
            ("x", x),
            ("y", y),
            ("width", width),
            ("height", height),
            ("strength", strength),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(NodeError::InvalidInput(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        let scale = CANVAS_SIZE as f32;
        let row_start = ((y * scale) as usize).min(CANVAS_SIZE);
        let row_end = (((y + height) * scale) as usize).min(CANVAS_SIZE);
        let col_start = ((x * scale) as usize).min(CANVAS_SIZE);
        let col_end = (((x + width) * scale) as usize).min(CANVAS_SIZE);

        let mut mask = Mask::zeros((CANVAS_SIZE, CANVAS_SIZE));
        if row_start < row_end && col_start < col_end {
            mask.slice_mut(s![row_start..row_end, col_start..col_end])
                .fill(strength);
        }
        Ok(mask)
    }
}

impl MaskNode for MaskFromPercent {
    fn signature(&self) -> NodeSignature {
        NodeSignature::new(
            "MaskFromPercent",
            vec![
                InputSpec::float("x", 0.0, 0.0, 1.0),
                InputSpec::float("y", 0.0, 0.0, 1.0),
                InputSpec::float("width", 0.0, 0.0, 1.0),
                InputSpec::float("height", 0.0, 0.0, 1.0),
                InputSpec::float("strength", 1.0, 0.0, 1.0),
            ],
            vec![OutputKind::Mask],
        )
    }

    fn execute(&self, inputs: &[NodeValue]) -> NodeResult<Vec<NodeValue>> {
        check_arity("MaskFromPercent", inputs, 5)?;
        let x = inputs[0].as_float()?;
        let y = inputs[1].as_float()?;
        let width = inputs[2].as_float()?;
        let height = inputs[3].as_float()?;
        let strength = inputs[4].as_float()?;

        let mask = Self::build(x, y, width, height, strength)?;
        self.logger.record_invocation(
            "MaskFromPercent",
            &format!("coverage {:.4}", StatsHelper::coverage(&mask)),
        );
        Ok(vec![NodeValue::Mask(mask)])
    }
}
