use crate::prelude::Mask;

pub struct StatsHelper;

impl StatsHelper {
    /// Mean weight across the canvas; 0.0 for an empty mask.
    pub fn coverage(mask: &Mask) -> f32 {
        if mask.is_empty() {
            return 0.0;
        }
        mask.sum() / mask.len() as f32
    }

    /// Largest weight anywhere on the canvas; 0.0 for an empty mask.
    pub fn peak(mask: &Mask) -> f32 {
        mask.iter().fold(0.0f32, |peak, &value| peak.max(value))
    }
}
