use crate::workflow::runner::WorkflowResult;
use serde::{Deserialize, Serialize};

/// Summary of the latest workflow run, served to host-side tooling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummaryModel {
    pub region_count: usize,
    pub region_coverage: Vec<f32>,
    pub merged_peak: f32,
    pub canvas_height: usize,
    pub canvas_width: usize,
    pub notes: Vec<String>,
}

impl SummaryModel {
    pub fn from_result(result: &WorkflowResult) -> Self {
        Self {
            region_count: result.region_coverage.len(),
            region_coverage: result.region_coverage.clone(),
            merged_peak: result.merged_peak,
            canvas_height: result.canvas.0,
            canvas_width: result.canvas.1,
            notes: result.notes.clone(),
        }
    }
}
