use crate::workflow::config::{LayoutConfig, RegionSpec};
use anyhow::{bail, Context};
use maskcore::math::StatsHelper;
use maskcore::node_interface::{NodeRegistry, NodeSignature, NodeValue};
use maskcore::prelude::Mask;
use std::sync::Arc;

pub struct WorkflowResult {
    pub region_coverage: Vec<f32>,
    pub merged_peak: f32,
    pub canvas: (usize, usize),
    pub notes: Vec<String>,
}

/// Drives a region layout through the node set the way the host graph does:
/// one constructor call per region, an over-merge fold, a cleaning pass per
/// region against the merged total, and an optional exclusion pass.
#[derive(Clone)]
pub struct Runner {
    registry: Arc<NodeRegistry>,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(NodeRegistry::with_builtin_nodes()),
        }
    }

    /// Declarations for the node set, as reported to host-side tooling.
    pub fn signatures(&self) -> Vec<NodeSignature> {
        self.registry.signatures()
    }

    fn invoke_single(&self, name: &str, inputs: Vec<NodeValue>) -> anyhow::Result<Mask> {
        let mut outputs = self
            .registry
            .invoke(name, &inputs)
            .with_context(|| format!("invoking {}", name))?;
        match outputs.pop() {
            Some(value) if outputs.is_empty() => Ok(value.into_mask()?),
            _ => bail!("{} returned an unexpected output tuple", name),
        }
    }

    fn region_mask(&self, region: &RegionSpec) -> anyhow::Result<Mask> {
        self.invoke_single(
            "MaskFromPercent",
            vec![
                NodeValue::Float(region.x),
                NodeValue::Float(region.y),
                NodeValue::Float(region.width),
                NodeValue::Float(region.height),
                NodeValue::Float(region.strength),
            ],
        )
    }

    pub fn execute(&self, layout: &LayoutConfig) -> anyhow::Result<WorkflowResult> {
        if layout.regions.is_empty() {
            bail!("layout contains no regions");
        }

        let mut region_masks = Vec::with_capacity(layout.regions.len());
        for region in &layout.regions {
            region_masks.push(self.region_mask(region).context("building region mask")?);
        }

        let mut merged = region_masks[0].clone();
        for mask in &region_masks[1..] {
            merged = self
                .invoke_single(
                    "OverMergeMasks",
                    vec![NodeValue::Mask(merged), NodeValue::Mask(mask.clone())],
                )
                .context("merging region masks")?;
        }

        let mut cleaned = Vec::with_capacity(region_masks.len());
        for mask in region_masks {
            cleaned.push(
                self.invoke_single(
                    "CleanOverlapMasksExceptSelf",
                    vec![NodeValue::Mask(mask), NodeValue::Mask(merged.clone())],
                )
                .context("cleaning region mask")?,
            );
        }

        if let Some(exclude) = &layout.exclude {
            let exclude_mask = self.region_mask(exclude).context("building exclude mask")?;
            for mask in &mut cleaned {
                *mask = self
                    .invoke_single(
                        "ExcludeFromMask",
                        vec![
                            NodeValue::Mask(mask.clone()),
                            NodeValue::Mask(exclude_mask.clone()),
                        ],
                    )
                    .context("applying exclude mask")?;
            }
        }

        let region_coverage: Vec<f32> = cleaned.iter().map(StatsHelper::coverage).collect();
        let merged_peak = StatsHelper::peak(&merged);
        let canvas = merged.dim();
        let notes = vec![
            format!("merged peak {:.4}", merged_peak),
            format!("{} regions cleaned", cleaned.len()),
        ];
        log::info!(
            "workflow complete: {} regions, merged peak {:.4}",
            cleaned.len(),
            merged_peak
        );

        Ok(WorkflowResult {
            region_coverage,
            merged_peak,
            canvas,
            notes,
        })
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: f32, y: f32, width: f32, height: f32) -> RegionSpec {
        RegionSpec {
            x,
            y,
            width,
            height,
            strength: 1.0,
        }
    }

    #[test]
    fn runner_executes_a_two_region_layout() {
        let layout = LayoutConfig {
            regions: vec![region(0.0, 0.0, 0.5, 1.0), region(0.25, 0.0, 0.5, 1.0)],
            exclude: None,
        };
        let result = Runner::new().execute(&layout).unwrap();

        assert_eq!(result.canvas, (256, 256));
        assert_eq!(result.region_coverage.len(), 2);
        // The two half-width bands overlap for a quarter of the canvas.
        assert_eq!(result.merged_peak, 2.0);
        // Cleaning splits the overlap evenly, so each region keeps
        // three eighths of the canvas in total weight.
        assert_eq!(result.region_coverage[0], 0.375);
        assert_eq!(result.region_coverage[1], 0.375);
    }

    #[test]
    fn disjoint_regions_survive_cleaning_unchanged() {
        let layout = LayoutConfig {
            regions: vec![region(0.0, 0.0, 0.25, 1.0), region(0.5, 0.0, 0.25, 1.0)],
            exclude: None,
        };
        let result = Runner::new().execute(&layout).unwrap();
        assert_eq!(result.merged_peak, 1.0);
        assert_eq!(result.region_coverage, vec![0.25, 0.25]);
    }

    #[test]
    fn exclusion_zeroes_the_excluded_band() {
        let layout = LayoutConfig {
            regions: vec![region(0.0, 0.0, 0.5, 1.0)],
            exclude: Some(region(0.0, 0.0, 0.25, 1.0)),
        };
        let result = Runner::new().execute(&layout).unwrap();
        assert_eq!(result.region_coverage, vec![0.25]);
    }

    #[test]
    fn signatures_serialize_for_the_host() {
        let signatures = Runner::new().signatures();
        assert_eq!(signatures.len(), 5);
        let encoded = serde_json::to_string(&signatures).unwrap();
        assert!(encoded.contains("MaskFromPercent"));
        assert!(encoded.contains("strength"));
    }

    #[test]
    fn empty_layouts_are_rejected() {
        let layout = LayoutConfig {
            regions: Vec::new(),
            exclude: None,
        };
        assert!(Runner::new().execute(&layout).is_err());
    }
}
