use crate::workflow::config::{LayoutConfig, RegionSpec};
use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic region layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub regions: usize,
    pub max_extent: f32,
    pub strength: f32,
    pub seed: u64,
    pub exclude: bool,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            regions: 3,
            max_extent: 0.5,
            strength: 1.0,
            seed: 0,
            exclude: false,
            description: None,
            scenario: None,
        }
    }
}

impl GeneratorConfig {
    fn normalized_regions(&self) -> usize {
        self.regions.max(1)
    }

    fn normalized_extent(&self) -> f32 {
        self.max_extent.clamp(0.1, 1.0)
    }
}

fn build_region(rng: &mut StdRng, extent: f32, strength: f32) -> RegionSpec {
    let width = rng.gen_range(0.05..extent);
    let height = rng.gen_range(0.05..extent);
    let x = rng.gen_range(0.0..(1.0 - width));
    let y = rng.gen_range(0.0..(1.0 - height));
    RegionSpec {
        x,
        y,
        width,
        height,
        strength,
    }
}

pub fn build_layout_from_config(config: &GeneratorConfig) -> anyhow::Result<LayoutConfig> {
    ensure!(
        config.normalized_regions() <= 64,
        "generator supports at most 64 regions"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let extent = config.normalized_extent();
    let strength = config.strength.clamp(0.0, 1.0);

    let regions = (0..config.normalized_regions())
        .map(|_| build_region(&mut rng, extent, strength))
        .collect();
    let exclude = config
        .exclude
        .then(|| build_region(&mut rng, extent, 1.0));

    Ok(LayoutConfig { regions, exclude })
}

pub fn build_layout(regions: usize, seed: u64) -> anyhow::Result<LayoutConfig> {
    let config = GeneratorConfig {
        regions,
        seed,
        ..Default::default()
    };
    build_layout_from_config(&config)
}
