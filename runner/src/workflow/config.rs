use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One rectangular region in canvas-percentage coordinates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegionSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_strength")]
    pub strength: f32,
}

fn default_strength() -> f32 {
    1.0
}

/// Region layout driven through the node set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub regions: Vec<RegionSpec>,
    #[serde(default)]
    pub exclude: Option<RegionSpec>,
}

impl LayoutConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading layout config {}", path_ref.display()))?;
        let config: LayoutConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing layout config {}", path_ref.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"regions:\n  - x: 0.0\n    y: 0.25\n    width: 0.5\n    height: 0.5\n    strength: 0.75\nexclude:\n  x: 0.4\n  y: 0.4\n  width: 0.2\n  height: 0.2\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let config = LayoutConfig::load(&path).unwrap();
        assert_eq!(config.regions.len(), 1);
        assert_eq!(config.regions[0].strength, 0.75);
        assert!(config.exclude.is_some());
    }

    #[test]
    fn region_strength_defaults_to_full() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"regions:\n  - x: 0.0\n    y: 0.0\n    width: 1.0\n    height: 1.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let config = LayoutConfig::load(&path).unwrap();
        assert_eq!(config.regions[0].strength, 1.0);
        assert!(config.exclude.is_none());
    }
}
