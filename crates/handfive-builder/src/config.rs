//! Configuration for the table-builder

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input locations and region settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Directory holding the raw annotation sheets
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,

    /// Glottolog `languoid.csv` export
    #[serde(default = "default_glottolog")]
    pub glottolog: PathBuf,

    /// GeoJSON file with the region boundary polygons
    #[serde(default = "default_region_boundary")]
    pub region_boundary: PathBuf,

    /// ISO 3166 codes of the countries that make a language Melanesian
    #[serde(default = "default_countries")]
    pub region_countries: Vec<String>,

    /// Distance in degrees within which a point counts as inside the boundary
    #[serde(default = "default_tolerance")]
    pub region_tolerance: f64,

    /// Title of the dataset
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("raw")
}

fn default_glottolog() -> PathBuf {
    PathBuf::from("etc/languoid.csv")
}

fn default_region_boundary() -> PathBuf {
    PathBuf::from("etc/melanesia.geojson")
}

fn default_countries() -> Vec<String> {
    ["PG", "SB", "VU", "NC", "FJ"].iter().map(|c| c.to_string()).collect()
}

fn default_tolerance() -> f64 {
    0.25
}

fn default_title() -> String {
    "Colexification of ‘hand’ and ‘five’ in Austronesian languages".to_string()
}

impl BuilderConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.region_countries.is_empty() {
            return Err("region_countries must not be empty".to_string());
        }
        if self.region_tolerance.is_nan() || self.region_tolerance < 0.0 {
            return Err("region_tolerance must be a non-negative number".to_string());
        }
        Ok(())
    }

    /// Resolve relative input paths against a base directory
    pub fn rebase(&mut self, base: &std::path::Path) {
        for path in [&mut self.raw_dir, &mut self.glottolog, &mut self.region_boundary] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            glottolog: default_glottolog(),
            region_boundary: default_region_boundary(),
            region_countries: default_countries(),
            region_tolerance: default_tolerance(),
            title: default_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BuilderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_tolerance() {
        let mut config = BuilderConfig::default();
        config.region_tolerance = -1.0;
        assert!(config.validate().is_err());
        config.region_tolerance = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BuilderConfig = toml::from_str("region_tolerance = 0.5").unwrap();
        assert_eq!(config.region_tolerance, 0.5);
        assert_eq!(config.raw_dir, PathBuf::from("raw"));
        assert_eq!(config.region_countries.len(), 5);
    }

    #[test]
    fn test_rebase_keeps_absolute_paths() {
        let mut config = BuilderConfig::default();
        config.glottolog = PathBuf::from("/data/languoid.csv");
        config.rebase(std::path::Path::new("/repo"));
        assert_eq!(config.raw_dir, PathBuf::from("/repo/raw"));
        assert_eq!(config.glottolog, PathBuf::from("/data/languoid.csv"));
    }
}
