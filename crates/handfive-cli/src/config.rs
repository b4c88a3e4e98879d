//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use handfive_builder::BuilderConfig;
use handfive_maps::MapsConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "handfive.toml";

/// CLI configuration.
///
/// Relative paths are resolved against the directory of the configuration
/// file, or the working directory when no file is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output directory of the CLDF dataset
    #[serde(default = "default_cldf_dir")]
    pub cldf_dir: PathBuf,

    /// Table-builder inputs and region settings
    #[serde(default)]
    pub builder: BuilderConfig,

    /// Map tool and map output
    #[serde(default)]
    pub maps: MapsConfig,
}

fn default_cldf_dir() -> PathBuf {
    PathBuf::from("cldf")
}

impl Config {
    /// Load configuration from `path`, or from `handfive.toml` if present.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG))
            }
            None => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        let mut config: Config = toml::from_str(&contents)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.builder
            .validate()
            .map_err(|e| CliError::Config(format!("[builder] {}", e)))?;
        self.maps
            .validate()
            .map_err(|e| CliError::Config(format!("[maps] {}", e)))?;
        Ok(())
    }

    /// Resolve relative paths against a base directory.
    pub fn rebase(&mut self, base: &Path) {
        if self.cldf_dir.is_relative() {
            self.cldf_dir = base.join(&self.cldf_dir);
        }
        self.builder.rebase(base);
        self.maps.rebase(base);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cldf_dir: default_cldf_dir(),
            builder: BuilderConfig::default(),
            maps: MapsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cldf_dir, PathBuf::from("cldf"));
        assert_eq!(config.maps.map_dir, PathBuf::from("maps"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_rebases_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handfive.toml");
        fs::write(
            &path,
            r#"
cldf_dir = "out/cldf"

[builder]
raw_dir = "sheets"
region_tolerance = 0.5

[maps]
map_dir = "/srv/maps"
base_url = "https://example.org/maps"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.cldf_dir, dir.path().join("out/cldf"));
        assert_eq!(config.builder.raw_dir, dir.path().join("sheets"));
        assert_eq!(config.builder.glottolog, dir.path().join("etc/languoid.csv"));
        assert_eq!(config.builder.region_tolerance, 0.5);
        assert_eq!(config.maps.map_dir, PathBuf::from("/srv/maps"));
        assert_eq!(config.maps.command, vec!["cldfbench", "cldfviz.map"]);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/handfive.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_invalid_section_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handfive.toml");
        fs::write(&path, "[maps]\ncommand = []\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("[maps]"));
    }

    #[test]
    fn test_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("handfive.toml");
        fs::write(&path, "cldf_dir = [").unwrap();
        assert!(matches!(Config::from_file(&path), Err(CliError::Toml(_))));
    }
}
