//! Configuration for the map-renderer

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Map tool and output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapsConfig {
    /// Command line of the map tool; request arguments are appended
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    /// Directory for the maps and their index
    #[serde(default = "default_map_dir")]
    pub map_dir: PathBuf,

    /// Public URL of the map directory, used for interactive-map links
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_command() -> Vec<String> {
    vec!["cldfbench".to_string(), "cldfviz.map".to_string()]
}

fn default_map_dir() -> PathBuf {
    PathBuf::from("maps")
}

impl MapsConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.command.first().is_none_or(|p| p.trim().is_empty()) {
            return Err("command must name a program".to_string());
        }
        if let Some(url) = &self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("base_url must be an http(s) URL, got {:?}", url));
            }
        }
        Ok(())
    }

    /// Resolve a relative map directory against a base directory
    pub fn rebase(&mut self, base: &Path) {
        if self.map_dir.is_relative() {
            self.map_dir = base.join(&self.map_dir);
        }
    }
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            map_dir: default_map_dir(),
            base_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MapsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.command, vec!["cldfbench", "cldfviz.map"]);
    }

    #[test]
    fn test_empty_command_is_invalid() {
        let config = MapsConfig {
            command: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_must_be_http() {
        let config: MapsConfig = toml::from_str("base_url = \"ftp://example.org\"").unwrap();
        assert!(config.validate().is_err());
        let config: MapsConfig =
            toml::from_str("base_url = \"https://cldf-datasets.github.io/barlowhandandfive/maps\"").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.map_dir, PathBuf::from("maps"));
    }
}
