//! Rendering every coded parameter and writing the index

use crate::config::MapsConfig;
use crate::error::{MapError, Result};
use crate::index::{self, map_link, Section, ShapeCounts};
use crate::tool::{MapFormat, MapRequest, MapTool};
use handfive_cldf::{Dataset, DatasetReader};
use handfive_domain::catalog::NUMERAL_SYSTEM;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the map index
pub const INDEX: &str = "README.md";

/// Maps written for one parameter
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMap {
    /// Parameter ID
    pub parameter: String,
    /// Static map
    pub svg: PathBuf,
    /// Interactive map
    pub html: PathBuf,
    /// Number of coded values on the map
    pub total: usize,
}

/// Result of a map run
#[derive(Debug, Clone, PartialEq)]
pub struct MapSummary {
    /// One entry per rendered parameter, in index order
    pub maps: Vec<RenderedMap>,
    /// Path of the index
    pub index: PathBuf,
}

/// Drives a [`MapTool`] over the coded parameters of a dataset
pub struct MapRenderer<T: MapTool> {
    tool: T,
    map_dir: PathBuf,
    base_url: Option<String>,
}

impl<T: MapTool> MapRenderer<T> {
    /// Create a renderer writing into `map_dir`
    pub fn new(tool: T, map_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            map_dir: map_dir.into(),
            base_url: None,
        }
    }

    /// Create a renderer from the configuration
    pub fn from_config(tool: T, config: &MapsConfig) -> Self {
        Self::new(tool, &config.map_dir).with_base_url(config.base_url.clone())
    }

    /// Link interactive maps under a public URL instead of relatively
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Render the maps of the dataset in `reader` and write the index
    pub fn render(&self, reader: &DatasetReader) -> Result<MapSummary> {
        let dataset = reader.read()?;
        let metadata = reader.metadata_path();
        fs::create_dir_all(&self.map_dir)?;

        let counts = dataset.value_counts();
        let mut maps = Vec::new();
        let mut sections = Vec::new();
        for parameter_id in map_order(&dataset) {
            let Some(parameter) = dataset.parameter(parameter_id) else {
                continue;
            };
            let codes: Vec<_> = dataset.codes_of(parameter_id).collect();
            let shapes = (parameter_id == NUMERAL_SYSTEM).then(|| shape_counts(&dataset));
            let colors: Vec<(String, String)> = codes
                .iter()
                .map(|c| (c.id.clone(), c.color.clone()))
                .collect();

            let request = |format: MapFormat| MapRequest {
                parameter: parameter_id.to_string(),
                colors: colors.clone(),
                shapes: shapes.is_some(),
                format,
                output: self.map_dir.join(format!("{}.{}", parameter_id, format)),
                metadata: metadata.clone(),
            };
            let svg = self.draw(&request(MapFormat::Svg))?;
            let html = self.draw(&request(MapFormat::Html))?;

            let mut replacements: Vec<(String, &str)> = codes
                .iter()
                .map(|c| (format!("__{}__", c.id), c.name.as_str()))
                .collect();
            if shapes.is_some() {
                replacements.push(("__yes__".to_string(), "yes"));
                replacements.push(("__no__".to_string(), "no"));
            }
            fill_placeholders(&html, &replacements)?;

            let section = Section {
                parameter,
                codes,
                image: file_name(&svg),
                link: map_link(self.base_url.as_deref(), &file_name(&html)),
                shapes,
            };
            let total = section.total(&counts);
            sections.push(section.render(&counts));
            info!(parameter = parameter_id, values = total, "Mapped parameter");
            maps.push(RenderedMap {
                parameter: parameter_id.to_string(),
                svg,
                html,
                total,
            });
        }

        let index_path = self.map_dir.join(INDEX);
        fs::write(&index_path, index::render(&sections))?;
        info!(maps = maps.len(), index = %index_path.display(), "Wrote map index");
        Ok(MapSummary {
            maps,
            index: index_path,
        })
    }

    fn draw(&self, request: &MapRequest) -> Result<PathBuf> {
        self.tool.render(request)?;
        if !request.output.is_file() {
            return Err(MapError::MissingOutput(request.output.clone()));
        }
        debug!(parameter = %request.parameter, format = %request.format, "Rendered map");
        Ok(request.output.clone())
    }
}

/// Parameters owning codes, in declaration order with the numeral systems last
fn map_order(dataset: &Dataset) -> Vec<&str> {
    let mut order: Vec<&str> = dataset
        .parameters
        .iter()
        .map(|p| p.id.as_str())
        .filter(|id| dataset.codes_of(id).next().is_some())
        .collect();
    if let Some(i) = order.iter().position(|id| *id == NUMERAL_SYSTEM) {
        let id = order.remove(i);
        order.push(id);
    }
    order
}

fn shape_counts(dataset: &Dataset) -> ShapeCounts {
    let melanesian = dataset.languages.iter().filter(|l| l.melanesian).count();
    ShapeCounts {
        melanesian,
        other: dataset.languages.len() - melanesian,
    }
}

fn fill_placeholders(path: &Path, replacements: &[(String, &str)]) -> Result<()> {
    let mut html = fs::read_to_string(path)?;
    for (placeholder, name) in replacements {
        html = html.replace(placeholder.as_str(), name);
    }
    fs::write(path, html)?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use handfive_domain::{Code, Language, Parameter};

    fn parameter(id: &str) -> Parameter {
        Parameter {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
        }
    }

    fn code(parameter_id: &str, name: &str) -> Code {
        Code {
            id: format!("{}-{}", parameter_id, name),
            parameter_id: parameter_id.to_string(),
            name: name.to_string(),
            description: String::new(),
            color: "red".to_string(),
        }
    }

    #[test]
    fn test_map_order_puts_numeral_systems_last() {
        let dataset = Dataset {
            parameters: vec![parameter("hand"), parameter("num_syst"), parameter("colex")],
            codes: vec![code("num_syst", "decimal"), code("colex", "unknown")],
            ..Default::default()
        };
        assert_eq!(map_order(&dataset), vec!["colex", "num_syst"]);
    }

    #[test]
    fn test_shape_counts() {
        let language = |id: &str, melanesian| Language {
            id: id.to_string(),
            name: id.to_string(),
            glottocode: id.to_string(),
            latitude: None,
            longitude: None,
            number: 1,
            melanesian,
        };
        let dataset = Dataset {
            languages: vec![language("a", true), language("b", false), language("c", false)],
            ..Default::default()
        };
        assert_eq!(shape_counts(&dataset), ShapeCounts { melanesian: 1, other: 2 });
    }

    #[test]
    fn test_fill_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colex.html");
        fs::write(&path, "<li>__colex-unknown__</li><li>__yes__</li>").unwrap();
        fill_placeholders(&path, &[("__colex-unknown__".to_string(), "unknown")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<li>unknown</li><li>__yes__</li>");
    }
}
