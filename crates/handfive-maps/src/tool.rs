//! The external map tool

use crate::error::{MapError, Result};
use serde_json::{Map, Value as Json};
use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Language property used to pick marker shapes
pub const SHAPE_PROPERTY: &str = "Melanesian";

/// Output format of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    /// Static image for the index page
    Svg,
    /// Interactive map with one layer per code
    Html,
}

impl MapFormat {
    /// File extension
    pub fn extension(&self) -> &'static str {
        match self {
            MapFormat::Svg => "svg",
            MapFormat::Html => "html",
        }
    }
}

impl fmt::Display for MapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One invocation of the map tool
#[derive(Debug, Clone, PartialEq)]
pub struct MapRequest {
    /// Parameter to plot
    pub parameter: String,
    /// Code ID to color, in declaration order
    pub colors: Vec<(String, String)>,
    /// Whether markers are shaped by the Melanesian language property
    pub shapes: bool,
    /// Output format
    pub format: MapFormat,
    /// File to write
    pub output: PathBuf,
    /// CLDF metadata file of the dataset
    pub metadata: PathBuf,
}

impl MapRequest {
    /// Code colors as a JSON object
    pub fn colormap(&self) -> String {
        let map: Map<String, Json> = self
            .colors
            .iter()
            .map(|(code, color)| (code.clone(), Json::String(color.clone())))
            .collect();
        Json::Object(map).to_string()
    }
}

/// Something that draws a map for a parameter of the dataset
pub trait MapTool {
    /// Render the requested map, writing `request.output`
    fn render(&self, request: &MapRequest) -> Result<()>;
}

/// Runs `cldfbench cldfviz.map` (or another command taking the same arguments)
#[derive(Debug, Clone)]
pub struct CommandMapTool {
    program: String,
    prefix: Vec<String>,
}

impl CommandMapTool {
    /// Create a tool from a command line such as `["cldfbench", "cldfviz.map"]`
    pub fn new(command: &[String]) -> Result<Self> {
        let (program, prefix) = command
            .split_first()
            .ok_or_else(|| MapError::Config("map tool command is empty".to_string()))?;
        Ok(Self {
            program: program.clone(),
            prefix: prefix.to_vec(),
        })
    }

    /// Arguments passed to the program for a request
    pub fn arguments(&self, request: &MapRequest) -> Vec<String> {
        let mut args = self.prefix.clone();
        args.extend(
            ["--parameter", request.parameter.as_str(), "--colormaps"]
                .iter()
                .map(|s| s.to_string()),
        );
        args.push(request.colormap());
        if request.shapes {
            args.extend(
                [
                    "--language-properties",
                    SHAPE_PROPERTY,
                    "--language-properties-colormaps",
                    r#"{"yes":"circle","no":"triangle_up"}"#,
                ]
                .iter()
                .map(|s| s.to_string()),
            );
        }
        args.push("--pacific-centered".to_string());
        args.push("--no-open".to_string());
        let format_args: &[&str] = match request.format {
            MapFormat::Svg => &[
                "--format",
                "svg",
                "--padding-top",
                "5",
                "--padding-bottom",
                "5",
                "--projection",
                "Mollweide",
                "--width",
                "10",
                "--markersize",
                "4",
                "--with-ocean",
                "--no-legend",
            ],
            MapFormat::Html => &["--with-layers", "--value-template", "__{code}__"],
        };
        args.extend(format_args.iter().map(|s| s.to_string()));
        args.push("--output".to_string());
        args.push(request.output.display().to_string());
        args.push(request.metadata.display().to_string());
        args
    }
}

impl MapTool for CommandMapTool {
    fn render(&self, request: &MapRequest) -> Result<()> {
        let args = self.arguments(request);
        debug!(program = %self.program, ?args, "Running map tool");
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| MapError::Spawn {
                command: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(MapError::ToolFailed {
                parameter: request.parameter.clone(),
                format: request.format.to_string(),
                status,
            });
        }
        Ok(())
    }
}
