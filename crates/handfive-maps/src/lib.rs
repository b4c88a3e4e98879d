//! Hand and Five map-renderer
//!
//! Draws one static (SVG) and one interactive (HTML) map for every coded
//! parameter of the CLDF dataset and writes a Markdown index with the code
//! counts next to the maps.
//!
//! # Architecture
//!
//! ```text
//! cldf/ → DatasetReader → MapRenderer ─→ MapTool (cldfviz.map) → maps/*.svg, maps/*.html
//!                                     └→ index → maps/README.md
//! ```
//!
//! The drawing itself is delegated to an external program behind the
//! [`MapTool`] trait. A failing tool or a missing output file aborts the run.
//!
//! # Example Usage
//!
//! ```no_run
//! use handfive_cldf::DatasetReader;
//! use handfive_maps::{CommandMapTool, MapRenderer, MapsConfig};
//!
//! # fn example() -> Result<(), handfive_maps::MapError> {
//! let config = MapsConfig::default();
//! let renderer = MapRenderer::from_config(CommandMapTool::new(&config.command)?, &config);
//! let summary = renderer.render(&DatasetReader::open("cldf")?)?;
//! println!("{} maps, index at {}", summary.maps.len(), summary.index.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod renderer;
mod tool;

pub mod index;

pub use config::MapsConfig;
pub use error::{MapError, Result};
pub use renderer::{MapRenderer, MapSummary, RenderedMap, INDEX};
pub use tool::{CommandMapTool, MapFormat, MapRequest, MapTool, SHAPE_PROPERTY};
