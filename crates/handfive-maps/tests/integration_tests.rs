//! Integration tests for the map-renderer
//!
//! A fake map tool stands in for `cldfviz.map`: it writes an SVG and an HTML
//! file containing the `__{code}__` placeholders the real tool would emit.

use handfive_cldf::{Dataset, DatasetReader, DatasetWriter};
use handfive_domain::{catalog, Language, Value};
use handfive_maps::{MapError, MapFormat, MapRenderer, MapRequest, MapTool, Result};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records requests and writes placeholder output
#[derive(Clone, Default)]
struct FakeTool {
    requests: Arc<Mutex<Vec<MapRequest>>>,
    withhold: Option<MapFormat>,
}

impl MapTool for FakeTool {
    fn render(&self, request: &MapRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        if self.withhold == Some(request.format) {
            return Ok(());
        }
        let body = match request.format {
            MapFormat::Svg => "<svg/>".to_string(),
            MapFormat::Html => {
                let mut layers: Vec<String> = request
                    .colors
                    .iter()
                    .map(|(code, _)| format!("<li>__{}__</li>", code))
                    .collect();
                if request.shapes {
                    layers.push("<li>__yes__</li><li>__no__</li>".to_string());
                }
                layers.concat()
            }
        };
        fs::write(&request.output, body)?;
        Ok(())
    }
}

struct FailingTool;

impl MapTool for FailingTool {
    fn render(&self, _request: &MapRequest) -> Result<()> {
        Err(MapError::Io(std::io::Error::other("tool crashed")))
    }
}

fn language(id: &str, number: u32, melanesian: bool) -> Language {
    Language {
        id: id.to_string(),
        name: id.to_string(),
        glottocode: id.to_string(),
        latitude: Some(-5.0),
        longitude: Some(150.0),
        number,
        melanesian,
    }
}

fn value(parameter: &str, language: &str, code: &str) -> Value {
    Value {
        id: format!("{}-{}", parameter, language),
        language_id: language.to_string(),
        parameter_id: parameter.to_string(),
        value: Some(code.to_string()),
        code_id: Some(format!("{}-{}", parameter, code)),
        comment: None,
    }
}

fn write_dataset(dir: &Path) -> DatasetReader {
    let mut dataset = Dataset::new();
    for parameter in catalog::parameters() {
        dataset.parameters.push(parameter.to_parameter());
        dataset.codes.extend(parameter.to_codes());
    }
    dataset.languages = vec![
        language("aaaa1234", 1, true),
        language("bbbb1234", 2, true),
        language("cccc1234", 3, false),
    ];
    dataset.values = vec![
        value("colex", "aaaa1234", "full-colexification"),
        value("colex", "bbbb1234", "partial-colexification"),
        value("colex", "cccc1234", "partial-colexification"),
        value("num_syst", "aaaa1234", "decimal"),
    ];
    let cldf = dir.join("cldf");
    DatasetWriter::new(&cldf, "test").write(&dataset).unwrap();
    DatasetReader::open(&cldf).unwrap()
}

fn setup() -> (TempDir, DatasetReader) {
    let dir = tempfile::tempdir().unwrap();
    let reader = write_dataset(dir.path());
    (dir, reader)
}

#[test]
fn test_colexification_maps_and_total() {
    let (dir, reader) = setup();
    let tool = FakeTool::default();
    let summary = MapRenderer::new(tool, dir.path().join("maps"))
        .render(&reader)
        .unwrap();

    let colex = summary.maps.iter().find(|m| m.parameter == "colex").unwrap();
    assert!(colex.svg.ends_with("colex.svg") && colex.svg.is_file());
    assert!(colex.html.ends_with("colex.html") && colex.html.is_file());
    assert_eq!(colex.total, 3);

    let index = fs::read_to_string(&summary.index).unwrap();
    assert!(index.contains("## Is there colexification?"));
    assert!(index.contains("| full colexification | 1 |"));
    assert!(index.contains("| partial colexification | 2 |"));
    assert!(index.contains("| lexically distinct | 0 |"));
    assert!(index.contains("&nbsp; | &nbsp; | **3** | &nbsp;"));
    assert!(index.contains("![colex](colex.svg)"));
    assert!(index.contains("View [interactive map](colex.html)."));
}

#[test]
fn test_placeholders_replaced_with_code_names() {
    let (dir, reader) = setup();
    let summary = MapRenderer::new(FakeTool::default(), dir.path().join("maps"))
        .render(&reader)
        .unwrap();
    let colex = summary.maps.iter().find(|m| m.parameter == "colex").unwrap();
    let html = fs::read_to_string(&colex.html).unwrap();
    assert!(html.contains("<li>full colexification</li>"));
    assert!(!html.contains("__"));
}

#[test]
fn test_every_coded_parameter_mapped_with_numeral_systems_last() {
    let (dir, reader) = setup();
    let tool = FakeTool::default();
    let summary = MapRenderer::new(tool.clone(), dir.path().join("maps"))
        .render(&reader)
        .unwrap();

    let order: Vec<_> = summary.maps.iter().map(|m| m.parameter.as_str()).collect();
    assert_eq!(
        order,
        vec!["colex", "dist", "repl_hand", "repl_five", "hand_replacement", "five_replacement", "num_syst"]
    );
    let requests = tool.requests.lock().unwrap();
    assert_eq!(requests.len(), 14);
    assert!(requests.iter().all(|r| r.shapes == (r.parameter == "num_syst")));
    assert!(requests
        .iter()
        .all(|r| r.metadata.ends_with("StructureDataset-metadata.json")));
}

#[test]
fn test_numeral_systems_section() {
    let (dir, reader) = setup();
    let summary = MapRenderer::new(FakeTool::default(), dir.path().join("maps"))
        .render(&reader)
        .unwrap();

    let num_syst = summary.maps.last().unwrap();
    let html = fs::read_to_string(&num_syst.html).unwrap();
    assert!(html.contains("<li>yes</li><li>no</li>"));
    assert!(html.contains("<li>quinary-decimal</li>"));

    let index = fs::read_to_string(&summary.index).unwrap();
    assert!(index.contains("⏺| Melanesian | 2 | "));
    assert!(index.contains("▼| Non-melanesian | 1 | "));
    assert!(index.trim_end().ends_with("View [interactive map](num_syst.html)."));
}

#[test]
fn test_base_url_links() {
    let (dir, reader) = setup();
    let summary = MapRenderer::new(FakeTool::default(), dir.path().join("maps"))
        .with_base_url(Some("https://example.org/maps".to_string()))
        .render(&reader)
        .unwrap();
    let index = fs::read_to_string(&summary.index).unwrap();
    assert!(index.contains("View [interactive map](https://example.org/maps/dist.html)."));
}

#[test]
fn test_missing_output_aborts() {
    let (dir, reader) = setup();
    let tool = FakeTool {
        withhold: Some(MapFormat::Html),
        ..Default::default()
    };
    let err = MapRenderer::new(tool, dir.path().join("maps"))
        .render(&reader)
        .unwrap_err();
    match err {
        MapError::MissingOutput(path) => assert!(path.ends_with("colex.html")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("maps").join("README.md").exists());
}

#[test]
fn test_tool_failure_aborts() {
    let (dir, reader) = setup();
    let err = MapRenderer::new(FailingTool, dir.path().join("maps"))
        .render(&reader)
        .unwrap_err();
    assert!(matches!(err, MapError::Io(_)));
}
