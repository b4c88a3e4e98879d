//! Markdown index of the maps (`maps/README.md`)

use handfive_domain::{Code, Parameter};
use std::collections::HashMap;

const PREAMBLE: &str = "# Maps

The maps below have been created using the `cldfviz.map` command from the \
[`cldfviz` package](https://pypi.org/project/cldfviz/).
";

/// Languages per marker shape, for maps shaped by region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeCounts {
    /// Melanesian languages (circles)
    pub melanesian: usize,
    /// Other languages (triangles)
    pub other: usize,
}

/// One parameter's section of the index
#[derive(Debug)]
pub struct Section<'a> {
    /// The mapped parameter
    pub parameter: &'a Parameter,
    /// Its codes, in declaration order
    pub codes: Vec<&'a Code>,
    /// File name of the static map
    pub image: String,
    /// Target of the interactive-map link
    pub link: String,
    /// Marker shape legend, if the map uses shapes
    pub shapes: Option<ShapeCounts>,
}

impl Section<'_> {
    /// Sum of the code counts
    pub fn total(&self, counts: &HashMap<&str, usize>) -> usize {
        self.codes
            .iter()
            .map(|c| counts.get(c.id.as_str()).copied().unwrap_or(0))
            .sum()
    }

    /// Render the section
    pub fn render(&self, counts: &HashMap<&str, usize>) -> String {
        let mut lines = vec![
            format!("## {}\n", self.parameter.name.replace('_', " ")),
            self.parameter.description.clone().unwrap_or_default(),
            "\n&nbsp; | Value | Count | Description".to_string(),
            "--- | --- | ---:| ---".to_string(),
        ];
        for code in &self.codes {
            lines.push(format!(
                "$${{\\color{{{}}}⏺}}$$ | {} | {} | {}",
                code.color,
                code.name,
                counts.get(code.id.as_str()).copied().unwrap_or(0),
                code.description
            ));
        }
        lines.push(format!("&nbsp; | &nbsp; | **{}** | &nbsp;", self.total(counts)));

        if let Some(shapes) = self.shapes {
            lines.push("\n&nbsp; | Value | Count | Description".to_string());
            lines.push("---:| --- | ---:| ---".to_string());
            lines.push(format!("⏺| Melanesian | {} | ", shapes.melanesian));
            lines.push(format!("▼| Non-melanesian | {} | ", shapes.other));
        }

        lines.push(format!("\n![{}]({})\n", self.parameter.id, self.image));
        lines.push(format!("View [interactive map]({}).\n", self.link));
        lines.join("\n")
    }
}

/// Assemble the index from rendered sections
pub fn render(sections: &[String]) -> String {
    let mut parts = vec![PREAMBLE.to_string()];
    parts.extend(sections.iter().cloned());
    parts.join("\n")
}

/// Link to an interactive map, absolute when a base URL is configured
pub fn map_link(base_url: Option<&str>, file: &str) -> String {
    match base_url {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), file),
        None => file.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter() -> Parameter {
        Parameter {
            id: "colex".to_string(),
            name: "Is_there_colexification?".to_string(),
            description: Some("Whether hand and five are colexified.".to_string()),
        }
    }

    fn code(name: &str, color: &str) -> Code {
        Code {
            id: format!("colex-{}", name.replace(' ', "-")),
            parameter_id: "colex".to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_section_layout() {
        let parameter = parameter();
        let full = code("full colexification", "red");
        let partial = code("partial colexification", "orange");
        let counts = HashMap::from([("colex-full-colexification", 3)]);
        let section = Section {
            parameter: &parameter,
            codes: vec![&full, &partial],
            image: "colex.svg".to_string(),
            link: "colex.html".to_string(),
            shapes: None,
        };
        let text = section.render(&counts);

        assert!(text.starts_with("## Is there colexification?\n"));
        assert!(text.contains("$${\\color{red}⏺}$$ | full colexification | 3 | full colexification description"));
        assert!(text.contains("| partial colexification | 0 |"));
        assert!(text.contains("&nbsp; | &nbsp; | **3** | &nbsp;"));
        assert!(text.contains("![colex](colex.svg)"));
        assert!(text.contains("View [interactive map](colex.html)."));
        assert!(!text.contains("Melanesian"));
    }

    #[test]
    fn test_shape_legend() {
        let parameter = parameter();
        let section = Section {
            parameter: &parameter,
            codes: vec![],
            image: "colex.svg".to_string(),
            link: "colex.html".to_string(),
            shapes: Some(ShapeCounts { melanesian: 4, other: 7 }),
        };
        let text = section.render(&HashMap::new());
        assert!(text.contains("⏺| Melanesian | 4 | "));
        assert!(text.contains("▼| Non-melanesian | 7 | "));
    }

    #[test]
    fn test_map_link() {
        assert_eq!(map_link(None, "colex.html"), "colex.html");
        assert_eq!(
            map_link(Some("https://example.org/maps/"), "colex.html"),
            "https://example.org/maps/colex.html"
        );
    }

    #[test]
    fn test_index_starts_with_preamble() {
        let text = render(&["## A".to_string()]);
        assert!(text.starts_with("# Maps\n"));
        assert!(text.ends_with("## A"));
    }
}
