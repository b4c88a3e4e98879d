//! Raw annotation sheets
//!
//! Sheets are read as header-keyed rows with every cell trimmed. Typed
//! accessors turn missing required cells into [`BuildError::MissingField`].

use crate::error::{BuildError, Result};
use crate::lookup::AustronesianIndex;
use handfive_domain::Concept;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use tracing::debug;

/// Feature sheet: one row per language with forms and coded judgments
pub const FEATURES: &str = "Colexification_of_hand_and_five_in_Austronesian_languages.tsv";
/// All attested forms per dataset, language and concept
pub const FORMS: &str = "Forms_of_hand_and_five_in_Austronesian_languages.tsv";
/// Etymology classes of replacement words, in long format
pub const ETYMOLOGIES: &str = "values.csv";
/// Numeral-system type per language
pub const NUMERAL_SYSTEMS: &str = "numeral_systems.csv";

/// Replacement-event sheet for a concept
pub fn replacements(concept: Concept) -> String {
    format!("Replacements_of_{}_in_Austronesian.tsv", concept)
}

/// A sheet row
#[derive(Debug, Clone)]
pub struct Row {
    sheet: String,
    number: usize,
    cells: HashMap<String, String>,
}

impl Row {
    /// Create a row from cells; used for sheets built in memory
    pub fn new(sheet: &str, number: usize, cells: HashMap<String, String>) -> Self {
        Self {
            sheet: sheet.to_string(),
            number,
            cells,
        }
    }

    /// Non-empty cell value
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Non-empty cell value that is not the `_` placeholder
    pub fn value(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| *v != "_")
    }

    /// Required cell value
    pub fn require(&self, column: &str) -> Result<&str> {
        self.value(column).ok_or_else(|| BuildError::MissingField {
            sheet: self.sheet.clone(),
            column: column.to_string(),
            row: self.number,
        })
    }

    /// Sheet this row comes from
    pub fn sheet(&self) -> &str {
        &self.sheet
    }
}

/// Read a sheet; the delimiter follows the file extension
pub fn read_sheet(path: &Path) -> Result<Vec<Row>> {
    let delimiter = if path.extension().is_some_and(|e| e == "tsv") {
        b'\t'
    } else {
        b','
    };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(|e| BuildError::csv(path, e))?;

    let sheet = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| BuildError::csv(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| BuildError::csv(path, e))?;
        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.trim().to_string()))
            .collect();
        rows.push(Row::new(&sheet, i + 1, cells));
    }
    debug!(sheet = %sheet, rows = rows.len(), "Read sheet");
    Ok(rows)
}

/// A variety as named in one of the source datasets
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceVariety {
    /// Contribution key
    pub dataset: String,
    /// Glottocode used by the dataset
    pub glottocode: String,
    /// Name used by the dataset
    pub name: String,
}

/// Attested forms, grouped by language-level Glottocode
#[derive(Debug, Default)]
pub struct FormIndex {
    by_language: HashMap<String, BTreeMap<SourceVariety, BTreeSet<(String, Concept)>>>,
}

impl FormIndex {
    /// Index the rows of the forms sheet
    ///
    /// Dialect rows without their own Glottocode count for the language.
    pub fn from_rows(rows: &[Row], index: &AustronesianIndex) -> Result<Self> {
        let mut forms = Self::default();
        for row in rows {
            let Some(language) = row.get("Language_level_glottocode") else {
                continue;
            };
            let glottocode = row.get("Glottocode").unwrap_or(language);
            index.require(glottocode)?;

            let Some(concept) = row.get("Parameter_ID").and_then(Concept::parse) else {
                continue;
            };
            let Some(form) = row.get("Form") else {
                continue;
            };
            let variety = SourceVariety {
                dataset: row.require("Dataset")?.to_string(),
                glottocode: glottocode.to_string(),
                name: row.get("Language_name").unwrap_or_default().to_string(),
            };
            forms
                .by_language
                .entry(language.to_string())
                .or_default()
                .entry(variety)
                .or_default()
                .insert((form.to_string(), concept));
        }
        Ok(forms)
    }

    /// Source varieties attesting `form` for `concept` in a language, by dataset
    ///
    /// If a dataset attests the form for several varieties, the first in
    /// (Glottocode, name) order is returned.
    pub fn origins(
        &self,
        language: &str,
        concept: Concept,
        form: &str,
    ) -> BTreeMap<&str, &SourceVariety> {
        let mut origins = BTreeMap::new();
        for (variety, attested) in self.by_language.get(language).into_iter().flatten() {
            if attested.contains(&(form.to_string(), concept)) {
                origins.entry(variety.dataset.as_str()).or_insert(variety);
            }
        }
        origins
    }
}

/// Etymology classes of the words that replaced ‘hand’ or ‘five’
#[derive(Debug, Default)]
pub struct EtymologyTable {
    classes: HashMap<(Concept, String), String>,
}

impl EtymologyTable {
    /// Read the long-format rows `Language_ID, Parameter_ID, Value`
    ///
    /// Only parameters named `Source_of_‘hand’` / `Source_of_‘five’` are used.
    pub fn from_rows(rows: &[Row]) -> Result<Self> {
        let mut table = Self::default();
        for row in rows {
            let Some(concept) = row.get("Parameter_ID").and_then(source_concept) else {
                continue;
            };
            let language = row.require("Language_ID")?;
            let Some(class) = row.get("Value") else {
                continue;
            };
            table
                .classes
                .insert((concept, language.to_string()), class.to_string());
        }
        Ok(table)
    }

    /// Etymology class for a language
    pub fn get(&self, concept: Concept, language: &str) -> Option<&str> {
        self.classes
            .get(&(concept, language.to_string()))
            .map(String::as_str)
    }

    /// Number of recorded classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

fn source_concept(parameter: &str) -> Option<Concept> {
    let rest = parameter.strip_prefix("Source_of_")?;
    Concept::parse(rest.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glottolog::{tests::TREE, GlottologCsv};

    fn row(cells: &[(&str, &str)]) -> Row {
        Row::new(
            "test",
            1,
            cells.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        )
    }

    fn index() -> AustronesianIndex {
        AustronesianIndex::build(&GlottologCsv::from_reader(TREE.as_bytes()).unwrap()).unwrap()
    }

    fn form_row(dataset: &str, glottocode: &str, language: &str, form: &str, concept: &str) -> Row {
        row(&[
            ("Dataset", dataset),
            ("Glottocode", glottocode),
            ("Language_level_glottocode", language),
            ("Language_name", "Lenkau"),
            ("Form", form),
            ("Parameter_ID", concept),
        ])
    }

    #[test]
    fn test_placeholder_is_empty() {
        let r = row(&[("hand", "_"), ("five", "lima")]);
        assert_eq!(r.value("hand"), None);
        assert_eq!(r.value("five"), Some("lima"));
        assert!(r.require("hand").is_err());
    }

    #[test]
    fn test_form_origins() {
        let rows = vec![
            form_row("abvd", "lenk1242", "lenk1242", "lima", "five"),
            form_row("barlowpacific", "", "lenk1242", "lima", "five"),
            form_row("abvd", "lenk1243", "lenk1242", "nima", "hand"),
        ];
        let forms = FormIndex::from_rows(&rows, &index()).unwrap();

        let origins = forms.origins("lenk1242", Concept::Five, "lima");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins["abvd"].glottocode, "lenk1242");

        let hand = forms.origins("lenk1242", Concept::Hand, "nima");
        assert_eq!(hand["abvd"].glottocode, "lenk1243");
        assert!(forms.origins("lenk1242", Concept::Hand, "lima").is_empty());
    }

    #[test]
    fn test_non_austronesian_form_is_rejected() {
        let rows = vec![form_row("abvd", "indo1319", "lenk1242", "lima", "five")];
        assert!(FormIndex::from_rows(&rows, &index()).is_err());
    }

    #[test]
    fn test_etymology_parameter_names() {
        let rows = vec![
            row(&[("Language_ID", "lenk1242"), ("Parameter_ID", "Source_of_‘hand’"), ("Value", "wing")]),
            row(&[("Language_ID", "lenk1242"), ("Parameter_ID", "Other"), ("Value", "x")]),
        ];
        let table = EtymologyTable::from_rows(&rows).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Concept::Hand, "lenk1242"), Some("wing"));
        assert_eq!(table.get(Concept::Five, "lenk1242"), None);
    }

    #[test]
    fn test_read_tsv_trims_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.tsv");
        std::fs::write(&path, "Glottocode\t hand \nlenk1242\t nima \n").unwrap();
        let rows = read_sheet(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("hand"), Some("nima"));
        assert_eq!(rows[0].sheet(), "sheet.tsv");
    }
}
