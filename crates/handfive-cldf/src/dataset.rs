//! In-memory dataset: one vector per CLDF table

use crate::error::{CldfError, Result};
use handfive_domain::{
    Code, Contribution, Form, Language, Parameter, ReplacementEvent, Value,
};
use std::collections::{HashMap, HashSet};

/// File names of the tables, relative to the dataset directory
pub mod files {
    /// Metadata file describing all tables
    pub const METADATA: &str = "StructureDataset-metadata.json";
    /// LanguageTable
    pub const LANGUAGES: &str = "languages.csv";
    /// ContributionTable
    pub const CONTRIBUTIONS: &str = "contributions.csv";
    /// ParameterTable
    pub const PARAMETERS: &str = "parameters.csv";
    /// CodeTable
    pub const CODES: &str = "codes.csv";
    /// FormTable
    pub const FORMS: &str = "forms.csv";
    /// ValueTable
    pub const VALUES: &str = "values.csv";
    /// Custom table of replacement events
    pub const REPLACEMENTS: &str = "replacements.csv";
    /// Human-readable description of the dataset
    pub const README: &str = "README.md";
}

/// All tables of the StructureDataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// LanguageTable rows
    pub languages: Vec<Language>,
    /// ContributionTable rows
    pub contributions: Vec<Contribution>,
    /// ParameterTable rows
    pub parameters: Vec<Parameter>,
    /// CodeTable rows, in declaration order
    pub codes: Vec<Code>,
    /// FormTable rows
    pub forms: Vec<Form>,
    /// ValueTable rows
    pub values: Vec<Value>,
    /// replacements.csv rows
    pub replacements: Vec<ReplacementEvent>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a parameter by ID
    pub fn parameter(&self, id: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.id == id)
    }

    /// Codes of a parameter, in declaration order
    pub fn codes_of<'a>(&'a self, parameter_id: &'a str) -> impl Iterator<Item = &'a Code> + 'a {
        self.codes.iter().filter(move |c| c.parameter_id == parameter_id)
    }

    /// Number of values per Code_ID
    pub fn value_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for value in &self.values {
            if let Some(code_id) = value.code_id.as_deref() {
                *counts.entry(code_id).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Row counts per table file, in file order
    pub fn row_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            (files::LANGUAGES, self.languages.len()),
            (files::CONTRIBUTIONS, self.contributions.len()),
            (files::PARAMETERS, self.parameters.len()),
            (files::CODES, self.codes.len()),
            (files::FORMS, self.forms.len()),
            (files::VALUES, self.values.len()),
            (files::REPLACEMENTS, self.replacements.len()),
        ]
    }

    /// Check the referential constraints between the tables
    ///
    /// - IDs are unique within each table
    /// - every Language_ID, Parameter_ID, Contribution_ID and Code_ID resolves
    /// - a value's code belongs to the value's parameter
    /// - there is at most one value per language and parameter
    pub fn validate(&self) -> Result<()> {
        let languages = unique_ids("LanguageTable", self.languages.iter().map(|l| l.id.as_str()))?;
        let parameters =
            unique_ids("ParameterTable", self.parameters.iter().map(|p| p.id.as_str()))?;
        let contributions =
            unique_ids("ContributionTable", self.contributions.iter().map(|c| c.id.as_str()))?;
        unique_ids("FormTable", self.forms.iter().map(|f| f.id.as_str()))?;
        unique_ids("ValueTable", self.values.iter().map(|v| v.id.as_str()))?;
        unique_ids("replacements", self.replacements.iter().map(|r| r.id.as_str()))?;

        let mut code_parameter = HashMap::new();
        for code in &self.codes {
            if !parameters.contains(code.parameter_id.as_str()) {
                return Err(integrity(format!(
                    "code {} references unknown parameter {}",
                    code.id, code.parameter_id
                )));
            }
            if code_parameter.insert(code.id.as_str(), code.parameter_id.as_str()).is_some() {
                return Err(integrity(format!("duplicate ID {} in CodeTable", code.id)));
            }
        }

        for form in &self.forms {
            require(&languages, &form.language_id, "form", &form.id)?;
            require(&parameters, &form.parameter_id, "form", &form.id)?;
            require(&contributions, &form.contribution_id, "form", &form.id)?;
        }

        let mut seen = HashSet::new();
        for value in &self.values {
            require(&languages, &value.language_id, "value", &value.id)?;
            require(&parameters, &value.parameter_id, "value", &value.id)?;
            if !seen.insert((value.language_id.as_str(), value.parameter_id.as_str())) {
                return Err(integrity(format!(
                    "more than one value for language {} and parameter {}",
                    value.language_id, value.parameter_id
                )));
            }
            if let Some(code_id) = value.code_id.as_deref() {
                match code_parameter.get(code_id) {
                    Some(pid) if *pid == value.parameter_id => {}
                    Some(pid) => {
                        return Err(integrity(format!(
                            "value {} of parameter {} references code {} of parameter {}",
                            value.id, value.parameter_id, code_id, pid
                        )))
                    }
                    None => {
                        return Err(integrity(format!(
                            "value {} references unknown code {}",
                            value.id, code_id
                        )))
                    }
                }
            }
        }

        for event in &self.replacements {
            require(&parameters, &event.concept, "replacement", &event.id)?;
            for lid in &event.language_ids {
                require(&languages, lid, "replacement", &event.id)?;
            }
        }

        Ok(())
    }
}

fn integrity(message: String) -> CldfError {
    CldfError::Integrity(message)
}

fn unique_ids<'a>(
    table: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>> {
    let mut set = HashSet::new();
    for id in ids {
        if !set.insert(id) {
            return Err(integrity(format!("duplicate ID {} in {}", id, table)));
        }
    }
    Ok(set)
}

fn require(ids: &HashSet<&str>, id: &str, kind: &str, row: &str) -> Result<()> {
    if ids.contains(id) {
        Ok(())
    } else {
        Err(integrity(format!("{} {} references unknown ID {}", kind, row, id)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample() -> Dataset {
        Dataset {
            languages: vec![Language {
                id: "xxxx1234".to_string(),
                name: "Test".to_string(),
                glottocode: "xxxx1234".to_string(),
                latitude: Some(-5.5),
                longitude: Some(150.25),
                number: 1,
                melanesian: true,
            }],
            contributions: vec![Contribution {
                id: "abvd".to_string(),
                name: "ABVD".to_string(),
                citation: "Greenhill et al. 2008".to_string(),
            }],
            parameters: vec![
                Parameter {
                    id: "hand".to_string(),
                    name: "hand".to_string(),
                    description: None,
                },
                Parameter {
                    id: "colex".to_string(),
                    name: "Is_there_colexification?".to_string(),
                    description: Some("Colexification".to_string()),
                },
            ],
            codes: vec![Code {
                id: "colex-partial-colexification".to_string(),
                parameter_id: "colex".to_string(),
                name: "partial colexification".to_string(),
                description: "partially colexified".to_string(),
                color: "orange".to_string(),
            }],
            forms: vec![Form {
                id: "xxxx1234-hand".to_string(),
                language_id: "xxxx1234".to_string(),
                parameter_id: "hand".to_string(),
                value: "bulu".to_string(),
                form: "bulu".to_string(),
                contribution_id: "abvd".to_string(),
                glottocode_in_dataset: "xxxx1234".to_string(),
                language_name_in_dataset: "Test".to_string(),
            }],
            values: vec![Value {
                id: "colex-xxxx1234".to_string(),
                language_id: "xxxx1234".to_string(),
                parameter_id: "colex".to_string(),
                value: Some("partial colexification".to_string()),
                code_id: Some("colex-partial-colexification".to_string()),
                comment: None,
            }],
            replacements: vec![ReplacementEvent {
                id: "hand-1".to_string(),
                replacement_group: "hand-1".to_string(),
                subgroup: "Test".to_string(),
                comment: None,
                source: Some("Blust 2009".to_string()),
                concept: "hand".to_string(),
                language_ids: vec!["xxxx1234".to_string()],
            }],
        }
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_code_of_other_parameter_is_rejected() {
        let mut ds = sample();
        ds.parameters.push(Parameter {
            id: "dist".to_string(),
            name: "dist".to_string(),
            description: None,
        });
        ds.values[0].parameter_id = "dist".to_string();
        let err = ds.validate().unwrap_err();
        assert!(err.to_string().contains("of parameter colex"));
    }

    #[test]
    fn test_duplicate_value_is_rejected() {
        let mut ds = sample();
        let mut dup = ds.values[0].clone();
        dup.id = "colex-xxxx1234-2".to_string();
        ds.values.push(dup);
        assert!(ds.validate().is_err());
    }

    #[test]
    fn test_unknown_language_in_replacement() {
        let mut ds = sample();
        ds.replacements[0].language_ids.push("nope0000".to_string());
        assert!(ds.validate().is_err());
    }

    #[test]
    fn test_value_counts_skip_uncoded() {
        let mut ds = sample();
        ds.values.push(Value {
            id: "dist-xxxx1234".to_string(),
            language_id: "xxxx1234".to_string(),
            parameter_id: "colex".to_string(),
            value: None,
            code_id: None,
            comment: Some("(recolexification)".to_string()),
        });
        let counts = ds.value_counts();
        assert_eq!(counts.get("colex-partial-colexification"), Some(&1));
        assert_eq!(counts.len(), 1);
    }
}
