//! Assembly of the CLDF tables from the raw sheets

use crate::checks::check_colexification;
use crate::config::BuilderConfig;
use crate::error::{BuildError, Result};
use crate::glottolog::GlottologCsv;
use crate::lookup::AustronesianIndex;
use crate::region::RegionClassifier;
use crate::sheets::{self, EtymologyTable, FormIndex, Row};
use handfive_cldf::Dataset;
use handfive_domain::catalog::{self, RECOLEXIFICATION};
use handfive_domain::{
    Coding, Concept, Form, Language, ParameterSpec, ReplacementEvent, Value, ValueSource,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// The raw sheets, read once per run
#[derive(Debug, Default)]
pub struct BuildInputs {
    /// Feature sheet rows
    pub features: Vec<Row>,
    /// Attested-forms sheet rows
    pub forms: Vec<Row>,
    /// Etymology side-table rows
    pub etymologies: Vec<Row>,
    /// Numeral-system sheet rows
    pub numeral_systems: Vec<Row>,
    /// Replacement sheet rows per concept
    pub replacements: Vec<(Concept, Vec<Row>)>,
}

impl BuildInputs {
    /// Read all sheets from the raw directory
    pub fn load(raw_dir: &Path) -> Result<Self> {
        let read = |name: &str| sheets::read_sheet(&raw_dir.join(name));
        let mut replacements = Vec::new();
        for concept in Concept::ALL {
            replacements.push((concept, read(sheets::replacements(concept).as_str())?));
        }
        Ok(Self {
            features: read(sheets::FEATURES)?,
            forms: read(sheets::FORMS)?,
            etymologies: read(sheets::ETYMOLOGIES)?,
            numeral_systems: read(sheets::NUMERAL_SYSTEMS)?,
            replacements,
        })
    }
}

/// Builds the dataset from the raw sheets and the classification
pub struct TableBuilder {
    index: AustronesianIndex,
    region: RegionClassifier,
}

impl TableBuilder {
    /// Create a builder from an index and a region classifier
    pub fn new(index: AustronesianIndex, region: RegionClassifier) -> Self {
        Self { index, region }
    }

    /// Load the classification and the region boundary named in the config
    pub fn from_config(config: &BuilderConfig) -> Result<Self> {
        config.validate().map_err(BuildError::Config)?;
        let glottolog = GlottologCsv::from_path(&config.glottolog)?;
        let index = AustronesianIndex::build(&glottolog)?;
        let region = RegionClassifier::from_geojson_file(
            &config.region_boundary,
            config.region_countries.iter().cloned(),
            config.region_tolerance,
        )?;
        Ok(Self::new(index, region))
    }

    /// Build all tables
    ///
    /// Fails on the first data-integrity violation.
    pub fn build(&self, inputs: &BuildInputs) -> Result<Dataset> {
        let forms = FormIndex::from_rows(&inputs.forms, &self.index)?;
        let etymologies = EtymologyTable::from_rows(&inputs.etymologies)?;
        debug!(etymologies = etymologies.len(), "Indexed etymology classes");

        let mut dataset = Dataset::new();
        dataset.contributions = catalog::contributions()
            .iter()
            .map(|c| c.to_contribution())
            .collect();
        for parameter in catalog::parameters() {
            dataset.parameters.push(parameter.to_parameter());
            dataset.codes.extend(parameter.to_codes());
        }

        for row in &inputs.features {
            self.add_language(&mut dataset, row, &forms, &etymologies)?;
        }
        add_numeral_systems(&mut dataset, &inputs.numeral_systems)?;

        let sample: Vec<String> = dataset.languages.iter().map(|l| l.id.clone()).collect();
        for (concept, rows) in &inputs.replacements {
            for row in rows {
                dataset.replacements.push(self.replacement_event(*concept, row, &sample)?);
            }
        }

        sort_values(&mut dataset);
        dataset.validate()?;

        info!(
            languages = dataset.languages.len(),
            melanesian = dataset.languages.iter().filter(|l| l.melanesian).count(),
            forms = dataset.forms.len(),
            values = dataset.values.len(),
            replacements = dataset.replacements.len(),
            "Built dataset"
        );
        Ok(dataset)
    }

    fn add_language(
        &self,
        dataset: &mut Dataset,
        row: &Row,
        forms: &FormIndex,
        etymologies: &EtymologyTable,
    ) -> Result<()> {
        let glottocode = row.require("Glottocode")?;
        let languoid = self.index.require(glottocode)?;
        let number = row.require("Language_number")?;
        let number = number.parse::<u32>().map_err(|_| {
            BuildError::Data(format!("invalid Language_number {:?} for {}", number, glottocode))
        })?;

        if languoid.latitude.is_none() || languoid.longitude.is_none() {
            warn!(glottocode, "Language has no coordinates in the classification");
        }
        let melanesian = self.region.classify(languoid);
        debug!(glottocode, melanesian, "Classified language");

        dataset.languages.push(Language {
            id: glottocode.to_string(),
            name: row.require("Language_name")?.to_string(),
            glottocode: glottocode.to_string(),
            latitude: languoid.latitude,
            longitude: languoid.longitude,
            number,
            melanesian,
        });

        for concept in Concept::ALL {
            if let Some(form) = row.value(concept.as_str()) {
                dataset.forms.push(form_row(row, glottocode, concept, form, forms)?);
            }
        }

        for parameter in catalog::parameters() {
            if parameter.source != ValueSource::FeatureSheet {
                continue;
            }
            if let Some(raw) = row.value(parameter.name) {
                dataset
                    .values
                    .push(derive_value(parameter, glottocode, raw, etymologies)?);
            }
        }

        let colex = catalog::parameter("colex").map(|p| p.name).unwrap_or_default();
        check_colexification(
            glottocode,
            row.value(Concept::Hand.as_str()),
            row.value(Concept::Five.as_str()),
            row.value(colex),
        )
    }

    fn replacement_event(
        &self,
        concept: Concept,
        row: &Row,
        sample: &[String],
    ) -> Result<ReplacementEvent> {
        let subgroup = row.require("Subgroup")?;
        let node = self
            .index
            .resolve(subgroup)
            .ok_or_else(|| BuildError::UnknownSubgroup(subgroup.to_string()))?;
        let language_ids = self.index.members(node, sample);
        if language_ids.is_empty() {
            warn!(subgroup, concept = %concept, "Replacement event covers no sampled language");
        }

        let group = group_key(row.require("Lower_count")?)?;
        Ok(ReplacementEvent {
            id: format!("{}-{}", concept, row.require("Higher_count")?),
            replacement_group: format!("{}-{}", concept, group),
            subgroup: subgroup.to_string(),
            comment: row.get("Comment").map(str::to_string),
            source: row
                .get(&format!("Sources_of_‘{}’", concept))
                .map(str::to_string),
            concept: concept.to_string(),
            language_ids,
        })
    }
}

fn form_row(
    row: &Row,
    glottocode: &str,
    concept: Concept,
    form: &str,
    forms: &FormIndex,
) -> Result<Form> {
    let dataset_key = row.require(&format!("Dataset_for_{}", concept))?;
    let origins = forms.origins(glottocode, concept, form);
    let variety = origins.get(dataset_key).ok_or_else(|| BuildError::FormOrigin {
        language: glottocode.to_string(),
        concept: concept.to_string(),
        form: form.to_string(),
        dataset: dataset_key.to_string(),
    })?;

    Ok(Form {
        id: format!("{}-{}", glottocode, concept),
        language_id: glottocode.to_string(),
        parameter_id: concept.to_string(),
        value: form.to_string(),
        form: form.to_string(),
        contribution_id: dataset_key.to_string(),
        glottocode_in_dataset: variety.glottocode.clone(),
        language_name_in_dataset: variety.name.clone(),
    })
}

/// Turn a raw sheet value into a ValueTable row
pub fn derive_value(
    parameter: &ParameterSpec,
    language: &str,
    raw: &str,
    etymologies: &EtymologyTable,
) -> Result<Value> {
    let id = format!("{}-{}", parameter.id, language);
    if raw == RECOLEXIFICATION {
        return Ok(Value {
            id,
            language_id: language.to_string(),
            parameter_id: parameter.id.to_string(),
            value: None,
            code_id: None,
            comment: Some(RECOLEXIFICATION.to_string()),
        });
    }

    let code_id = match parameter.coding {
        Coding::Uncoded => None,
        Coding::Direct => Some(parameter.code_id(raw)),
        Coding::Etymology(concept) => {
            let class = etymologies
                .get(concept, language)
                .ok_or_else(|| BuildError::MissingEtymology {
                    language: language.to_string(),
                    concept: concept.to_string(),
                })?;
            Some(parameter.code_id(class))
        }
    };
    if let Some(code_id) = &code_id {
        if !parameter.has_code(code_id) {
            return Err(BuildError::UndeclaredCode {
                language: language.to_string(),
                value: raw.to_string(),
                code_id: code_id.clone(),
            });
        }
    }

    let value = match parameter.coding {
        Coding::Etymology(_) if raw == "?" => "unclear",
        _ => raw,
    };
    Ok(Value {
        id,
        language_id: language.to_string(),
        parameter_id: parameter.id.to_string(),
        value: Some(value.to_string()),
        code_id,
        comment: None,
    })
}

fn add_numeral_systems(dataset: &mut Dataset, rows: &[Row]) -> Result<()> {
    let Some(parameter) = catalog::parameters()
        .iter()
        .find(|p| p.source == ValueSource::NumeralSheet)
    else {
        return Ok(());
    };
    let etymologies = EtymologyTable::default();

    for row in rows {
        let glottocode = row.require("Glottocode")?;
        let Some(raw) = row.value("Numeral_system") else {
            continue;
        };
        if !dataset.languages.iter().any(|l| l.id == glottocode) {
            return Err(BuildError::UnsampledLanguage {
                sheet: row.sheet().to_string(),
                language: glottocode.to_string(),
            });
        }
        dataset
            .values
            .push(derive_value(parameter, glottocode, raw, &etymologies)?);
    }
    Ok(())
}

/// Conservative events sharing a count up to the letter suffix form one group
fn group_key(lower_count: &str) -> Result<&str> {
    let key = lower_count.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if key.is_empty() {
        return Err(BuildError::Data(format!(
            "Lower_count {:?} has no count before its letter suffix",
            lower_count
        )));
    }
    Ok(key)
}

/// Order values by the declaration order of their code; uncoded values first
fn sort_values(dataset: &mut Dataset) {
    let order: HashMap<&str, usize> = dataset
        .codes
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id.as_str(), i + 1))
        .collect();
    let mut values = std::mem::take(&mut dataset.values);
    values.sort_by_key(|v| {
        v.code_id
            .as_deref()
            .and_then(|c| order.get(c).copied())
            .unwrap_or(0)
    });
    dataset.values = values;
}
