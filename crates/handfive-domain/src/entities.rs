//! Entities module - rows of the CLDF tables
//!
//! Field names are serialized with the CLDF column names, so the same types are
//! written by the table-builder and read back by the map-renderer.

use serde::{Deserialize, Serialize};

/// A language in the sample (LanguageTable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// Glottocode, used as ID
    #[serde(rename = "ID")]
    pub id: String,

    /// Display name from the feature sheet
    #[serde(rename = "Name")]
    pub name: String,

    /// Glottocode
    #[serde(rename = "Glottocode")]
    pub glottocode: String,

    /// Latitude from the classification
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,

    /// Longitude from the classification
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,

    /// Position in the genealogical/geographic ordering of the sample
    #[serde(rename = "Number")]
    pub number: u32,

    /// Whether the language is spoken in Melanesia
    #[serde(rename = "Melanesian", with = "yes_no")]
    pub melanesian: bool,
}

/// A source dataset forms were taken from (ContributionTable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Short key, e.g. `abvd`
    #[serde(rename = "ID")]
    pub id: String,

    /// Title of the dataset
    #[serde(rename = "Name")]
    pub name: String,

    /// Full citation
    #[serde(rename = "Citation")]
    pub citation: String,
}

/// An analytical dimension (ParameterTable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter ID, e.g. `colex`
    #[serde(rename = "ID")]
    pub id: String,

    /// Question-style name, e.g. `Is_there_colexification?`
    #[serde(rename = "Name")]
    pub name: String,

    /// Longer description, possibly empty
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// A category of an enumerated parameter (CodeTable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    /// `{parameter}-{slug(name)}`
    #[serde(rename = "ID")]
    pub id: String,

    /// Owning parameter
    #[serde(rename = "Parameter_ID")]
    pub parameter_id: String,

    /// Display name
    #[serde(rename = "Name")]
    pub name: String,

    /// What the category means
    #[serde(rename = "Description")]
    pub description: String,

    /// Map color
    #[serde(rename = "color")]
    pub color: String,
}

/// The counterpart of a concept in a language (FormTable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// `{glottocode}-{concept}`
    #[serde(rename = "ID")]
    pub id: String,

    /// Glottocode of the language
    #[serde(rename = "Language_ID")]
    pub language_id: String,

    /// The concept, `hand` or `five`
    #[serde(rename = "Parameter_ID")]
    pub parameter_id: String,

    /// Value as given in the feature sheet
    #[serde(rename = "Value")]
    pub value: String,

    /// Form as given in the feature sheet
    #[serde(rename = "Form")]
    pub form: String,

    /// Key of the source dataset
    #[serde(rename = "Contribution_ID")]
    pub contribution_id: String,

    /// Glottocode the source dataset assigns to the variety
    #[serde(rename = "Glottocode_in_dataset")]
    pub glottocode_in_dataset: String,

    /// Name the source dataset gives the variety
    #[serde(rename = "Language_name_in_dataset")]
    pub language_name_in_dataset: String,
}

/// The coded answer for one language and one parameter (ValueTable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    /// `{parameter}-{glottocode}`
    #[serde(rename = "ID")]
    pub id: String,

    /// Glottocode of the language
    #[serde(rename = "Language_ID")]
    pub language_id: String,

    /// Parameter ID
    #[serde(rename = "Parameter_ID")]
    pub parameter_id: String,

    /// Free-text value; empty for recolexification cases
    #[serde(rename = "Value")]
    pub value: Option<String>,

    /// Code of the same parameter, if the value is coded
    #[serde(rename = "Code_ID")]
    pub code_id: Option<String>,

    /// Comment
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

/// A probable loss of the inherited word for a concept (replacements.csv)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementEvent {
    /// `{concept}-{count}`
    #[serde(rename = "ID")]
    pub id: String,

    /// Key grouping conservative events into liberal ones
    #[serde(rename = "Replacement_Group")]
    pub replacement_group: String,

    /// Label of the subgroup or language the loss is attributed to
    #[serde(rename = "Subgroup")]
    pub subgroup: String,

    /// Comment
    #[serde(rename = "Comment")]
    pub comment: Option<String>,

    /// Source citation
    #[serde(rename = "Source")]
    pub source: Option<String>,

    /// The concept, `hand` or `five`
    #[serde(rename = "Concept")]
    pub concept: String,

    /// Sampled languages that fall under the subgroup
    #[serde(rename = "Language_IDs", with = "space_separated")]
    pub language_ids: Vec<String>,
}

mod yes_no {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "yes" } else { "no" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            other => Err(D::Error::custom(format!("expected yes/no, got {:?}", other))),
        }
    }
}

mod space_separated {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&values.join(" "))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.split_whitespace().map(str::to_string).collect())
    }
}
