//! CLDF metadata for the StructureDataset
//!
//! The JSON-LD description of the tables, in the shape CLDF tooling (and the
//! map tool) expects: one `tables` entry per CSV file with its columns and the
//! CLDF property each column implements.

use crate::dataset::files;
use serde_json::{json, Value as Json};

const TERMS: &str = "http://cldf.clld.org/v1.0/terms.rdf#";

/// Dataset-level description of the tables
pub mod descriptions {
    /// LanguageTable
    pub const LANGUAGES: &str = "This table lists each language-level languoid in Glottolog 5.0 \
        classified as Austronesian. Languages are roughly sorted by genealogy and then geography, \
        more or less reflecting the spread of Austronesian languages from Taiwan to Polynesia. \
        This sorting is reflected by the numbers given in the “Number” column.";

    /// ContributionTable
    pub const CONTRIBUTIONS: &str = "Forms for this study, i.e. counterparts of 'five' and \
        'hand' in Austronesian languages, were taken from the four datasets listed in this table.";

    /// ParameterTable
    pub const PARAMETERS: &str = "This dataset provides two kinds of parameters: 1) The two \
        concepts 'hand' and 'five', with the corresponding counterparts listed in FormTable, and \
        2) seven parameters analyzing the colexification status for these two concepts and the \
        numeral systems of Austronesian languages, with values listed in ValueTable.";

    /// replacements.csv
    pub const REPLACEMENTS: &str = "This table lists coding decisions for “replacement events” \
        for the words for 'hand' or 'five' in sub-groups or single languages of the Austronesian \
        family.\nFor concept 'hand', a row represents a probable loss of the inherited \
        Proto-Austronesian form *qalima ‘hand’, whether in the individual history of a single \
        language or in a protolanguage ancestral to multiple languages.\nFor concept 'five', a \
        row represents a probable loss of the inherited Proto-Austronesian *lima ‘five’.\n\n\
        Replacement events are considered taking a relatively conservative approach: that is, a \
        replacement event is reconstructed to a protolanguage only if there is strong evidence \
        for it and no apparent exceptions (i.e., a reflex of *qalima ‘hand’ found in one or more \
        member languages of the given group).";

    /// Replacement_Group column
    pub const REPLACEMENT_GROUP: &str = "Replacement events can also be considered taking a \
        more liberal approach: that is, replacement events can, in some cases, be reconstructed \
        to higher-order protolanguages or to multiple protolanguages in an area, either when the \
        apparent exceptions seem to be possibly due to subsequent borrowing or when the \
        “replacement event” could be viewed as a single areal spread across multiple languages \
        or language groups. The “conservative” replacement events listed here are grouped into \
        “liberal” events via matching values for the `Replacement_Group` column.\nIf there is no \
        discrepancy between the more conservative and the more liberal approaches, an event will \
        be in a replacement group of its own.";
}

fn col(name: &str, property: Option<&str>) -> Json {
    match property {
        Some(p) => json!({
            "name": name,
            "propertyUrl": format!("{}{}", TERMS, p),
            "datatype": "string",
        }),
        None => json!({"name": name, "datatype": "string"}),
    }
}

fn described(mut column: Json, description: &str) -> Json {
    column["dc:description"] = json!(description);
    column
}

fn typed(mut column: Json, datatype: Json) -> Json {
    column["datatype"] = datatype;
    column
}

fn table(
    url: &str,
    component: Option<&str>,
    description: Option<&str>,
    columns: Vec<Json>,
) -> Json {
    let mut t = json!({
        "url": url,
        "tableSchema": {
            "columns": columns,
            "primaryKey": ["ID"],
        },
    });
    if let Some(c) = component {
        t["dc:conformsTo"] = json!(format!("{}{}", TERMS, c));
    }
    if let Some(d) = description {
        t["dc:description"] = json!(d);
    }
    t
}

/// Build the metadata document for all tables
pub fn structure_dataset(title: &str) -> Json {
    let languages = table(
        files::LANGUAGES,
        Some("LanguageTable"),
        Some(descriptions::LANGUAGES),
        vec![
            col("ID", Some("id")),
            col("Name", Some("name")),
            col("Glottocode", Some("glottocode")),
            typed(
                col("Latitude", Some("latitude")),
                json!({"base": "decimal", "minimum": -90, "maximum": 90}),
            ),
            typed(
                col("Longitude", Some("longitude")),
                json!({"base": "decimal", "minimum": -180, "maximum": 180}),
            ),
            typed(col("Number", None), json!("integer")),
            described(
                col("Melanesian", None),
                "Whether the language is spoken in Melanesia (`yes` or `no`)",
            ),
        ],
    );

    let contributions = table(
        files::CONTRIBUTIONS,
        Some("ContributionTable"),
        Some(descriptions::CONTRIBUTIONS),
        vec![
            col("ID", Some("id")),
            col("Name", Some("name")),
            col("Citation", Some("citation")),
        ],
    );

    let parameters = table(
        files::PARAMETERS,
        Some("ParameterTable"),
        Some(descriptions::PARAMETERS),
        vec![
            col("ID", Some("id")),
            col("Name", Some("name")),
            col("Description", Some("description")),
        ],
    );

    let codes = table(
        files::CODES,
        Some("CodeTable"),
        None,
        vec![
            col("ID", Some("id")),
            col("Parameter_ID", Some("parameterReference")),
            col("Name", Some("name")),
            col("Description", Some("description")),
            col("color", None),
        ],
    );

    let forms = table(
        files::FORMS,
        Some("FormTable"),
        None,
        vec![
            col("ID", Some("id")),
            col("Language_ID", Some("languageReference")),
            col("Parameter_ID", Some("parameterReference")),
            col("Value", Some("value")),
            col("Form", Some("form")),
            described(
                col("Contribution_ID", Some("contributionReference")),
                "Key of lexical dataset from which the form was taken.",
            ),
            described(
                col("Glottocode_in_dataset", None),
                "Glottocode assigned to the variety in the source dataset from which the form was picked",
            ),
            described(
                col("Language_name_in_dataset", None),
                "Name of the variety in the source dataset from which the form was picked",
            ),
        ],
    );

    let values = table(
        files::VALUES,
        Some("ValueTable"),
        None,
        vec![
            col("ID", Some("id")),
            col("Language_ID", Some("languageReference")),
            col("Parameter_ID", Some("parameterReference")),
            col("Value", Some("value")),
            col("Code_ID", Some("codeReference")),
            col("Comment", Some("comment")),
        ],
    );

    let mut language_ids = col("Language_IDs", Some("languageReference"));
    language_ids["separator"] = json!(" ");
    let replacements = table(
        files::REPLACEMENTS,
        None,
        Some(descriptions::REPLACEMENTS),
        vec![
            col("ID", Some("id")),
            described(col("Replacement_Group", None), descriptions::REPLACEMENT_GROUP),
            col("Subgroup", None),
            col("Comment", None),
            col("Source", None),
            col("Concept", Some("parameterReference")),
            language_ids,
        ],
    );

    json!({
        "@context": ["http://www.w3.org/ns/csvw", {"@language": "en"}],
        "dc:conformsTo": format!("{}StructureDataset", TERMS),
        "dc:title": title,
        "dialect": {"commentPrefix": null},
        "tables": [languages, contributions, parameters, codes, forms, values, replacements],
    })
}
