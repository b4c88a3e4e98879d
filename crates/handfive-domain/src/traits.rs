//! Trait definitions for external interactions
//!
//! The genealogical classification is an external, read-only collaborator.
//! Implementations live in other crates (handfive-builder reads Glottolog's
//! languoid export).

/// Level of a languoid in the classification tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguoidLevel {
    /// A family or subgroup node
    Family,

    /// A language
    Language,

    /// A dialect below a language
    Dialect,
}

impl LanguoidLevel {
    /// Get the level name as used by Glottolog
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguoidLevel::Family => "family",
            LanguoidLevel::Language => "language",
            LanguoidLevel::Dialect => "dialect",
        }
    }

    /// Parse a level from its Glottolog name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "family" => Some(LanguoidLevel::Family),
            "language" => Some(LanguoidLevel::Language),
            "dialect" => Some(LanguoidLevel::Dialect),
            _ => None,
        }
    }
}

/// A node of the classification
#[derive(Debug, Clone, PartialEq)]
pub struct Languoid {
    /// Glottocode
    pub id: String,

    /// Name of the languoid
    pub name: String,

    /// Level in the tree
    pub level: LanguoidLevel,

    /// Latitude, if known
    pub latitude: Option<f64>,

    /// Longitude, if known
    pub longitude: Option<f64>,

    /// ISO 3166 alpha-2 codes of the countries the languoid is associated with
    pub countries: Vec<String>,
}

/// One ancestor in a lineage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageEntry {
    /// Name of the ancestor
    pub name: String,

    /// Glottocode of the ancestor
    pub id: String,

    /// Level of the ancestor
    pub level: LanguoidLevel,
}

/// Read-only access to a genealogical classification
pub trait Classification {
    /// Error type for lookups
    type Error;

    /// Enumerate all nodes of the classification
    fn languoids(&self) -> Result<Vec<Languoid>, Self::Error>;

    /// Ancestors of a node, ordered from the top-level family down to the
    /// node's parent. Empty for top-level nodes.
    fn lineage(&self, id: &str) -> Result<Vec<LineageEntry>, Self::Error>;
}
