//! Concept module - the two lexical concepts under study

use std::fmt;

/// One of the two concepts whose counterparts are compared
///
/// Both concepts double as parameter IDs (`hand`, `five`) in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Concept {
    /// The numeral ‘five’, inherited from PAn *lima
    Five,

    /// The body part ‘hand’, inherited from PAn *qalima
    Hand,
}

impl Concept {
    /// All concepts, in the order their tables are processed
    pub const ALL: [Concept; 2] = [Concept::Five, Concept::Hand];

    /// Get the concept name as used in IDs and column names
    pub fn as_str(&self) -> &'static str {
        match self {
            Concept::Five => "five",
            Concept::Hand => "hand",
        }
    }

    /// Parse a concept from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "five" => Some(Concept::Five),
            "hand" => Some(Concept::Hand),
            _ => None,
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Concept {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid concept: {}", s))
    }
}
