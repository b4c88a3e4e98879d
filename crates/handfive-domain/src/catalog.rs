//! The fixed catalog of parameters, codes and contributions
//!
//! Parameters and their codes are declared in display order; that order is
//! significant both for the ValueTable (values sort by the index of their code)
//! and for the map index.

use crate::{slug, Code, Concept, Contribution, Parameter};

/// Where the values of a parameter come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// The parameter is a concept; its data are forms, not values
    Form(Concept),

    /// A column of the feature sheet, named like the parameter
    FeatureSheet,

    /// The numeral-system sheet
    NumeralSheet,
}

/// How a value is mapped to a code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coding {
    /// Free-text values only
    Uncoded,

    /// The value itself names the code
    Direct,

    /// The code is the etymology class recorded for the language in the
    /// side table for this concept
    Etymology(Concept),
}

/// A category declared for a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpec {
    /// Display name
    pub name: &'static str,

    /// Map color
    pub color: &'static str,

    /// What the category means
    pub description: &'static str,
}

/// A parameter declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter ID
    pub id: &'static str,

    /// Name, doubling as the feature-sheet column name
    pub name: &'static str,

    /// Description, possibly empty
    pub description: &'static str,

    /// Origin of the values
    pub source: ValueSource,

    /// Mapping of values to codes
    pub coding: Coding,

    /// Declared codes in display order
    pub codes: &'static [CodeSpec],
}

impl ParameterSpec {
    /// Build the Code_ID for a code name of this parameter
    pub fn code_id(&self, name: &str) -> String {
        format!("{}-{}", self.id, slug(name))
    }

    /// Check whether a Code_ID belongs to this parameter
    pub fn has_code(&self, code_id: &str) -> bool {
        self.codes.iter().any(|c| self.code_id(c.name) == code_id)
    }

    /// The ParameterTable row
    pub fn to_parameter(&self) -> Parameter {
        Parameter {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: (!self.description.is_empty()).then(|| self.description.to_string()),
        }
    }

    /// The CodeTable rows, in declaration order
    pub fn to_codes(&self) -> Vec<Code> {
        self.codes
            .iter()
            .map(|c| Code {
                id: self.code_id(c.name),
                parameter_id: self.id.to_string(),
                name: c.name.to_string(),
                description: c.description.to_string(),
                color: c.color.to_string(),
            })
            .collect()
    }
}

/// A source dataset declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionSpec {
    /// Short key
    pub id: &'static str,

    /// Title
    pub name: &'static str,

    /// Full citation
    pub citation: &'static str,
}

impl ContributionSpec {
    /// The ContributionTable row
    pub fn to_contribution(&self) -> Contribution {
        Contribution {
            id: self.id.to_string(),
            name: self.name.to_string(),
            citation: self.citation.to_string(),
        }
    }
}

/// Parameter ID of the numeral-system parameter, rendered with the region overlay
pub const NUMERAL_SYSTEM: &str = "num_syst";

/// Value marking a language with replacement of both concepts whose new forms
/// are colexified again
pub const RECOLEXIFICATION: &str = "(recolexification)";

/// All parameters in declaration order
pub fn parameters() -> &'static [ParameterSpec] {
    PARAMETERS
}

/// Look up a parameter by ID
pub fn parameter(id: &str) -> Option<&'static ParameterSpec> {
    PARAMETERS.iter().find(|p| p.id == id)
}

/// All contributions
pub fn contributions() -> &'static [ContributionSpec] {
    CONTRIBUTIONS
}

static PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        id: "five",
        name: "What is the word for 'five'?",
        description: "",
        source: ValueSource::Form(Concept::Five),
        coding: Coding::Uncoded,
        codes: &[],
    },
    ParameterSpec {
        id: "hand",
        name: "What is the word for 'hand'?",
        description: "",
        source: ValueSource::Form(Concept::Hand),
        coding: Coding::Uncoded,
        codes: &[],
    },
    ParameterSpec {
        id: "colex",
        name: "Is_there_colexification?",
        description: "",
        source: ValueSource::FeatureSheet,
        coding: Coding::Direct,
        codes: &[
            CodeSpec {
                name: "lexically distinct",
                color: "black",
                description: "The concepts ‘hand’ and ‘five’ are lexically distinct in the language.",
            },
            CodeSpec {
                name: "unknown",
                color: "gray",
                description: "The relationship between ‘hand’ and ‘five’ is unknown in the language \
                              due to insufficient data.",
            },
            CodeSpec {
                name: "full colexification",
                color: "red",
                description: "‘hand’ and ‘five’ are fully colexified.",
            },
            CodeSpec {
                name: "partial colexification",
                color: "orange",
                description: "‘hand’ and ‘five’ are partially colexified.",
            },
        ],
    },
    ParameterSpec {
        id: "dist",
        name: "Is_distinctness_due_to_lexical_replacement_or_phonological_change?",
        description: "For those languages that lack colexification, i.e. languages with value \
                      ‘lexically distinct’ for parameter ‘Is there colexification?’, values for \
                      this parameter are ‘lexical replacement’ or ‘phonological change’. However, \
                      some languages exhibit both lexical replacement and (partial) \
                      colexification; this is possible when there has been replacement of both \
                      ‘hand’ and ‘five’ such that the new forms are (partially) colexified: these \
                      cases are indicated by rows in ValueTable with an empty value and a comment \
                      “(recolexification)”.",
        source: ValueSource::FeatureSheet,
        coding: Coding::Direct,
        codes: &[
            CodeSpec {
                name: "lexical replacement",
                color: "black",
                description: "The concepts ‘hand’ and ‘five’ are lexically distinct in the language \
                              due to lexical replacement.",
            },
            CodeSpec {
                name: "phonological change",
                color: "yellow",
                description: "‘hand’ and ‘five’ are distinct due to phonological change.",
            },
        ],
    },
    ParameterSpec {
        id: "repl_hand",
        name: "Was_there_lexical_replacement_of_hand?",
        description: "",
        source: ValueSource::FeatureSheet,
        coding: Coding::Direct,
        codes: &[
            CodeSpec {
                name: "no",
                color: "white",
                description: "The word for the concept ‘hand’ has not been replaced.",
            },
            CodeSpec {
                name: "yes",
                color: "red",
                description: "The word for the concept ‘hand’ has been replaced.",
            },
            CodeSpec {
                name: "unknown",
                color: "gray",
                description: "It is unknown whether or not the word for the concept ‘hand’ has \
                              been replaced.",
            },
        ],
    },
    ParameterSpec {
        id: "repl_five",
        name: "Was_there_lexical_replacement_of_five?",
        description: "",
        source: ValueSource::FeatureSheet,
        coding: Coding::Direct,
        codes: &[
            CodeSpec {
                name: "no",
                color: "white",
                description: "The word for the concept ‘five’ has not been replaced.",
            },
            CodeSpec {
                name: "yes",
                color: "red",
                description: "The word for the concept ‘five’ has been replaced.",
            },
            CodeSpec {
                name: "unknown",
                color: "gray",
                description: "It is unknown whether or not the word for the concept ‘five’ has \
                              been replaced.",
            },
        ],
    },
    ParameterSpec {
        id: "hand_replacement",
        name: "What_replaced_hand?",
        description: "Values for this parameter are descriptions of the most likely etymology \
                      (traced as far back as possible in the Austronesian family) given for the \
                      word in the language that came to mean ‘hand’; values followed by ‘?’ are \
                      somewhat uncertain; and those followed by ‘??’ are even more uncertain; \
                      when no likely etymology has been posited, then the value is given simply \
                      as ‘unclear’ (with no preceding etymology). Values are batched into five \
                      different categories, referenced by the `Code_ID` column.",
        source: ValueSource::FeatureSheet,
        coding: Coding::Etymology(Concept::Hand),
        codes: &[
            CodeSpec {
                name: "“hand” word other than *qalima",
                color: "black",
                description: "‘hand’ derives from a word meaning ‘hand’ or ‘arm’ other than \
                              *qalima, whether [PAn *kamay ‘hand’](https://acd.clld.org/cognatesets/26632), \
                              [PMP *baRa ‘hand, arm’](https://acd.clld.org/cognatesets/25155), or \
                              POc *minV- ‘hand’.",
            },
            CodeSpec {
                name: "part of the arm",
                color: "red",
                description: "‘hand’ derives from a word referring to part of the arm, whether \
                              [PAn *qabaRa ‘shoulder’](https://acd.clld.org/cognatesets/25155), \
                              [PAn *kuSkuS ‘claw, talon, fingernail’](https://acd.clld.org/cognatesets/30315), \
                              Proto-Tsouic *ramuCu ‘finger’ (?), \
                              [PMP *taŋan ‘finger, toe’](https://acd.clld.org/cognatesets/25155), \
                              [PMP *leŋen ‘forearm, lower arm’](https://acd.clld.org/cognatesets/30521), \
                              [PPh *dalukap ‘palm of the hand, sole of the foot’](https://acd.clld.org/cognatesets/34040), \
                              or PNCV *bisu ‘finger, toe, nail’",
            },
            CodeSpec {
                name: "wing",
                color: "yellow",
                description: "‘hand’ derives from a word referring to the wing (of an animal), \
                              whether [PAn *paNij ‘wing’](https://acd.clld.org/cognatesets/27294), \
                              [PMP *kapak ‘wings; flutter’](https://acd.clld.org/cognatesets/31811), \
                              or PWOc *baqe ‘wing, (?) hand’",
            },
            CodeSpec {
                name: "‘hold onto’",
                color: "blue",
                description: "‘hand’ derives from ‘hold onto, cling to’",
            },
            CodeSpec {
                name: "unclear",
                color: "gray",
                description: "‘hand’ derives from a form other than *qalima, but its etymology is \
                              unclear.",
            },
        ],
    },
    ParameterSpec {
        id: "five_replacement",
        name: "What_replaced_five?",
        description: "The same conventions apply here as for the parameter “What replaced_hand?” \
                      except that here most entries are given a language-internal etymology. \
                      Values are batched into seven different categories, referenced by the \
                      `Code_ID` column.",
        source: ValueSource::FeatureSheet,
        coding: Coding::Etymology(Concept::Five),
        codes: &[
            CodeSpec {
                name: "“hand” word other than *qalima",
                color: "black",
                description: "The word for ‘five’ derives from a hand-related word unrelated to \
                              *qalima (in some cases ultimately derived from ‘finger’ or ‘wing’)",
            },
            CodeSpec {
                name: "addition with 2",
                color: "yellow",
                description: "‘five’ derives from a formulation like ‘2+2+1’.",
            },
            CodeSpec {
                name: "tally word",
                color: "red",
                description: "‘five’ derives from an expression apparently referring to a physical \
                              tallying practice, including words like ‘finished’, ‘on top’, or \
                              ‘make/take’.",
            },
            CodeSpec {
                name: "‘count’",
                color: "purple",
                description: "‘five’ derives from ‘count’.",
            },
            CodeSpec {
                name: "addition with 4",
                color: "orange",
                description: "‘five’ derives from a formulation like ‘4+1’.",
            },
            CodeSpec {
                name: "‘part’",
                color: "blue",
                description: "‘five’ derives from ‘part’.",
            },
            CodeSpec {
                name: "unclear",
                color: "gray",
                description: "‘five’ derives from a form other than *lima, but its etymology is \
                              unclear.",
            },
        ],
    },
    ParameterSpec {
        id: NUMERAL_SYSTEM,
        name: "What_type_of_numeral_system?",
        description: "Type of the numeral system of the language, as far as the numerals from \
                      ‘six’ to ‘nine’ are concerned. On the map, Melanesian languages are shown \
                      as circles and all other languages as triangles.",
        source: ValueSource::NumeralSheet,
        coding: Coding::Direct,
        codes: &[
            CodeSpec {
                name: "decimal",
                color: "blue",
                description: "‘six’ to ‘nine’ are not formed on the basis of ‘five’.",
            },
            CodeSpec {
                name: "quinary-decimal",
                color: "orange",
                description: "‘six’ to ‘nine’ are formed as ‘five plus one’ to ‘five plus four’ \
                              within an otherwise decimal system.",
            },
            CodeSpec {
                name: "quinary",
                color: "red",
                description: "Numerals are built on ‘five’ beyond ‘nine’ as well.",
            },
            CodeSpec {
                name: "other",
                color: "gray",
                description: "The numeral system follows some other pattern, or is restricted.",
            },
        ],
    },
];

static CONTRIBUTIONS: &[ContributionSpec] = &[
    ContributionSpec {
        id: "abvd",
        name: "The Austronesian basic vocabulary database",
        citation: "Greenhill, Simon J., Robert Blust, and Russell D. Gray. 2008. The Austronesian \
                   basic vocabulary database: From bioinformatics to lexomics. Evolutionary \
                   Bioinformatics 4:271–83. doi: 10.4137/EBO.S893. https://abvd.eva.mpg.de. Data \
                   from: CLDF dataset derived from Greenhill et al.’s “Austronesian Basic \
                   Vocabulary Database” (v2020). https://github.com/lexibank/abvd.",
    },
    ContributionSpec {
        id: "lexirumah",
        name: "LexiRumah",
        citation: "Kaiping, Gereon A., Owen Edwards, and Marian Klamer. 2019. LexiRumah 3.0.0. \
                   Leiden: Leiden University Centre for Linguistics. doi: 10.5281/zenodo.3537977. \
                   https://lexirumah.model-ling.eu.",
    },
    ContributionSpec {
        id: "chan2019",
        name: "Numeral systems of the world’s languages",
        citation: "Chan, Eugene, Hans-Jörg Bibiko, Christoph Rzymski, Simon J Greenhill, and \
                   Robert Forkel. 2019. channumerals (v1.0). doi: 10.5281/zenodo.3475912. Derived \
                   from Eugene Chan’s “Numeral systems of the world’s languages” (accessed 30 \
                   September 2019). https://lingweb.eva.mpg.de/channumerals.",
    },
    ContributionSpec {
        id: "barlowpacific",
        name: "Numerals of the Pacific: A collection of numeral terms in Austronesian and Papuan \
               languages",
        citation: "Barlow, Russell. 2024. Numerals of the Pacific: A collection of numeral terms \
                   in Austronesian and Papuan languages (v1.6). doi: 10.5281/zenodo.13766733.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nine_parameters() {
        assert_eq!(parameters().len(), 9);
        let ids: HashSet<_> = parameters().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 9);
        assert!(parameter(NUMERAL_SYSTEM).is_some());
    }

    #[test]
    fn test_code_ids_are_unique_per_parameter() {
        for p in parameters() {
            let ids: HashSet<_> = p.to_codes().into_iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), p.codes.len(), "duplicate code in {}", p.id);
        }
    }

    #[test]
    fn test_code_id_format() {
        let colex = parameter("colex").unwrap();
        assert_eq!(colex.code_id("partial colexification"), "colex-partial-colexification");
        assert!(colex.has_code("colex-full-colexification"));
        assert!(!colex.has_code("dist-lexical-replacement"));
    }

    #[test]
    fn test_concepts_are_uncoded() {
        for concept in Concept::ALL {
            let p = parameter(concept.as_str()).unwrap();
            assert_eq!(p.source, ValueSource::Form(concept));
            assert!(p.codes.is_empty());
            assert_eq!(p.to_parameter().description, None);
        }
    }

    #[test]
    fn test_four_contributions() {
        let ids: Vec<_> = contributions().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["abvd", "lexirumah", "chan2019", "barlowpacific"]);
    }
}
