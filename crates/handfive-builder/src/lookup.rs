//! Lookup of Austronesian languoids by Glottocode and by name

use crate::error::{BuildError, Result};
use handfive_domain::{Classification, LanguoidLevel, Languoid};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Glottocode of the Austronesian family node
pub const AUSTRONESIAN: &str = "aust1307";

/// Subgroup labels in the replacement sheets that differ from Glottolog names
const LABEL_CORRECTIONS: &[(&str, &str)] = &[
    // Glottolog: "Amba (Solomon Islands)"
    ("Amba", "amba1266"),
    // Glottolog: "Kela (Papua New Guinea)"
    ("Kela", "kela1255"),
];

/// All languoids below the Austronesian node, with their ancestors
#[derive(Debug, Default)]
pub struct AustronesianIndex {
    by_id: HashMap<String, Languoid>,
    by_name: HashMap<String, String>,
    ancestors: HashMap<String, HashSet<String>>,
}

impl AustronesianIndex {
    /// Build the index from a classification
    pub fn build<C>(classification: &C) -> Result<Self>
    where
        C: Classification,
        C::Error: std::fmt::Display,
    {
        let err = |e: C::Error| BuildError::Classification(e.to_string());
        let mut index = Self::default();

        for languoid in classification.languoids().map_err(err)? {
            let lineage = classification.lineage(&languoid.id).map_err(err)?;
            if lineage.first().map(|e| e.id.as_str()) != Some(AUSTRONESIAN) {
                continue;
            }
            index.ancestors.insert(
                languoid.id.clone(),
                lineage.into_iter().map(|e| e.id).collect(),
            );
            index.by_id.insert(languoid.id.clone(), languoid);
        }

        // Names never shadow Glottocodes. A duplicate name goes to the highest
        // level (subgroups before languages before dialects), then the first Glottocode.
        let mut named: Vec<_> = index
            .by_id
            .values()
            .map(|l| (level_rank(l.level), l.id.clone(), l.name.clone()))
            .collect();
        named.sort();
        for (_, id, name) in named {
            index.by_name.entry(name).or_insert(id);
        }
        for (label, id) in LABEL_CORRECTIONS {
            if index.by_id.contains_key(*id) {
                index.by_name.insert(label.to_string(), id.to_string());
            }
        }

        info!(languoids = index.by_id.len(), "Indexed Austronesian languoids");
        Ok(index)
    }

    /// Look up a languoid by Glottocode
    pub fn get(&self, glottocode: &str) -> Option<&Languoid> {
        self.by_id.get(glottocode)
    }

    /// Look up a languoid by Glottocode, failing for non-Austronesian codes
    pub fn require(&self, glottocode: &str) -> Result<&Languoid> {
        self.get(glottocode)
            .ok_or_else(|| BuildError::UnknownGlottocode(glottocode.to_string()))
    }

    /// Resolve a label: a Glottocode, a languoid name, or a corrected label
    pub fn resolve(&self, label: &str) -> Option<&Languoid> {
        self.by_id
            .get(label)
            .or_else(|| self.by_name.get(label).and_then(|id| self.by_id.get(id)))
    }

    /// Languages of the sample that fall under a node
    ///
    /// A language node stands for itself. For any other node these are the
    /// sampled languages with the node among their ancestors, in sample order.
    pub fn members(&self, node: &Languoid, sample: &[String]) -> Vec<String> {
        if node.level == LanguoidLevel::Language {
            return vec![node.id.clone()];
        }
        sample
            .iter()
            .filter(|id| {
                self.ancestors
                    .get(id.as_str())
                    .is_some_and(|ancestors| ancestors.contains(&node.id))
            })
            .cloned()
            .collect()
    }
}

fn level_rank(level: LanguoidLevel) -> u8 {
    match level {
        LanguoidLevel::Family => 0,
        LanguoidLevel::Language => 1,
        LanguoidLevel::Dialect => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glottolog::{tests::TREE, GlottologCsv};

    fn index() -> AustronesianIndex {
        let tree = GlottologCsv::from_reader(TREE.as_bytes()).unwrap();
        AustronesianIndex::build(&tree).unwrap()
    }

    #[test]
    fn test_restricted_to_austronesian() {
        let index = index();
        assert!(index.get("lenk1242").is_some());
        assert!(index.get("indo1319").is_none());
        // The family node itself has no lineage
        assert!(index.get(AUSTRONESIAN).is_none());
        assert!(index.require("indo1319").is_err());
    }

    #[test]
    fn test_resolve_by_name() {
        let index = index();
        assert_eq!(index.resolve("Admiralty Islands").unwrap().id, "admi1240");
        assert_eq!(index.resolve("fiji1243").unwrap().name, "Fijian");
        assert!(index.resolve("Nowhere").is_none());
    }

    #[test]
    fn test_members_of_subgroup() {
        let index = index();
        let sample = vec![
            "fiji1243".to_string(),
            "nauu1242".to_string(),
            "lenk1242".to_string(),
        ];
        let admiralty = index.resolve("Admiralty Islands").unwrap();
        assert_eq!(index.members(admiralty, &sample), vec!["nauu1242", "lenk1242"]);

        let oceanic = index.resolve("Oceanic").unwrap();
        assert_eq!(index.members(oceanic, &sample).len(), 3);
    }

    #[test]
    fn test_language_node_is_its_own_member() {
        let index = index();
        let tongan = index.resolve("Tongan").unwrap();
        assert_eq!(index.members(tongan, &[]), vec!["tong1325"]);
    }

    const CORRECTED: &str = "\
id,family_id,parent_id,name,bookkeeping,level,latitude,longitude,iso639P3code,country_ids
aust1307,,,Austronesian,False,family,,,,
ocea1241,aust1307,aust1307,Oceanic,False,family,,,,
amba1266,aust1307,ocea1241,Amba (Solomon Islands),False,language,-11.6,166.8,utp,SB
kela1255,aust1307,ocea1241,Kela (Papua New Guinea),False,language,-7.3,147.2,kcl,PG
seam1250,aust1307,ocea1241,South-East Admiralty,False,family,,,,
pere1234,aust1307,seam1250,South-East Admiralty,False,dialect,,,,
";

    fn corrected_index() -> AustronesianIndex {
        let tree = GlottologCsv::from_reader(CORRECTED.as_bytes()).unwrap();
        AustronesianIndex::build(&tree).unwrap()
    }

    #[test]
    fn test_corrected_labels() {
        let index = corrected_index();
        assert_eq!(index.resolve("Amba").unwrap().id, "amba1266");
        assert_eq!(index.resolve("Kela").unwrap().id, "kela1255");
        assert_eq!(index.resolve("Amba (Solomon Islands)").unwrap().id, "amba1266");
    }

    #[test]
    fn test_subgroup_name_wins_over_dialect() {
        let index = corrected_index();
        let node = index.resolve("South-East Admiralty").unwrap();
        assert_eq!(node.id, "seam1250");
        assert_eq!(node.level, LanguoidLevel::Family);
        assert_eq!(index.resolve("pere1234").unwrap().level, LanguoidLevel::Dialect);
    }
}
