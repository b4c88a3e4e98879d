//! README for the CLDF directory

use crate::dataset::{files, Dataset};

const NOTES: &str = "\
### Forms

Counterparts for 'five' and 'hand' in Austronesian languages have been collected from four \
datasets described in the [ContributionTable](contributions.csv). Since forms were aggregated on \
language level (with forms for dialects taken as forms for the parent language) and across \
datasets, often more than one word per language and concept was attested. If multiple forms were \
attested, one was chosen trying to \"maximize potential for colexification\". I.e. the pair of \
forms picked for a language is the one closest to exhibiting (partial) colexification. This is \
done to minimize \"false negatives\": i.e., cases where there could appear to be *no* \
colexification of the two concepts, but only because there are, e.g., two synonyms for 'hand' \
and the particular dataset chose the \"wrong\" one.

### Features

Based on the words for 'five' and 'hand' collected in the [FormTable](forms.csv) and inferred \
replacement events (described below), features have been coded, with values reported in the \
[ValueTable](values.csv). The distribution of values for these features can be investigated \
using [geographical maps](../maps/README.md).

### Replacement events

Replacement events, i.e. rows in the [replacements table](replacements.csv), represent a \
probable loss of the inherited form ‘hand’ or ‘five’, whether in the individual history of a \
single language or in a protolanguage ancestral to multiple languages, with Glottolog languoids \
serving as proxies. While the replacements table lists the name of this languoid, the individual \
languages in our sample which fall into this subgroup are linked via the Glottocodes in the \
`Language_IDs` column. Conservative events that may reflect one change are linked through \
matching values in the `Replacement_Group` column.
";

/// Render the README for a dataset
pub fn render(title: &str, dataset: &Dataset) -> String {
    let mut lines = vec![
        format!("# {}", title),
        String::new(),
        "## Description".to_string(),
        String::new(),
        NOTES.trim_end().to_string(),
        String::new(),
        "## Statistics".to_string(),
        String::new(),
        "Table | Rows".to_string(),
        "--- | ---:".to_string(),
    ];
    for (file, rows) in dataset.row_counts() {
        lines.push(format!("[{}]({}) | {}", file, file, rows));
    }
    lines.push(String::new());
    lines.push(format!("Metadata: [{}]({})", files::METADATA, files::METADATA));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample;

    #[test]
    fn test_readme_lists_row_counts() {
        let text = render("Hand and five", &sample());
        assert!(text.starts_with("# Hand and five"));
        assert!(text.contains("[values.csv](values.csv) | 1"));
        assert!(text.contains("### Replacement events"));
    }

    #[test]
    fn test_readme_sections_are_separated() {
        let text = render("Hand and five", &sample());
        assert!(text.contains("# Hand and five\n\n## Description\n\n### Forms"));
        assert!(text.contains("column.\n\n## Statistics\n\nTable | Rows\n--- | ---:\n"));
        let metadata = format!("\nMetadata: [{0}]({0})\n", files::METADATA);
        assert!(text.ends_with(&metadata));
    }
}
