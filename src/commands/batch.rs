//! Batch command - classify tags in insertion order

use crate::{
    Result,
    catalog::TreeCatalog,
    commands::check::Evaluated,
    matcher::{AcceptedTags, MatchResult, PathMatcher, Selection},
    output::{self, OutputWriter},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    results: Vec<Evaluated<'a>>,
    selection: &'a Selection,
}

/// Execute the batch command
///
/// Tags are evaluated left to right; each one sees the canonical tags of
/// the ones before it as accepted. The resulting selection is printed after
/// the individual results.
///
/// # Errors
/// Returns an error only if JSON output cannot be encoded
pub fn execute(
    catalog: &TreeCatalog,
    tags: &[String],
    preexisting: &AcceptedTags,
    json: bool,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<(Vec<MatchResult>, Selection)> {
    let matcher = PathMatcher::new(catalog);
    let results = matcher.evaluate_batch(tags, preexisting);
    let selection = matcher.selection(&results);

    if json {
        let report = BatchReport {
            results: tags
                .iter()
                .zip(&results)
                .map(|(raw, result)| Evaluated { raw, result })
                .collect(),
            selection: &selection,
        };
        out.write(&serde_json::to_string_pretty(&report)?);
    } else {
        for (raw, result) in tags.iter().zip(&results) {
            out.write(&output::format_result(raw, result, quiet));
        }
        if selection.is_empty() {
            out.info("Nothing selected");
        } else {
            for line in output::format_selection(&selection) {
                out.info(&line);
            }
        }
    }

    Ok((results, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOptions;
    use crate::matcher::MatchStatus;
    use crate::output::{BufferWriter, MessageLevel};
    use crate::testing::flat_forest;

    #[test]
    fn test_batch_marks_later_copies() {
        let catalog = TreeCatalog::build(flat_forest(), CatalogOptions::default()).unwrap();
        let out = BufferWriter::new();
        let tags = vec!["Data".to_string(); 3];

        let (results, selection) =
            execute(&catalog, &tags, &AcceptedTags::new(), false, false, &out).unwrap();

        let statuses: Vec<_> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![MatchStatus::Valid, MatchStatus::Duplicate, MatchStatus::Duplicate]
        );
        assert_eq!(selection.selected_ids, vec!["1"]);
        assert_eq!(out.messages_at(MessageLevel::Info).len(), 3);
    }

    #[test]
    fn test_batch_json_contains_selection() {
        let catalog = TreeCatalog::build(flat_forest(), CatalogOptions::default()).unwrap();
        let out = BufferWriter::new();
        let tags = vec!["Data".to_string(), "Nope".to_string()];

        execute(&catalog, &tags, &AcceptedTags::new(), true, false, &out).unwrap();

        let printed = out.messages_at(MessageLevel::Normal);
        let value: serde_json::Value = serde_json::from_str(&printed[0]).unwrap();
        assert_eq!(value["results"][1]["status"], "invalid");
        assert_eq!(value["selection"]["selected_tags"][0], "Data");
    }

    #[test]
    fn test_batch_nothing_selected() {
        let catalog = TreeCatalog::build(flat_forest(), CatalogOptions::default()).unwrap();
        let out = BufferWriter::new();
        let tags = vec!["Nope".to_string()];

        execute(&catalog, &tags, &AcceptedTags::new(), false, false, &out).unwrap();
        assert_eq!(out.messages_at(MessageLevel::Info), vec!["Nothing selected"]);
    }
}
