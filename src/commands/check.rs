//! Check command - classify tags independently

use crate::{
    Result,
    catalog::TreeCatalog,
    matcher::{AcceptedTags, MatchResult, PathMatcher},
    output::{self, OutputWriter},
};
use serde::Serialize;

/// One input tag with its classification, as emitted in JSON mode
#[derive(Debug, Serialize)]
pub struct Evaluated<'a> {
    pub raw: &'a str,
    #[serde(flatten)]
    pub result: &'a MatchResult,
}

/// Execute the check command
///
/// Every tag is evaluated against the same accepted set; tags in the list do
/// not affect each other.
///
/// # Errors
/// Returns an error only if JSON output cannot be encoded
pub fn execute(
    catalog: &TreeCatalog,
    tags: &[String],
    accepted: &AcceptedTags,
    json: bool,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<Vec<MatchResult>> {
    let matcher = PathMatcher::new(catalog);
    let results: Vec<MatchResult> = tags
        .iter()
        .map(|tag| matcher.evaluate(tag, accepted))
        .collect();

    if json {
        let rows: Vec<Evaluated<'_>> = tags
            .iter()
            .zip(&results)
            .map(|(raw, result)| Evaluated { raw, result })
            .collect();
        out.write(&serde_json::to_string_pretty(&rows)?);
    } else {
        for (raw, result) in tags.iter().zip(&results) {
            out.write(&output::format_result(raw, result, quiet));
        }
        let valid = results.iter().filter(|r| r.is_valid()).count();
        out.info(&format!("{valid} of {} tag(s) valid", results.len()));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOptions;
    use crate::matcher::MatchStatus;
    use crate::output::{BufferWriter, MessageLevel};
    use crate::testing::deep_forest;

    #[test]
    fn test_check_is_independent_per_tag() {
        let catalog = TreeCatalog::build(deep_forest(), CatalogOptions::default()).unwrap();
        let out = BufferWriter::new();
        let tags = vec!["Data".to_string(), "Data".to_string(), "Nope".to_string()];

        let results = execute(&catalog, &tags, &AcceptedTags::new(), false, true, &out).unwrap();
        let statuses: Vec<_> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![MatchStatus::Valid, MatchStatus::Valid, MatchStatus::Invalid]
        );
        assert_eq!(
            out.messages_at(MessageLevel::Normal),
            vec!["Valid\tData", "Valid\tData", "Invalid\tNope"]
        );
    }

    #[test]
    fn test_check_json() {
        let catalog = TreeCatalog::build(deep_forest(), CatalogOptions::default()).unwrap();
        let out = BufferWriter::new();
        let tags = vec!["Data:Subdata".to_string()];
        let accepted: AcceptedTags = ["Data:Subdata"].into_iter().collect();

        execute(&catalog, &tags, &accepted, true, false, &out).unwrap();

        let printed = out.messages_at(MessageLevel::Normal);
        let value: serde_json::Value = serde_json::from_str(&printed[0]).unwrap();
        assert_eq!(value[0]["raw"], "Data:Subdata");
        assert_eq!(value[0]["status"], "duplicate");
        assert_eq!(value[0]["structural_status"], "valid");
        assert_eq!(value[0]["matched_path_ids"][1], "1.1");
    }
}
