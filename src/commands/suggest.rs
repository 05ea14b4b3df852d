//! Suggest command - list completions for a partial tag

use crate::{
    Result,
    catalog::TreeCatalog,
    matcher::{AcceptedTags, PathMatcher, Suggestion},
    output::{self, OutputWriter},
};

/// Execute the suggest command
///
/// # Errors
/// Returns an error only if JSON output cannot be encoded
pub fn execute(
    catalog: &TreeCatalog,
    partial: &str,
    accepted: &AcceptedTags,
    max_results: Option<usize>,
    json: bool,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<Vec<Suggestion>> {
    let matcher = PathMatcher::new(catalog);
    let suggestions = matcher.suggest_candidates(partial, accepted, max_results);

    if json {
        out.write(&serde_json::to_string_pretty(&suggestions)?);
    } else if suggestions.is_empty() {
        out.info(&format!("No suggestions for {partial:?}"));
    } else {
        for suggestion in &suggestions {
            out.write(&output::format_suggestion(suggestion, quiet));
        }
    }

    Ok(suggestions)
}
