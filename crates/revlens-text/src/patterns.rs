//! Keyword scanners for edit-summary text.

use regex::{Regex, RegexBuilder};
use revlens_core::{Result, RevlensError};

/// Presence of a `[[...|target]]` wiki link per row.
///
/// Returns 1 for rows whose text contains a bracketed wiki link whose
/// display text is `target` (matched case-insensitively, treated as a
/// literal), 0 otherwise. Rows with no text are 0. Plain mentions outside
/// a bracket link do not count.
///
/// # Errors
///
/// Returns [`RevlensError::Pattern`] if `target` is empty.
///
/// # Examples
///
/// ```
/// use revlens_text::contains_wiki_link;
///
/// let comments = vec![
///     Some("see [[Article|Superfan]]".to_string()),
///     Some("Superfan edits".to_string()),
///     None,
/// ];
/// let column = contains_wiki_link(&comments, "Superfan").unwrap();
/// assert_eq!(column, vec![1, 0, 0]);
/// ```
pub fn contains_wiki_link(texts: &[Option<String>], target: &str) -> Result<Vec<u8>> {
    let pattern = format!(r"\[\[.*?\|{}\]\]", regex::escape(target));
    let re = compile_case_insensitive(&pattern, target)?;

    Ok(texts
        .iter()
        .map(|text| match text {
            Some(t) if re.is_match(t) => 1,
            _ => 0,
        })
        .collect())
}

/// Whole-word occurrence count of `target` per row.
///
/// Case-insensitive, word-boundary delimited, with `target` treated as a
/// literal. Word boundaries fall at any non-word character, so a hyphenated
/// compound like `"Vandalism-prone"` still contains the whole word
/// `"vandalism"`. Rows with no text count 0.
///
/// # Errors
///
/// Returns [`RevlensError::Pattern`] if `target` is empty.
///
/// # Examples
///
/// ```
/// use revlens_text::count_word;
///
/// let comments = vec![
///     Some("vandalism and Vandalism-prone".to_string()),
///     Some("vandalisms".to_string()), // different word, no match
///     None,
/// ];
/// let column = count_word(&comments, "vandalism").unwrap();
/// assert_eq!(column, vec![2, 0, 0]);
/// ```
pub fn count_word(texts: &[Option<String>], target: &str) -> Result<Vec<u64>> {
    let pattern = format!(r"\b{}\b", regex::escape(target));
    let re = compile_case_insensitive(&pattern, target)?;

    Ok(texts
        .iter()
        .map(|text| match text {
            Some(t) => re.find_iter(t).count() as u64,
            None => 0,
        })
        .collect())
}

fn compile_case_insensitive(pattern: &str, target: &str) -> Result<Regex> {
    if target.is_empty() {
        return Err(RevlensError::Pattern("empty search target".into()));
    }
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| RevlensError::Pattern(format!("{pattern}: {e}")))
}
