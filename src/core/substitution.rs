//! Positional placeholder substitution
//!
//! Re-identification replaces vocabulary marker `i` with removed value
//! `i`. The whole document is rewritten in one pass: every marker with
//! a value joins a single alternation, and each occurrence is looked
//! up as it is encountered. Markers are matched literally; values may
//! contain regex metacharacters without effect.

use crate::domain::vocabulary::PlaceholderKind;
use regex::Regex;
use std::collections::HashMap;

/// Substitutes removed values back into a cleansed document
///
/// `values[i]` replaces every occurrence of vocabulary marker `i`, for
/// `i` in `0..min(values.len(), 11)`. Values beyond the vocabulary are
/// ignored; markers without a value are left verbatim. The operation
/// is pure, so repeating it over the same inputs yields the same
/// output.
pub fn restore_placeholders(document: &str, values: &[String]) -> String {
    let count = values.len().min(PlaceholderKind::ALL.len());
    if count == 0 {
        return document.to_string();
    }

    let mut replacements: HashMap<&str, &str> = HashMap::with_capacity(count);
    for (kind, value) in PlaceholderKind::ALL.iter().zip(values) {
        replacements.insert(kind.marker(), value.as_str());
    }

    let pattern = PlaceholderKind::ALL[..count]
        .iter()
        .map(|kind| regex::escape(kind.marker()))
        .collect::<Vec<_>>()
        .join("|");
    // The alternation is built from the fixed marker set; it always compiles.
    let matcher = Regex::new(&pattern).expect("vocabulary markers form a valid pattern");

    matcher
        .replace_all(document, |caps: &regex::Captures<'_>| {
            replacements[caps.get(0).map(|m| m.as_str()).unwrap_or_default()].to_string()
        })
        .into_owned()
}
