//! Symptom identifier normalization and display labels.
//!
//! Identifiers are lowercase tokens joined by underscores (`sore_throat`).
//! Labels replace underscores with spaces and capitalize each word
//! (`Sore Throat`). Both transforms are idempotent.

use std::collections::HashSet;

/// Turns free-form text into an identifier: trims, lowercases and joins
/// words with a single underscore. Hyphens are part of the backend's
/// vocabulary and are kept.
pub fn normalize_identifier(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// `sore_throat` -> `Sore Throat`. Only the first letter of each word is
/// touched; the rest of the word is kept as-is.
pub fn display_label(identifier: &str) -> String {
    let mut label = String::with_capacity(identifier.len());
    let mut word_start = true;

    for c in identifier.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_whitespace() {
            word_start = true;
            label.push(c);
        } else if word_start {
            label.extend(c.to_uppercase());
            word_start = false;
        } else {
            label.push(c);
        }
    }

    label
}

/// Parses comma-separated input like `"fever, Sore Throat,,cough"` into
/// identifiers, dropping empties and duplicates while keeping input order.
pub fn parse_symptom_list(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    input
        .split([',', ';', '\n'])
        .map(normalize_identifier)
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
