//! Ingredient list tokenizer. Every analyzer matches against tokens
//! produced here, so splitting behavior lives in exactly one place.

use std::collections::HashSet;

/// Normalize a raw ingredient string into distinct, lower-cased, trimmed
/// tokens, splitting on commas and semicolons.
///
/// First-occurrence order is preserved; empty input yields an empty list.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for raw in text.split([',', ';']) {
        let token = raw.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }
    tokens
}
