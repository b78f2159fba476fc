//! First-occurrence deduplication

use std::collections::HashSet;

/// Unique identifiers in the order they first appear
pub fn unique_in_order<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| seen.insert(*item))
        .map(String::from)
        .collect()
}
