//! Tie-inclusive maximum selection.

use std::collections::BTreeMap;

use ahash::AHashMap;

/// Reduce a count map to the entries sharing the maximum value, in
/// ascending key order (codepoint order).
///
/// An empty input yields an empty map; the caller decides whether that is
/// an error.
pub fn max_entries(counts: &AHashMap<String, u64>) -> BTreeMap<String, u64> {
    let Some(max) = counts.values().copied().max() else {
        return BTreeMap::new();
    };

    counts
        .iter()
        .filter(|&(_, &count)| count == max)
        .map(|(key, &count)| (key.clone(), count))
        .collect()
}
