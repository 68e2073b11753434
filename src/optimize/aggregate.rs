//! Containment-based aggregation.

use crate::prefix::NetworkPrefix;

/// Remove every prefix whose address range is fully covered by another
/// prefix in the set.
///
/// Sorts broadest-first (prefix length ascending, ties by address), then
/// scans once: a candidate is discarded when some already-accepted prefix
/// contains it. The sort guarantees every prefix that could contain a
/// candidate is examined before it, so a single forward pass suffices.
/// Same-length prefixes are either disjoint or identical and can never
/// eliminate one another; identical ones are expected to have been removed
/// by [`deduplicate`](super::deduplicate) already.
///
/// The pairwise scan is O(n²) worst case, which is fine for
/// route-table-sized inputs.
pub fn aggregate(mut prefixes: Vec<NetworkPrefix>) -> Vec<NetworkPrefix> {
    if prefixes.len() < 2 {
        return prefixes;
    }

    prefixes.sort_unstable();

    let mut accepted: Vec<NetworkPrefix> = Vec::with_capacity(prefixes.len());
    for candidate in prefixes {
        let contained = accepted.iter().any(|a| a.contains(&candidate));
        if !contained {
            accepted.push(candidate);
        }
    }

    accepted
}
