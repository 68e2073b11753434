//! Exact-duplicate removal.

use ahash::AHashSet;

use crate::prefix::NetworkPrefix;

/// Remove exact duplicate prefixes, keeping each prefix's first occurrence.
///
/// Two prefixes are duplicates when family, prefix length, and network
/// address all match. Survivor order follows the input. Inputs shorter than
/// two elements are returned unchanged.
pub fn deduplicate(prefixes: Vec<NetworkPrefix>) -> Vec<NetworkPrefix> {
    if prefixes.len() < 2 {
        return prefixes;
    }

    let mut seen = AHashSet::with_capacity(prefixes.len());
    prefixes.into_iter().filter(|p| seen.insert(*p)).collect()
}
