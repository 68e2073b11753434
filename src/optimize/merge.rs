//! Adjacent-sibling merging.

use crate::prefix::NetworkPrefix;

/// Collapse sibling prefixes into their parent supernet, repeated until no
/// further collapse is possible.
///
/// Each pass sorts by address so siblings land next to each other, then
/// scans consecutive pairs, replacing a sibling pair with its newly
/// constructed parent (see [`NetworkPrefix::try_merge`]). A merge at length
/// `L` can create a fresh sibling pair at `L-1`, so passes repeat while any
/// merge occurred. Each merge removes an element, so the loop terminates.
///
/// Repeated full passes are O(n² log n) worst case, acceptable for
/// route-table-sized inputs.
pub fn merge(mut prefixes: Vec<NetworkPrefix>) -> Vec<NetworkPrefix> {
    if prefixes.len() < 2 {
        return prefixes;
    }

    loop {
        prefixes.sort_unstable_by(|a, b| a.cmp_by_address(b));

        let mut merged_once = false;
        let mut next = Vec::with_capacity(prefixes.len());

        let mut i = 0;
        while i < prefixes.len() {
            if i + 1 < prefixes.len() {
                if let Some(parent) = prefixes[i].try_merge(&prefixes[i + 1]) {
                    next.push(parent);
                    merged_once = true;
                    i += 2;
                    continue;
                }
            }
            next.push(prefixes[i]);
            i += 1;
        }

        prefixes = next;

        if !merged_once {
            break;
        }
    }

    prefixes
}
