//! The three-stage prefix reduction pipeline.
//!
//! Stage order is fixed: [`deduplicate`], then [`aggregate`], then
//! [`merge`]. Aggregation must run before merging because the merge stage
//! only recognizes exact same-length sibling pairs and would miss
//! reductions available through plain containment. Every stage consumes and
//! returns a fresh `Vec`; none of them can fail.

mod aggregate;
mod dedup;
mod merge;

pub use aggregate::aggregate;
pub use dedup::deduplicate;
pub use merge::merge;

use crate::prefix::NetworkPrefix;

/// Run the full reduction pipeline over a list of prefixes.
///
/// Logs the survivor count after each stage at info level.
pub fn optimize(prefixes: Vec<NetworkPrefix>) -> Vec<NetworkPrefix> {
    log::info!("original number of prefixes: {}", prefixes.len());

    let prefixes = deduplicate(prefixes);
    log::info!("after deduplication: {}", prefixes.len());

    let prefixes = aggregate(prefixes);
    log::info!("after aggregation: {}", prefixes.len());

    let prefixes = merge(prefixes);
    log::info!("after merging: {}", prefixes.len());

    prefixes
}
