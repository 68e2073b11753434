//! cidrpack - compact IP prefix lists.
//!
//! This crate reduces a list of IPv4/IPv6 network prefixes to a minimal,
//! non-redundant, non-overlapping set covering the same address space, for
//! shrinking route tables or access-control lists before they are installed
//! into a router, firewall, or policy engine.
//!
//! # Features
//!
//! - **Deduplication**: exact duplicates removed, first occurrence kept
//! - **Aggregation**: prefixes fully covered by a broader prefix removed
//! - **Merging**: adjacent sibling prefixes collapsed into their parent
//!   supernet, repeated to a fixpoint
//! - **Dual family**: IPv4 and IPv6 handled side by side, never mixed
//! - **CSV in/out**: `address/length` or `network,netmask` rows in,
//!   `network,netmask` rows out
//!
//! # Quick Start
//!
//! ```
//! use cidrpack::{optimize, NetworkPrefix};
//!
//! let routes = vec![
//!     NetworkPrefix::from_cidr("192.168.0.0/24").unwrap(),
//!     NetworkPrefix::from_cidr("192.168.1.0/24").unwrap(),
//!     NetworkPrefix::from_cidr("10.1.0.0/16").unwrap(),
//!     NetworkPrefix::from_cidr("10.0.0.0/8").unwrap(),
//! ];
//!
//! let compact = optimize(routes);
//! let rendered: Vec<String> = compact.iter().map(|n| n.to_string()).collect();
//! assert_eq!(rendered, vec!["10.0.0.0/8", "192.168.0.0/23"]);
//! ```
//!
//! # Pipeline Order
//!
//! The stage order is fixed: deduplicate, then aggregate, then merge.
//! Aggregation must precede merging because the merge stage only recognizes
//! exact same-length sibling pairs and would miss reductions available
//! through plain containment. The stages are also exposed individually in
//! [`optimize`].

mod error;
mod prefix;

pub mod optimize;
pub mod table;

// Re-export core types
pub use error::{Error, Result};
pub use prefix::{NetworkPrefix, PrefixError};

// Re-export the pipeline and its stages
pub use optimize::{aggregate, deduplicate, merge, optimize};

// Re-export the CSV collaborators
pub use table::{parse_records, read_records, write_records};
