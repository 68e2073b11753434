//! CSV collaborators for the reduction pipeline.
//!
//! The reader side turns a delimited file into raw records and then into
//! canonical prefixes; the writer side renders prefixes back out in
//! `network,netmask` form. All validation failures are fail-fast and carry
//! the 1-based data row number.

mod reader;
mod writer;

pub use reader::{parse_records, read_records};
pub use writer::write_records;
