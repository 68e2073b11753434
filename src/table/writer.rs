//! CSV output in `network,netmask` form.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::prefix::NetworkPrefix;

/// One output row: network address and netmask, both in address form.
#[derive(Serialize)]
struct RouteRow {
    network: String,
    netmask: String,
}

/// Write prefixes to a writer as CSV.
///
/// Emits a `network,netmask` header followed by one row per prefix, with
/// the netmask rendered in dotted/colon address form rather than slash
/// notation.
pub fn write_records<W: Write>(writer: W, prefixes: &[NetworkPrefix]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["network", "netmask"])?;

    for prefix in prefixes {
        csv_writer.serialize(RouteRow {
            network: prefix.network().to_string(),
            netmask: prefix.netmask().to_string(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
