//! CSV input: comment filtering, header detection, record parsing.

use std::io::{BufRead, BufReader, Read};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Error, Result};
use crate::prefix::NetworkPrefix;

/// Read delimited records from a reader.
///
/// Blank lines and lines whose trimmed form starts with `#` are dropped
/// before CSV parsing; records may have any number of fields (column
/// validation happens in [`parse_records`]). Returns [`Error::EmptyInput`]
/// when nothing survives filtering.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<StringRecord>> {
    let buf_reader = BufReader::new(reader);

    let mut filtered = String::new();
    for line in buf_reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        filtered.push_str(line);
        filtered.push('\n');
    }

    if filtered.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(filtered.as_bytes());

    let mut records = Vec::new();
    for record in csv_reader.records() {
        records.push(record?);
    }

    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(records)
}

/// Header heuristic: any field mentioning "network", "ip", or "cidr".
fn is_header(record: &StringRecord) -> bool {
    record.iter().any(|field| {
        let field = field.to_ascii_lowercase();
        field.contains("network") || field.contains("ip") || field.contains("cidr")
    })
}

/// Parse raw records into canonical prefixes.
///
/// A first record that looks like a header is skipped. Each remaining
/// record is either one field (CIDR notation) or two fields (network
/// address, netmask). Row numbers in errors are 1-based over the data rows
/// that follow the header; the first invalid row aborts the whole batch.
pub fn parse_records(records: &[StringRecord]) -> Result<Vec<NetworkPrefix>> {
    let start = if records.first().map(is_header).unwrap_or(false) {
        1
    } else {
        0
    };

    let data = &records[start..];
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut prefixes = Vec::with_capacity(data.len());
    for (i, record) in data.iter().enumerate() {
        let row = i + 1;
        let prefix = match record.len() {
            1 => NetworkPrefix::from_cidr(&record[0]),
            2 => NetworkPrefix::from_addr_mask(&record[0], &record[1]),
            count => return Err(Error::ColumnCount { row, count }),
        }
        .map_err(|source| Error::Prefix { row, source })?;
        prefixes.push(prefix);
    }

    Ok(prefixes)
}
