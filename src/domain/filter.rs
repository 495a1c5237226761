use std::path::Path;
use tracing::debug;

use super::table::{field, Table};
use crate::error::Result;
use crate::reader::read_table;

/// Keeps the rows whose `column` equals `desire` byte for byte.
///
/// Row 0 is always treated as a header and never appears in the result.
/// A row too short to have `column` fails the whole filter.
pub fn filter_rows(table: &Table, column: usize, desire: &str) -> Result<Table> {
    let mut filtered = Table::new();
    for (line, row) in table.iter().enumerate().skip(1) {
        if field(row, line, column)? == desire {
            filtered.push(row.clone());
        }
    }
    debug!(
        scanned = table.len().saturating_sub(1),
        kept = filtered.len(),
        column,
        desire,
        "filtered rows"
    );
    Ok(filtered)
}

pub fn filter_file<P: AsRef<Path>>(column: usize, desire: &str, path: P) -> Result<Table> {
    filter_rows(&read_table(path)?, column, desire)
}
