use csv::{Terminator, Writer, WriterBuilder};
use std::{io, path::Path};
use tracing::debug;

use crate::domain::Table;
use crate::error::{Result, TableError};

/// Minimal quoting, CRLF line endings, rows of any length.
pub fn get_writer<W>(wtr: W) -> Writer<W>
where
    W: io::Write,
{
    WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(wtr)
}

pub fn write_content<W>(wtr: &mut Writer<W>, table: &Table) -> std::result::Result<(), csv::Error>
where
    W: io::Write,
{
    for row in table {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn serialize_table(table: &Table) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut wtr = get_writer(vec![]);
    write_content(&mut wtr, table)?;
    wtr.into_inner().map_err(|err| err.into_error().into())
}

/// Writes `table` to `path`, replacing whatever was there.
pub fn write_table<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let to_error = |source: csv::Error| TableError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|err| to_error(err.into()))?;
    write_content(&mut get_writer(file), table).map_err(to_error)?;
    debug!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}
