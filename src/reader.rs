use csv::{Reader, ReaderBuilder, StringRecord};
use std::{fs, io, iter, path::Path};
use tracing::debug;

use crate::domain::{Row, Table};
use crate::error::{Result, TableError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Builds a header-less, ragged-row-tolerant reader. Fields are kept verbatim.
pub fn get_reader<R>(rdr: R) -> Reader<R>
where
    R: io::Read,
{
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr)
}

/// Reads every record of `input`, keeping empty lines as empty rows.
///
/// The csv reader skips empty lines, so they are counted back from the raw
/// bytes between the end of one record and the start of the next.
pub fn get_content(input: &[u8]) -> std::result::Result<Table, csv::Error> {
    let mut rdr = get_reader(input);
    let mut table = Table::new();
    let mut record = StringRecord::new();
    loop {
        let offset = rdr.position().byte() as usize;
        let more = rdr.read_record(&mut record)?;
        table.extend(iter::repeat_with(Row::new).take(empty_lines(input, offset)));
        if !more {
            break;
        }
        table.push(record.iter().map(str::to_owned).collect());
    }
    Ok(table)
}

/// Counts the line terminators directly following `offset`.
fn empty_lines(input: &[u8], offset: usize) -> usize {
    let mut rest = input.get(offset..).unwrap_or_default();
    // the reader stops between the two bytes of a CRLF terminator
    if offset.checked_sub(1).and_then(|i| input.get(i)) == Some(&b'\r') {
        rest = rest.strip_prefix(b"\n").unwrap_or(rest);
    }

    let mut count = 0;
    loop {
        rest = match rest {
            [b'\r', b'\n', tail @ ..] | [b'\n', tail @ ..] | [b'\r', tail @ ..] => tail,
            _ => return count,
        };
        count += 1;
    }
}

/// Parses an in-memory buffer, dropping a leading byte-order mark.
pub fn parse_table(bytes: &[u8]) -> std::result::Result<Table, csv::Error> {
    get_content(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
}

/// Reads the whole file at `path` into a [`Table`].
///
/// Every row is data: callers decide whether row 0 is a header.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TableError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => TableError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let table = parse_table(&bytes).map_err(|source| TableError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = table.len(), "read table");
    Ok(table)
}
