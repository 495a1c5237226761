use crate::error::{Result, TableError};

/// A row is a positional list of fields; there are no named columns on disk.
pub type Row = Vec<String>;

/// Rows in file order.
pub type Table = Vec<Row>;

/// Checked positional access. `line` is the row's index in its table.
pub fn field(row: &Row, line: usize, column: usize) -> Result<&str> {
    row.get(column)
        .map(String::as_str)
        .ok_or(TableError::ColumnOutOfRange {
            row: line,
            column,
            len: row.len(),
        })
}

// MonthlyRate is a row of the inflation table seen as [month, rate, ...]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRate<'a> {
    pub month: &'a str,
    pub rate: &'a str,
}

impl<'a> MonthlyRate<'a> {
    pub fn from_row(row: &'a Row, line: usize) -> Result<Self> {
        Ok(Self {
            month: field(row, line, 0)?,
            rate: field(row, line, 1)?,
        })
    }
}

// Transaction is a resale row whose first field is the month key
#[derive(Debug, PartialEq)]
pub struct Transaction {
    fields: Row,
}

impl Transaction {
    pub fn from_row(fields: Row, line: usize) -> Result<Self> {
        field(&fields, line, 0)?;
        Ok(Self { fields })
    }

    pub fn month(&self) -> &str {
        &self.fields[0]
    }

    pub fn with_rate(mut self, rate: &str) -> Row {
        self.fields.push(rate.to_owned());
        self.fields
    }
}
