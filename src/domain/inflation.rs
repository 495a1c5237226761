use std::collections::HashMap;
use tracing::warn;

use super::table::{MonthlyRate, Row, Table, Transaction};
use crate::error::{Result, TableError};

/// Month key to inflation rate, both kept as the raw strings read from disk.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InflationIndex {
    rates: HashMap<String, String>,
}

impl InflationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row is data, including a textual header if the file has one.
    /// A repeated month keeps the rate of its last row.
    pub fn from_table(table: &Table) -> Result<Self> {
        let mut index = Self::new();
        for (line, row) in table.iter().enumerate() {
            let entry = MonthlyRate::from_row(row, line)?;
            if let Some(previous) = index.insert(entry) {
                warn!(
                    month = entry.month,
                    previous = %previous,
                    rate = entry.rate,
                    "duplicate month in inflation table, keeping the later rate"
                );
            }
        }
        Ok(index)
    }

    pub fn insert(&mut self, entry: MonthlyRate<'_>) -> Option<String> {
        self.rates
            .insert(entry.month.to_owned(), entry.rate.to_owned())
    }

    pub fn get(&self, month: &str) -> Option<&str> {
        self.rates.get(month).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Appends the matching inflation rate to every row of `prices`.
///
/// No header is skipped. The first month without a rate aborts the join and
/// nothing of the partially enriched table is returned.
pub fn join(index: &InflationIndex, prices: Table) -> Result<Table> {
    prices
        .into_iter()
        .enumerate()
        .map(|(line, row)| enrich(index, row, line))
        .collect()
}

fn enrich(index: &InflationIndex, row: Row, line: usize) -> Result<Row> {
    let transaction = Transaction::from_row(row, line)?;
    match index.get(transaction.month()) {
        Some(rate) => Ok(transaction.with_rate(rate)),
        None => Err(TableError::MissingKey {
            month: transaction.month().to_owned(),
            row: line,
        }),
    }
}
