pub mod config;
pub mod domain;
pub mod error;
pub mod reader;
pub mod writer;

use std::path::Path;
use tracing::info;

pub use domain::{filter_rows, join, InflationIndex, Row, Table};
pub use error::{Result, TableError};
use reader::read_table;
use writer::write_table;

/// Inflation pipeline runner
///
/// Reads the inflation rates and the resale transactions found in `dir`,
/// appends each transaction's monthly rate and writes the enriched table.
/// The output file is only written once every transaction has a rate.
/// Returns the number of rows written.
///
/// ```no_run
/// let rows = resale_inflation::append_inflation(std::path::Path::new(".")).unwrap();
/// println!("{} rows", rows);
/// ```
pub fn append_inflation(dir: &Path) -> Result<usize> {
    let inflation = read_table(dir.join(config::INFLATION_FILE))?;
    let index = InflationIndex::from_table(&inflation)?;
    info!(months = index.len(), "built inflation index");

    let prices = read_table(dir.join(config::RESALE_PRICES_FILE))?;
    let joined = join(&index, prices)?;

    let output = dir.join(config::AUGMENTED_OUTPUT_FILE);
    write_table(&joined, &output)?;
    info!(rows = joined.len(), output = %output.display(), "appended inflation rates");
    Ok(joined.len())
}

/// Category pipeline runner
///
/// Keeps the rows of the working prices file whose flat type is
/// [`config::CATEGORY_VALUE`], dropping the header, and writes them out.
/// Returns the number of rows written.
pub fn filter_category(dir: &Path) -> Result<usize> {
    let filtered = domain::filter_file(
        config::CATEGORY_COLUMN,
        config::CATEGORY_VALUE,
        dir.join(config::FILTER_INPUT_FILE),
    )?;

    let output = dir.join(config::FILTER_OUTPUT_FILE);
    write_table(&filtered, &output)?;
    info!(rows = filtered.len(), output = %output.display(), "filtered by category");
    Ok(filtered.len())
}

/// Installs the stderr log subscriber used by both binaries.
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let env = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}
