//! Fixed file names and filter constants.
//!
//! Both binaries resolve these against the current working directory.

/// Monthly inflation rates, rows of `[month, rate]`, no header.
pub const INFLATION_FILE: &str = "inflation.csv";

/// Resale transactions to enrich, rows of `[month, ...]`, no header.
pub const RESALE_PRICES_FILE: &str = "filtered_agg_data_3room.csv";

/// Resale transactions with the inflation rate appended.
pub const AUGMENTED_OUTPUT_FILE: &str = "full_agg_data.csv";

/// Input of the category filter, row 0 is a header.
pub const FILTER_INPUT_FILE: &str = "workingfile_prices.csv";

/// Rows of the filter input matching the category.
pub const FILTER_OUTPUT_FILE: &str = "filtered_data_3room.csv";

/// Flat type column in the filter input.
pub const CATEGORY_COLUMN: usize = 1;

/// Flat type kept by the category filter, compared exactly.
pub const CATEGORY_VALUE: &str = "3 ROOM";
