pub mod filter;
pub mod inflation;
pub mod table;

pub use filter::{filter_file, filter_rows};
pub use inflation::{join, InflationIndex};
pub use table::{field, MonthlyRate, Row, Table, Transaction};
