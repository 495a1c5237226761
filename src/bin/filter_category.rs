use anyhow::{Context, Result};
use resale_inflation::{config, filter_category, init_logging};
use std::path::Path;

fn main() -> Result<()> {
    init_logging();
    filter_category(Path::new("."))
        .with_context(|| format!("filtering {}", config::FILTER_INPUT_FILE))?;
    Ok(())
}
