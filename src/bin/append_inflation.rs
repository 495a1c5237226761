use anyhow::{Context, Result};
use resale_inflation::{append_inflation, config, init_logging};
use std::path::Path;

fn main() -> Result<()> {
    init_logging();
    append_inflation(Path::new(".")).with_context(|| {
        format!(
            "appending inflation rates from {} to {}",
            config::INFLATION_FILE,
            config::RESALE_PRICES_FILE
        )
    })?;
    Ok(())
}
