use anyhow::{Context, Result};
use std::path::Path;

use crate::app::App;
use crate::view::ConsoleView;

pub fn run(file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let conn = crate::store::open()?;
    let mut app = App::open(conn, ConsoleView)?;
    let count = app.import(&contents)?;
    println!("✓ Imported {count} quotes ({} total)", app.repo().len());
    Ok(())
}
