use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::app::App;
use crate::transfer::DEFAULT_EXPORT_NAME;
use crate::view::ConsoleView;

pub fn run(output: Option<&Path>) -> Result<()> {
    let conn = crate::store::open()?;
    let app = App::open(conn, ConsoleView)?;

    let path: PathBuf = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_NAME));
    app.export(&path)?;
    println!("✓ Exported {} quotes to {}", app.repo().len(), path.display());
    Ok(())
}
