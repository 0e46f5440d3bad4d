use anyhow::Result;

use crate::app::App;
use crate::config::Config;
use crate::view::ConsoleView;

pub async fn run(cfg: &Config, text: &str, category: &str) -> Result<()> {
    let conn = crate::store::open()?;
    let mut app = App::open(conn, ConsoleView)?;
    let quote = app.add(text, category)?;

    // Fire-and-forget upload; the quote is already stored locally either way
    if let Err(e) = crate::sync::push_quote(cfg, &quote).await {
        tracing::warn!("Upload failed (quote kept locally): {e}");
    }

    Ok(())
}
