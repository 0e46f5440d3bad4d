use anyhow::Result;

use crate::app::{App, SyncOutcome};
use crate::config::Config;
use crate::view::ConsoleView;

pub async fn run(cfg: &Config) -> Result<()> {
    let conn = crate::store::open()?;
    let mut app = App::open(conn, ConsoleView)?;

    match app.sync_now(cfg).await {
        SyncOutcome::Synced(count) => {
            println!("✓ Sync complete — {count} quotes from server");
        }
        SyncOutcome::Failed(_) => {
            // The failure status has already been shown; local state is intact
        }
    }
    Ok(())
}
