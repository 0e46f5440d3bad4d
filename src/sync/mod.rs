use anyhow::Result;
use serde::Deserialize;

use crate::config::Config;
use crate::quotes::Quote;

/// Category assigned to every record that originates from the server.
pub const SERVER_CATEGORY: &str = "Server";

/// At most this many remote entries are taken per reconciliation.
pub const SYNC_FETCH_LIMIT: usize = 5;

pub const STATUS_SYNCING: &str = "Syncing with server...";
pub const STATUS_SYNCED: &str = "Quotes synced with server!";

/// One entry of the remote collection. Anything beyond the title is ignored.
#[derive(Debug, Deserialize)]
pub struct RemoteEntry {
    pub title: String,
}

/// Map remote entries into quote records: the first `SYNC_FETCH_LIMIT`
/// entries only, text taken from the title, category hard-wired to the
/// server sentinel.
pub fn map_entries(entries: Vec<RemoteEntry>) -> Vec<Quote> {
    entries
        .into_iter()
        .take(SYNC_FETCH_LIMIT)
        .map(|e| Quote::new(e.title, SERVER_CATEGORY))
        .collect()
}

/// Single bounded read against the remote collection. Fails on transport
/// errors, non-success statuses, and unparseable bodies; the caller decides
/// what a failure means for local state (nothing, per the reconcile rule).
pub async fn fetch_server_quotes(cfg: &Config) -> Result<Vec<Quote>> {
    let client = reqwest::Client::new();
    let resp = client.get(&cfg.server_url).send().await?;
    if !resp.status().is_success() {
        anyhow::bail!("Server fetch failed ({})", resp.status());
    }
    let entries: Vec<RemoteEntry> = resp.json().await?;
    Ok(map_entries(entries))
}

/// Fire-and-forget upload of a newly added quote. The response body is
/// ignored; a non-success status is reported so the caller can log it.
pub async fn push_quote(cfg: &Config, quote: &Quote) -> Result<()> {
    let client = reqwest::Client::new();
    let resp = client.post(&cfg.server_url).json(quote).send().await?;
    if !resp.status().is_success() {
        anyhow::bail!("Server rejected the quote ({})", resp.status());
    }
    Ok(())
}
