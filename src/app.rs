use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::quotes::{self, Quote, Repository, ALL_CATEGORIES};
use crate::store::{self, session::SessionStore};
use crate::sync;
use crate::transfer;
use crate::view::View;

pub const NO_QUOTES_MESSAGE: &str = "No quotes available.";

/// Terminal result of one reconciliation cycle. The app is back to idle
/// either way; the next trigger is simply the next timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Synced(usize),
    Failed(String),
}

/// Owns all application state: the canonical repository, the persistent
/// store handle, the session scratch and the active category filter.
/// Every user-visible effect goes through the view seam.
pub struct App<V: View> {
    repo: Repository,
    conn: Connection,
    session: SessionStore,
    filter: Option<String>,
    view: V,
}

impl<V: View> App<V> {
    /// Build from persisted state: stored quotes or the seed fallback,
    /// plus the last-selected filter. The filter is restored as-is even
    /// if it names a category no longer present.
    pub fn open(conn: Connection, view: V) -> Result<Self> {
        let repo = Repository::new(store::load_quotes(&conn)?.unwrap_or_else(quotes::seed));
        let filter = store::load_filter(&conn)?;
        Ok(Self {
            repo,
            conn,
            session: SessionStore::new(),
            filter,
            view,
        })
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn active_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    /// Draw one random quote, narrowed by `category` when given, else by
    /// the persisted filter. An empty candidate set is a status line, not
    /// an error.
    pub fn draw(&mut self, category: Option<&str>) {
        let active = category.unwrap_or(self.filter.as_deref().unwrap_or(ALL_CATEGORIES));
        match self.repo.pick(Some(active)) {
            Some(quote) => {
                self.session.record_last_shown(quote);
                self.view.render_quote(quote);
            }
            None => self.view.set_status(NO_QUOTES_MESSAGE),
        }
    }

    /// Validate and append a new quote, then persist the whole list.
    /// Returns the stored record so the caller can forward it upstream.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let quote = self.repo.append(text, category)?.clone();
        store::save_quotes(&self.conn, self.repo.quotes())?;
        self.view.set_status("Quote added successfully!");
        Ok(quote)
    }

    pub fn set_filter(&mut self, category: &str) -> Result<()> {
        store::save_filter(&self.conn, category)?;
        self.filter = Some(category.to_string());
        Ok(())
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        transfer::export_all(&self.repo, path)
    }

    /// Append an uploaded payload's records and persist. A parse failure
    /// surfaces before anything is appended — no partial import.
    pub fn import(&mut self, contents: &str) -> Result<usize> {
        let count = transfer::import_all(&mut self.repo, contents)?;
        store::save_quotes(&self.conn, self.repo.quotes())?;
        self.view.set_status("Quotes imported successfully!");
        Ok(count)
    }

    /// Apply one reconciliation cycle to local state. Takes the fetch
    /// result rather than fetching itself, so the overwrite rule stays
    /// testable without a network. Remote state always wins: on success
    /// the repository is wholesale replaced, persisted, categories are
    /// recomputed and a quote redrawn. On failure local state is left
    /// untouched and only the status line changes.
    pub fn reconcile(&mut self, fetched: Result<Vec<Quote>>) -> SyncOutcome {
        match fetched {
            Ok(quotes) => {
                let count = quotes.len();
                self.repo.replace_all(quotes);
                if let Err(e) = store::save_quotes(&self.conn, self.repo.quotes()) {
                    tracing::warn!("Failed to persist synced quotes: {e}");
                }
                let categories = self.repo.categories();
                self.view.render_categories(&categories);
                self.draw(None);
                self.view.set_status(sync::STATUS_SYNCED);
                SyncOutcome::Synced(count)
            }
            Err(e) => {
                let reason = e.to_string();
                self.view.set_status(&format!("Sync failed: {reason}"));
                SyncOutcome::Failed(reason)
            }
        }
    }

    /// Full cycle against the configured server: status to syncing, one
    /// bounded fetch, then the reconcile rule above.
    pub async fn sync_now(&mut self, cfg: &crate::config::Config) -> SyncOutcome {
        self.view.set_status(sync::STATUS_SYNCING);
        let fetched = sync::fetch_server_quotes(cfg).await;
        self.reconcile(fetched)
    }

    /// Re-render the quote last shown this session, if any. Used once at
    /// watch-loop startup.
    pub fn restore_last_shown(&mut self) {
        if let Some(quote) = self.session.last_shown() {
            self.view.render_quote(&quote);
        }
    }
}
