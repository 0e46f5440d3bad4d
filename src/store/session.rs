use std::collections::HashMap;

use crate::quotes::Quote;

pub const LAST_SHOWN_KEY: &str = "lastViewedQuote";

/// Scratch storage with the lifetime of the current process, standing in
/// for a tab-scoped session store. Writes are best-effort: a value that
/// fails to serialize is silently skipped, never an error.
#[derive(Debug, Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_last_shown(&mut self, quote: &Quote) {
        if let Ok(json) = serde_json::to_string(quote) {
            self.values.insert(LAST_SHOWN_KEY.to_string(), json);
        }
    }

    /// Restoration hook: the quote most recently shown this session, if any.
    pub fn last_shown(&self) -> Option<Quote> {
        let raw = self.values.get(LAST_SHOWN_KEY)?;
        serde_json::from_str(raw).ok()
    }
}
