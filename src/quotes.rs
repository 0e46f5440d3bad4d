use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Synthetic label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.category)
    }
}

/// The canonical in-memory quote list. Insertion order is significant:
/// it drives category-label ordering and export order.
#[derive(Debug, Default, Clone)]
pub struct Repository {
    quotes: Vec<Quote>,
}

/// Fallback collection used when nothing has been persisted yet.
pub fn seed() -> Vec<Quote> {
    vec![
        Quote::new(
            "The best way to get started is to quit talking and begin doing.",
            "Motivation",
        ),
        Quote::new(
            "Success is not final, failure is not fatal: it is the courage to continue that counts.",
            "Inspiration",
        ),
        Quote::new(
            "Code is like humor. When you have to explain it, it’s bad.",
            "Programming",
        ),
    ]
}

impl Repository {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Append a new quote. Both fields must be non-empty after trimming;
    /// on violation nothing is appended and the error carries the
    /// user-facing message.
    pub fn append(&mut self, text: &str, category: &str) -> Result<&Quote> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            anyhow::bail!("Please enter both quote text and category.");
        }
        self.quotes.push(Quote::new(text, category));
        Ok(self.quotes.last().unwrap())
    }

    /// Append an already-built record verbatim, skipping validation.
    /// Import uses this: imported elements are not re-checked.
    pub fn append_raw(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Discard the current list and substitute `quotes`, any size including
    /// empty. The only way records ever leave the repository.
    pub fn replace_all(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
    }

    /// Distinct category labels in first-seen order, with the synthetic
    /// "all" entry first. Recomputed on every call.
    pub fn categories(&self) -> Vec<String> {
        let mut labels = vec![ALL_CATEGORIES.to_string()];
        for quote in &self.quotes {
            if !labels.iter().any(|l| l == &quote.category) {
                labels.push(quote.category.clone());
            }
        }
        labels
    }

    /// Draw one quote uniformly at random from the records matching
    /// `category` ("all" or absent means everything; matching is
    /// case-sensitive and exact). `None` when nothing matches.
    pub fn pick_with<R: Rng>(&self, rng: &mut R, category: Option<&str>) -> Option<&Quote> {
        let candidates: Vec<&Quote> = match category {
            None | Some(ALL_CATEGORIES) => self.quotes.iter().collect(),
            Some(cat) => self.quotes.iter().filter(|q| q.category == cat).collect(),
        };
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.gen_range(0..candidates.len())])
    }

    pub fn pick(&self, category: Option<&str>) -> Option<&Quote> {
        self.pick_with(&mut rand::thread_rng(), category)
    }
}
