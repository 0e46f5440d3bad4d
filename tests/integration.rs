use std::path::PathBuf;

use quotedeck::app::{App, SyncOutcome};
use quotedeck::quotes::{self, Quote, Repository};
use quotedeck::store;
use quotedeck::store::session::SessionStore;
use quotedeck::sync::{self, RemoteEntry};
use quotedeck::transfer;
use quotedeck::view::View;

/// Helper: create a temporary kv database for testing
fn test_db() -> (rusqlite::Connection, PathBuf, tempfile::TempDir) {
    let tmp = tempfile::TempDir::new().unwrap();
    let db_path = tmp.path().join("test_quotes.db");
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    store::migrate(&conn).unwrap();
    (conn, db_path, tmp)
}

/// Helper: view double that records everything the app renders
#[derive(Debug, Default)]
struct RecordingView {
    quotes: Vec<Quote>,
    categories: Vec<Vec<String>>,
    statuses: Vec<String>,
}

impl View for RecordingView {
    fn render_quote(&mut self, quote: &Quote) {
        self.quotes.push(quote.clone());
    }

    fn render_categories(&mut self, categories: &[String]) {
        self.categories.push(categories.to_vec());
    }

    fn set_status(&mut self, status: &str) {
        self.statuses.push(status.to_string());
    }
}

fn sample_repo() -> Repository {
    let mut repo = Repository::default();
    repo.append("stay hungry", "Motivation").unwrap();
    repo.append("ship it", "Programming").unwrap();
    repo.append("keep going", "Motivation").unwrap();
    repo.append("read the error", "Programming").unwrap();
    repo
}

// ============================================================
// Repository: append validation

#[test]
fn append_valid_grows_by_one_with_trimmed_fields() {
    let mut repo = Repository::default();
    let quote = repo.append("  stay hungry  ", "  Motivation ").unwrap().clone();

    assert_eq!(repo.len(), 1);
    assert_eq!(quote.text, "stay hungry");
    assert_eq!(quote.category, "Motivation");
}

#[test]
fn append_rejects_empty_fields_without_mutation() {
    let mut repo = sample_repo();
    let before = repo.quotes().to_vec();

    assert!(repo.append("", "Motivation").is_err());
    assert!(repo.append("   ", "Motivation").is_err());
    assert!(repo.append("some text", "").is_err());
    assert!(repo.append("some text", "  ").is_err());

    assert_eq!(repo.quotes(), before.as_slice());
}

// ============================================================
// Category index

#[test]
fn categories_start_with_all_in_first_seen_order() {
    let repo = sample_repo();
    assert_eq!(repo.categories(), vec!["all", "Motivation", "Programming"]);
}

#[test]
fn categories_of_empty_repo_is_just_all() {
    let repo = Repository::default();
    assert_eq!(repo.categories(), vec!["all"]);
}

// ============================================================
// Selection engine

#[test]
fn pick_honors_category_exactly() {
    use rand::SeedableRng;
    let repo = sample_repo();
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let quote = repo.pick_with(&mut rng, Some("Programming")).unwrap();
        assert_eq!(quote.category, "Programming");
    }
}

#[test]
fn pick_with_all_only_returns_stored_records() {
    use rand::SeedableRng;
    let repo = sample_repo();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let quote = repo.pick_with(&mut rng, Some("all")).unwrap();
        assert!(repo.quotes().contains(quote));
    }
}

#[test]
fn pick_is_case_sensitive_and_none_on_no_match() {
    let repo = sample_repo();
    assert!(repo.pick(Some("programming")).is_none());
    assert!(repo.pick(Some("Cooking")).is_none());
    assert!(Repository::default().pick(None).is_none());
}

// ============================================================
// Import / export

#[test]
fn export_then_import_preserves_order_and_values() {
    let repo = sample_repo();
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("quotes.json");

    transfer::export_all(&repo, &path).unwrap();
    let payload = std::fs::read_to_string(&path).unwrap();

    let mut fresh = Repository::default();
    let count = transfer::import_all(&mut fresh, &payload).unwrap();

    assert_eq!(count, repo.len());
    assert_eq!(fresh.quotes(), repo.quotes());
}

#[test]
fn import_rejects_unparseable_and_non_array_payloads() {
    let mut repo = sample_repo();
    let before = repo.quotes().to_vec();

    assert!(transfer::import_all(&mut repo, "not json at all").is_err());
    assert!(transfer::import_all(&mut repo, "{\"text\": \"x\"}").is_err());

    assert_eq!(repo.quotes(), before.as_slice());
}

#[test]
fn import_takes_malformed_elements_verbatim() {
    let mut repo = Repository::default();
    let count = transfer::import_all(
        &mut repo,
        r#"[{"text": "fine", "category": "Ok"}, {"title": "wrong shape"}]"#,
    )
    .unwrap();

    assert_eq!(count, 2);
    assert_eq!(repo.quotes()[0], Quote::new("fine", "Ok"));
    assert_eq!(repo.quotes()[1], Quote::new("", ""));
}

// ============================================================
// Persistent store

#[test]
fn quotes_round_trip_through_the_store() {
    let (conn, _path, _tmp) = test_db();
    let repo = sample_repo();

    store::save_quotes(&conn, repo.quotes()).unwrap();
    let loaded = store::load_quotes(&conn).unwrap().unwrap();

    assert_eq!(loaded.as_slice(), repo.quotes());
}

#[test]
fn missing_or_malformed_quotes_load_as_absent() {
    let (conn, _path, _tmp) = test_db();
    assert!(store::load_quotes(&conn).unwrap().is_none());

    conn.execute(
        "INSERT INTO kv (key, value) VALUES ('quotes', 'not valid json')",
        [],
    )
    .unwrap();
    assert!(store::load_quotes(&conn).unwrap().is_none());
}

#[test]
fn filter_round_trip_survives_a_fresh_open() {
    let (conn, path, _tmp) = test_db();

    let mut app = App::open(conn, RecordingView::default()).unwrap();
    app.set_filter("Programming").unwrap();
    drop(app);

    let conn = rusqlite::Connection::open(&path).unwrap();
    let app = App::open(conn, RecordingView::default()).unwrap();
    assert_eq!(app.active_filter(), "Programming");
}

#[test]
fn app_falls_back_to_seed_when_nothing_is_stored() {
    let (conn, _path, _tmp) = test_db();
    let app = App::open(conn, RecordingView::default()).unwrap();

    assert_eq!(app.repo().quotes(), quotes::seed().as_slice());
}

#[test]
fn seed_collection_is_byte_exact() {
    let seed = quotes::seed();
    assert_eq!(seed.len(), 3);
    assert_eq!(
        seed[2],
        Quote::new(
            "Code is like humor. When you have to explain it, it’s bad.",
            "Programming"
        )
    );
}

// ============================================================
// Config

#[test]
fn config_fills_missing_fields_with_defaults() {
    let cfg: quotedeck::config::Config = toml::from_str("").unwrap();
    assert_eq!(cfg.server_url, "https://jsonplaceholder.typicode.com/posts");
    assert_eq!(cfg.sync_interval_secs, 30);
    assert!(cfg.auto_sync);

    let cfg: quotedeck::config::Config =
        toml::from_str("sync_interval_secs = 5\nauto_sync = false\n").unwrap();
    assert_eq!(cfg.sync_interval_secs, 5);
    assert!(!cfg.auto_sync);
}

// ============================================================
// Session memory

#[test]
fn session_records_and_restores_the_last_shown_quote() {
    let mut session = SessionStore::new();
    assert!(session.last_shown().is_none());

    let quote = Quote::new("ship it", "Programming");
    session.record_last_shown(&quote);
    assert_eq!(session.last_shown(), Some(quote));
}

// ============================================================
// Reconciliation

fn remote_entries(titles: &[&str]) -> Vec<RemoteEntry> {
    titles
        .iter()
        .map(|t| RemoteEntry { title: t.to_string() })
        .collect()
}

#[test]
fn mapping_takes_first_five_with_server_category() {
    let entries = remote_entries(&["a", "b", "c", "d", "e", "f", "g"]);
    let mapped = sync::map_entries(entries);

    assert_eq!(mapped.len(), sync::SYNC_FETCH_LIMIT);
    for (quote, title) in mapped.iter().zip(["a", "b", "c", "d", "e"]) {
        assert_eq!(quote.category, sync::SERVER_CATEGORY);
        assert_eq!(quote.text, title);
    }
}

#[test]
fn successful_reconcile_replaces_persists_and_redraws() {
    let (conn, path, _tmp) = test_db();
    let mut app = App::open(conn, RecordingView::default()).unwrap();
    app.add("local quote", "Local").unwrap();

    let mapped = sync::map_entries(remote_entries(&["a", "b", "c", "d", "e", "f", "g"]));
    let outcome = app.reconcile(Ok(mapped));

    assert_eq!(outcome, SyncOutcome::Synced(5));
    assert_eq!(app.repo().len(), 5);
    for quote in app.repo().quotes() {
        assert_eq!(quote.category, sync::SERVER_CATEGORY);
    }

    // Server records fully replace local state on disk too
    let conn = rusqlite::Connection::open(&path).unwrap();
    let persisted = store::load_quotes(&conn).unwrap().unwrap();
    assert_eq!(persisted.as_slice(), app.repo().quotes());

    // Categories were recomputed, a quote redrawn, success status set
    let view = app.view();
    assert_eq!(view.categories.last().unwrap(), &vec!["all", "Server"]);
    assert_eq!(view.quotes.last().unwrap().category, sync::SERVER_CATEGORY);
    assert_eq!(view.statuses.last().unwrap(), sync::STATUS_SYNCED);
}

#[test]
fn failed_reconcile_leaves_local_state_untouched() {
    let (conn, path, _tmp) = test_db();
    let mut app = App::open(conn, RecordingView::default()).unwrap();
    app.add("local quote", "Local").unwrap();
    let before = app.repo().quotes().to_vec();

    let outcome = app.reconcile(Err(anyhow::anyhow!("connection refused")));

    assert_eq!(outcome, SyncOutcome::Failed("connection refused".to_string()));
    assert_eq!(app.repo().quotes(), before.as_slice());
    assert_eq!(
        app.view().statuses.last().unwrap(),
        "Sync failed: connection refused"
    );

    let conn = rusqlite::Connection::open(&path).unwrap();
    let persisted = store::load_quotes(&conn).unwrap().unwrap();
    assert_eq!(persisted, before);
}

// ============================================================
// Controller

#[test]
fn draw_respects_the_saved_filter_and_reports_empty_sets() {
    let (conn, _path, _tmp) = test_db();
    let mut app = App::open(conn, RecordingView::default()).unwrap();
    app.set_filter("Programming").unwrap();

    app.draw(None);
    assert_eq!(app.view().quotes.last().unwrap().category, "Programming");

    app.draw(Some("Cooking"));
    assert_eq!(
        app.view().statuses.last().unwrap(),
        quotedeck::app::NO_QUOTES_MESSAGE
    );
}

#[test]
fn add_persists_and_sets_a_status() {
    let (conn, path, _tmp) = test_db();
    let mut app = App::open(conn, RecordingView::default()).unwrap();

    let before = app.repo().len();
    app.add("new one", "Fresh").unwrap();
    assert_eq!(app.repo().len(), before + 1);
    assert_eq!(app.view().statuses.last().unwrap(), "Quote added successfully!");

    let conn = rusqlite::Connection::open(&path).unwrap();
    let persisted = store::load_quotes(&conn).unwrap().unwrap();
    assert_eq!(persisted.last().unwrap(), &Quote::new("new one", "Fresh"));
}

#[tokio::test]
async fn stop_without_a_pid_file_is_a_quiet_noop() {
    let pid_path = quotedeck::config::Config::pid_path().unwrap();
    if pid_path.exists() {
        // A watch loop really is running; don't interfere with it
        return;
    }
    assert!(quotedeck::watch::stop().await.is_ok());
    assert!(!pid_path.exists());
}

#[test]
fn invalid_add_surfaces_a_validation_error_and_stores_nothing() {
    let (conn, path, _tmp) = test_db();
    let mut app = App::open(conn, RecordingView::default()).unwrap();

    assert!(app.add("  ", "Motivation").is_err());
    assert_eq!(app.repo().quotes(), quotes::seed().as_slice());

    let conn = rusqlite::Connection::open(&path).unwrap();
    assert!(store::load_quotes(&conn).unwrap().is_none());
}
