pub mod session;

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::config::Config;
use crate::quotes::Quote;

/// Fixed keys in the kv table. The whole quote list lives under one key as
/// serialized text; each save fully overwrites prior content.
pub const QUOTES_KEY: &str = "quotes";
pub const FILTER_KEY: &str = "lastCategory";

pub fn open() -> Result<Connection> {
    let conn = Connection::open(Config::db_path()?)?;

    // Performance pragmas
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        ",
    )?;

    migrate(&conn)?;
    Ok(conn)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Serialize the full ordered quote list under the quotes key.
pub fn save_quotes(conn: &Connection, quotes: &[Quote]) -> Result<()> {
    set(conn, QUOTES_KEY, &serde_json::to_string(quotes)?)
}

/// Load the persisted quote list. `None` when the key is unset or the
/// stored text no longer parses as a quote array; the caller falls back
/// to the seed list.
pub fn load_quotes(conn: &Connection) -> Result<Option<Vec<Quote>>> {
    let Some(raw) = get(conn, QUOTES_KEY)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(quotes) => Ok(Some(quotes)),
        Err(e) => {
            tracing::warn!("Persisted quotes unreadable, treating as absent: {e}");
            Ok(None)
        }
    }
}

/// Persist the last-selected category filter. Stored as a plain string,
/// independent of the quote list; it may name a category that no longer
/// exists, and nothing validates it on the way back in.
pub fn save_filter(conn: &Connection, category: &str) -> Result<()> {
    set(conn, FILTER_KEY, category)
}

pub fn load_filter(conn: &Connection) -> Result<Option<String>> {
    get(conn, FILTER_KEY)
}
