//! Test fixture creation for the corpus database
//!
//! The reporting core is read-only, so fixtures insert rows with direct SQL
//! the same way the external bulk loaders do.

use anyhow::Result;
use emolex_report_server::corpus_store::SqliteCorpusStore;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates an empty corpus database with the latest schema.
/// Returns (temp_dir, db_path).
pub fn create_empty_corpus() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("corpus.db");

    // Opening the store creates and versions the schema.
    let _store = SqliteCorpusStore::new(&db_path)?;

    Ok((dir, db_path))
}

/// Creates the default seeded corpus:
/// - Red Party, Blue Party
/// - Alice (Red, 5 speeches, avg anger 0.6)
/// - Bob (Blue, 3 speeches, avg anger 0.3)
/// - Carol (no party, 3 speeches, avg anger 0.1)
/// - Dave (Blue, no speeches)
///
/// Joy runs opposite to anger so top/bottom reports invert between the two.
pub fn create_seeded_corpus() -> Result<(TempDir, PathBuf)> {
    let (dir, db_path) = create_empty_corpus()?;

    let conn = Connection::open(&db_path)?;
    conn.execute("PRAGMA foreign_keys = ON;", [])?;

    conn.execute_batch(
        "INSERT INTO party (id, name) VALUES (1, 'Red Party'), (2, 'Blue Party');
         INSERT INTO politician (id, name, party) VALUES
             (1, 'Alice Anderson', 1),
             (2, 'Bob Baker', 2),
             (3, 'Carol Clark', NULL),
             (4, 'Dave Dunn', 2);",
    )?;

    insert_speeches(&conn, 1, 5, 0.6)?;
    insert_speeches(&conn, 2, 3, 0.3)?;
    insert_speeches(&conn, 3, 3, 0.1)?;

    Ok((dir, db_path))
}

/// Seeded corpus plus one speech whose encoding reference is dangling,
/// the way a partially failed bulk load would leave it.
pub fn create_corrupt_corpus() -> Result<(TempDir, PathBuf)> {
    let (dir, db_path) = create_seeded_corpus()?;

    let conn = Connection::open(&db_path)?;
    conn.execute("PRAGMA foreign_keys = OFF;", [])?;
    conn.execute(
        "INSERT INTO speech (speaker, nrc_encoding) VALUES (1, 99999)",
        [],
    )?;

    Ok((dir, db_path))
}

/// Inserts `count` speeches for the speaker, each with the given anger
/// intensity and the remaining mass on joy.
fn insert_speeches(conn: &Connection, speaker: i64, count: usize, anger: f64) -> Result<()> {
    for _ in 0..count {
        conn.execute(
            "INSERT INTO nrc_encoding \
             (anger, disgust, fear, joy, sadness, anticipation, surprise, trust) \
             VALUES (?1, 0, 0, ?2, 0, 0, 0, 0)",
            params![anger, 1.0 - anger],
        )?;
        let encoding_id = conn.last_insert_rowid();
        conn.execute(
            "INSERT INTO speech (speaker, speech_date, text, nrc_encoding) \
             VALUES (?1, NULL, 'lorem ipsum', ?2)",
            params![speaker, encoding_id],
        )?;
    }
    Ok(())
}
