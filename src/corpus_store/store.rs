use super::models::SpeakerStat;
use super::schema::CORPUS_VERSIONED_SCHEMAS;
use super::CorpusStore;
use crate::reports::{Aggregate, Metric, ReportSpec};
use crate::server::metrics::record_db_query;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SqliteCorpusStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCorpusStore {
    /// Opens the corpus database produced by the bulk loaders.
    ///
    /// A missing file gets the latest schema (an empty corpus is valid); an
    /// existing file is validated against the declared schema for its
    /// recorded version and migrated forward if it is behind.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref();
        let is_new_db = !path.exists();

        let mut conn = Connection::open(path).context("Failed to open corpus database")?;
        conn.execute("PRAGMA foreign_keys = ON;", [])?;

        if is_new_db {
            info!("Creating new corpus database at {:?}", path);
            CORPUS_VERSIONED_SCHEMAS.last().unwrap().create(&conn)?;
        } else {
            let raw_version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
            let db_version = raw_version - BASE_DB_VERSION as i64;

            if db_version < 1 {
                anyhow::bail!(
                    "Corpus database version {} is invalid (expected >= 1); \
                     was the file produced by the bulk loaders?",
                    db_version
                );
            }

            let schema = CORPUS_VERSIONED_SCHEMAS
                .iter()
                .find(|s| s.version == db_version as usize)
                .with_context(|| format!("Unknown corpus database version {}", db_version))?;
            schema.validate(&conn).with_context(|| {
                format!(
                    "Corpus database schema validation failed for version {}",
                    db_version
                )
            })?;

            let latest_version = CORPUS_VERSIONED_SCHEMAS.last().unwrap().version;
            if (db_version as usize) < latest_version {
                info!(
                    "Migrating corpus database from version {} to {}",
                    db_version, latest_version
                );
                Self::migrate(&mut conn, db_version as usize)?;
            }
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn migrate(conn: &mut Connection, from_version: usize) -> Result<()> {
        let tx = conn.transaction()?;
        let mut reached = from_version;
        for schema in CORPUS_VERSIONED_SCHEMAS {
            if schema.version > from_version {
                if let Some(migration_fn) = schema.migration {
                    migration_fn(&tx).with_context(|| {
                        format!("Failed to run migration to version {}", schema.version)
                    })?;
                }
                reached = schema.version;
            }
        }
        tx.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + reached),
            [],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn scalar_count(&self, sql: &str, operation: &str) -> Result<u64> {
        let conn = self.conn.lock().unwrap();
        let start = Instant::now();
        let count: i64 = conn.query_row(sql, [], |row| row.get(0))?;
        record_db_query(operation, start.elapsed());
        Ok(count as u64)
    }

    fn row_to_speaker_stat(row: &rusqlite::Row) -> rusqlite::Result<SpeakerStat> {
        Ok(SpeakerStat {
            speaker: row.get("speaker")?,
            party: row.get("party")?,
            value: row.get("value")?,
        })
    }
}

impl CorpusStore for SqliteCorpusStore {
    fn rank_speakers(&self, spec: &ReportSpec) -> Result<Vec<SpeakerStat>> {
        // The aggregate expression and sort keyword come from closed enums,
        // never from caller strings; the limit is the only bound parameter.
        let (aggregate_expr, encoding_join) = match (spec.aggregate, spec.metric) {
            (Aggregate::Count, _) => ("COUNT(*)".to_string(), ""),
            (Aggregate::Average, Metric::Emotion(emotion)) => (
                format!("AVG(e.{})", emotion.column()),
                "JOIN nrc_encoding e ON e.id = s.nrc_encoding ",
            ),
            (Aggregate::Average, Metric::SpeechCount) => {
                // Unrepresentable via ReportSpec::new; guard anyway.
                anyhow::bail!("speech_count cannot be averaged");
            }
        };

        let sql = format!(
            "SELECT p.name AS speaker, pa.name AS party, {} AS value \
             FROM speech s \
             JOIN politician p ON p.id = s.speaker \
             {}LEFT JOIN party pa ON pa.id = p.party \
             GROUP BY p.id \
             ORDER BY value {}, p.id ASC \
             LIMIT ?1",
            aggregate_expr,
            encoding_join,
            spec.direction.sql(),
        );

        let conn = self.conn.lock().unwrap();
        let start = Instant::now();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![spec.limit as i64], Self::row_to_speaker_stat)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        record_db_query("rank_speakers", start.elapsed());

        Ok(rows)
    }

    fn count_speeches(&self) -> Result<u64> {
        self.scalar_count("SELECT COUNT(*) FROM speech", "count_speeches")
    }

    fn count_politicians(&self) -> Result<u64> {
        self.scalar_count("SELECT COUNT(*) FROM politician", "count_politicians")
    }

    fn count_parties(&self) -> Result<u64> {
        self.scalar_count("SELECT COUNT(*) FROM party", "count_parties")
    }

    fn count_speeches_missing_encoding(&self) -> Result<u64> {
        self.scalar_count(
            "SELECT COUNT(*) FROM speech s \
             LEFT JOIN nrc_encoding e ON e.id = s.nrc_encoding \
             WHERE e.id IS NULL",
            "integrity_missing_encoding",
        )
    }

    fn count_speeches_missing_speaker(&self) -> Result<u64> {
        self.scalar_count(
            "SELECT COUNT(*) FROM speech s \
             LEFT JOIN politician p ON p.id = s.speaker \
             WHERE p.id IS NULL",
            "integrity_missing_speaker",
        )
    }
}
