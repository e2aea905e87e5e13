//! Corpus database schema.
//!
//! The schema mirrors what the external bulk loaders produce. Version 1 is
//! the loaders' original five-emotion encoding; version 2 widens
//! `nrc_encoding` to the full eight NRC dimensions, defaulting the new
//! columns to zero for corpora loaded before the lexicon upgrade.

use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

const PARTY_TABLE: Table = Table {
    name: "party",
    columns: &[
        Column::new("id", SqlType::Integer).primary_key(),
        Column::new("name", SqlType::Text).non_null().unique(),
    ],
    indices: &[],
    unique_constraints: &[],
};

const DATE_DIM_TABLE: Table = Table {
    name: "date_dim",
    columns: &[
        Column::new("id", SqlType::Integer).primary_key(),
        Column::new("date", SqlType::Text).non_null().unique(),
        Column::new("day", SqlType::Integer).non_null(),
        Column::new("month", SqlType::Integer).non_null(),
        Column::new("year", SqlType::Integer).non_null(),
    ],
    indices: &[],
    unique_constraints: &[],
};

const NRC_ENCODING_TABLE_V1: Table = Table {
    name: "nrc_encoding",
    columns: &[
        Column::new("id", SqlType::Integer).primary_key(),
        Column::new("anger", SqlType::Real).non_null(),
        Column::new("disgust", SqlType::Real).non_null(),
        Column::new("fear", SqlType::Real).non_null(),
        Column::new("joy", SqlType::Real).non_null(),
        Column::new("sadness", SqlType::Real).non_null(),
    ],
    indices: &[],
    unique_constraints: &[],
};

const NRC_ENCODING_TABLE_V2: Table = Table {
    name: "nrc_encoding",
    columns: &[
        Column::new("id", SqlType::Integer).primary_key(),
        Column::new("anger", SqlType::Real).non_null(),
        Column::new("disgust", SqlType::Real).non_null(),
        Column::new("fear", SqlType::Real).non_null(),
        Column::new("joy", SqlType::Real).non_null(),
        Column::new("sadness", SqlType::Real).non_null(),
        Column::new("anticipation", SqlType::Real)
            .non_null()
            .default_value("0"),
        Column::new("surprise", SqlType::Real)
            .non_null()
            .default_value("0"),
        Column::new("trust", SqlType::Real)
            .non_null()
            .default_value("0"),
    ],
    indices: &[],
    unique_constraints: &[],
};

const POLITICIAN_TABLE: Table = Table {
    name: "politician",
    columns: &[
        Column::new("id", SqlType::Integer).primary_key(),
        Column::new("name", SqlType::Text).non_null(),
        Column::new("party", SqlType::Integer).references("party", "id"),
    ],
    indices: &[],
    unique_constraints: &[&["name", "party"]],
};

const SPEECH_TABLE: Table = Table {
    name: "speech",
    columns: &[
        Column::new("id", SqlType::Integer).primary_key(),
        Column::new("speaker", SqlType::Integer)
            .non_null()
            .references("politician", "id"),
        Column::new("speech_date", SqlType::Integer).references("date_dim", "id"),
        Column::new("text", SqlType::Text),
        Column::new("nrc_encoding", SqlType::Integer)
            .non_null()
            .references("nrc_encoding", "id"),
    ],
    indices: &[
        ("idx_speech_speaker", "speaker"),
        ("idx_speech_encoding", "nrc_encoding"),
    ],
    unique_constraints: &[],
};

/// Migration from version 1 to version 2: widen the encoding table with the
/// remaining NRC dimensions. Old rows get zero intensity, matching how the
/// loaders encode a speech with no lexicon hits.
fn migrate_v1_to_v2(conn: &rusqlite::Connection) -> anyhow::Result<()> {
    for column in ["anticipation", "surprise", "trust"] {
        conn.execute(
            &format!(
                "ALTER TABLE nrc_encoding ADD COLUMN {} REAL NOT NULL DEFAULT 0",
                column
            ),
            [],
        )?;
    }
    Ok(())
}

pub const CORPUS_VERSIONED_SCHEMAS: &[VersionedSchema] = &[
    VersionedSchema {
        version: 1,
        tables: &[
            PARTY_TABLE,
            DATE_DIM_TABLE,
            NRC_ENCODING_TABLE_V1,
            POLITICIAN_TABLE,
            SPEECH_TABLE,
        ],
        migration: None,
    },
    VersionedSchema {
        version: 2,
        tables: &[
            PARTY_TABLE,
            DATE_DIM_TABLE,
            NRC_ENCODING_TABLE_V2,
            POLITICIAN_TABLE,
            SPEECH_TABLE,
        ],
        migration: Some(migrate_v1_to_v2),
    },
];
