//! SQLite-backed catalog.
//!
//! Each call opens its own connection to the configured database file, so the
//! store holds no connection state and can be shared freely between workers.

use super::SourceCatalog;
use crate::errors::{MixError, Result};
use common::model::source::{NewSource, Source};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS sources (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        link     TEXT    NOT NULL UNIQUE,
        title    TEXT,
        artist   TEXT,
        is_video INTEGER NOT NULL
    );
";

#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    path: PathBuf,
}

impl SqliteCatalog {
    /// Opens the database at `path`, creating the `sources` table if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let catalog = Self { path: path.into() };
        catalog.connect()?.execute_batch(SCHEMA)?;
        Ok(catalog)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).map_err(|e| {
            MixError::StoreUnavailable(format!("open {}: {e}", self.path.display()))
        })
    }

    /// Stores a new source and returns it with its assigned id.
    ///
    /// A link that already exists violates the unique constraint and fails.
    #[cfg(test)]
    pub fn insert(&self, source: &NewSource) -> Result<Source> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO sources (link, title, artist, is_video) VALUES (?1, ?2, ?3, ?4)",
            params![&source.link, &source.title, &source.artist, source.is_video],
        )?;

        Ok(Source {
            id: conn.last_insert_rowid(),
            link: source.link.clone(),
            title: source.title.clone(),
            artist: source.artist.clone(),
            is_video: source.is_video,
        })
    }

    /// Inserts every source whose link is not stored yet. Returns how many were added.
    pub fn seed(&self, sources: &[NewSource]) -> Result<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO sources (link, title, artist, is_video) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for source in sources {
                inserted += stmt.execute(params![
                    &source.link,
                    &source.title,
                    &source.artist,
                    source.is_video
                ])?;
            }
        }
        tx.commit()?;
        debug!("seeded {} of {} sources", inserted, sources.len());
        Ok(inserted)
    }

    fn query(&self, sql: &str, filter: Option<bool>) -> Result<Vec<Source>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = match filter {
            Some(flag) => stmt.query_map(params![flag], row_to_source)?,
            None => stmt.query_map([], row_to_source)?,
        };
        let sources = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(sources)
    }
}

fn row_to_source(row: &Row<'_>) -> rusqlite::Result<Source> {
    Ok(Source {
        id: row.get(0)?,
        link: row.get(1)?,
        title: row.get(2)?,
        artist: row.get(3)?,
        is_video: row.get(4)?,
    })
}

impl SourceCatalog for SqliteCatalog {
    fn list_all(&self) -> Result<Vec<Source>> {
        self.query(
            "SELECT id, link, title, artist, is_video FROM sources ORDER BY id",
            None,
        )
    }

    fn list_by_video_flag(&self, flag: bool) -> Result<Vec<Source>> {
        self.query(
            "SELECT id, link, title, artist, is_video FROM sources WHERE is_video = ?1 ORDER BY id",
            Some(flag),
        )
    }
}
