pub mod queries;

use anyhow::{Context, Result};
use rand::seq::IndexedRandom;
use rusqlite::{Connection, params};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AnimeRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub finished: bool,
    pub rating: f64,
    pub seen: bool,
}

#[derive(Debug, Clone)]
pub struct StoreCounts {
    pub total: i64,
    pub seen: i64,
    pub watchable: i64,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create DB directory: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open SQLite DB: {}", path.display()))?;

        let database = Self { conn };
        database.init_schema()?;

        Ok(database)
    }

    pub fn init_schema(&self) -> Result<()> {
        queries::schema_statements()
            .iter()
            .try_for_each(|statement| {
                self.conn
                    .execute(statement, [])
                    .context("Failed to initialize schema")
                    .map(|_| ())
            })
    }

    pub fn insert_anime(
        &self,
        name: &str,
        category: &str,
        finished: bool,
        rating: f64,
    ) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO anime (name, category, finished, rating, seen) VALUES (?1, ?2, ?3, ?4, 0)",
                params![name, category.to_lowercase(), finished, rating],
            )
            .context("Failed to insert anime")?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn list_all(&self) -> Result<Vec<AnimeRow>> {
        let mut statement = self.conn.prepare(
            "SELECT id, name, category, finished, rating, seen
             FROM anime
             ORDER BY id ASC",
        )?;

        let rows = statement
            .query_map([], |row| {
                Ok(AnimeRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    category: row.get(2)?,
                    finished: row.get(3)?,
                    rating: row.get(4)?,
                    seen: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to query anime records")?;

        Ok(rows)
    }

    pub fn list_by_category(&self, category: &str) -> Result<Vec<AnimeRow>> {
        let mut statement = self.conn.prepare(
            "SELECT id, name, category, finished, rating, seen
             FROM anime
             WHERE category = ?1
             ORDER BY id ASC",
        )?;

        let rows = statement
            .query_map(params![category.to_lowercase()], |row| {
                Ok(AnimeRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    category: row.get(2)?,
                    finished: row.get(3)?,
                    rating: row.get(4)?,
                    seen: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to query anime by category")?;

        Ok(rows)
    }

    pub fn pick_random_unseen_finished(&self) -> Result<Option<AnimeRow>> {
        let mut statement = self.conn.prepare(
            "SELECT id, name, category, finished, rating, seen
             FROM anime
             WHERE finished = 1 AND seen = 0",
        )?;

        let candidates = statement
            .query_map([], |row| {
                Ok(AnimeRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    category: row.get(2)?,
                    finished: row.get(3)?,
                    rating: row.get(4)?,
                    seen: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to query unseen finished anime")?;

        Ok(candidates.choose(&mut rand::rng()).cloned())
    }

    // Unconditional update: a missing id affects zero rows and still succeeds.
    pub fn mark_seen(&self, id: i64) -> Result<()> {
        self.conn
            .execute("UPDATE anime SET seen = 1 WHERE id = ?1", params![id])
            .context("Failed to mark anime as seen")?;

        Ok(())
    }

    // Same contract as mark_seen: deleting a missing id is not an error.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM anime WHERE id = ?1", params![id])
            .context("Failed to delete anime")?;

        Ok(())
    }

    pub fn counts(&self) -> Result<StoreCounts> {
        let total = self
            .conn
            .query_row("SELECT COUNT(*) FROM anime", [], |row| row.get(0))
            .context("Failed to count anime records")?;
        let seen = self
            .conn
            .query_row("SELECT COUNT(*) FROM anime WHERE seen = 1", [], |row| {
                row.get(0)
            })
            .context("Failed to count seen anime")?;
        let watchable = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM anime WHERE finished = 1 AND seen = 0",
                [],
                |row| row.get(0),
            )
            .context("Failed to count watchable anime")?;

        Ok(StoreCounts {
            total,
            seen,
            watchable,
        })
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, error)| error)
            .context("Failed to close anime database")
    }
}
