//! SQLite-backed cursor store.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, OptionalExtension, params};

use crate::types::ContactIndex;

use super::{check_forward, CursorStore, FileIdentity, PersistError, PersistResult};

/// Keeps every cursor as a row of one `cursors` table.
pub struct SqliteCursorStore {
    conn: Connection,
}

impl SqliteCursorStore {
    /// Opens or creates a cursor database at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory cursor database.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self { conn })
    }

    /// Lists every stored cursor ordered by identity.
    pub fn cursors(&self) -> PersistResult<Vec<(String, i64)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT identity, next_index FROM cursors ORDER BY identity ASC")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

impl CursorStore for SqliteCursorStore {
    fn load(&self, identity: &FileIdentity) -> PersistResult<ContactIndex> {
        let stored: Option<i64> = self
            .conn
            .query_row(
                "SELECT next_index FROM cursors WHERE identity = ?1",
                params![identity.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(stored) = stored else {
            return Ok(0);
        };
        ContactIndex::try_from(stored).map_err(|_| PersistError::Corrupt {
            identity: identity.to_string(),
            reason: format!("negative cursor {stored}"),
        })
    }

    fn save(&mut self, identity: &FileIdentity, next_index: ContactIndex) -> PersistResult<()> {
        check_forward(identity, self.load(identity)?, next_index)?;
        let value = i64::try_from(next_index).map_err(|_| PersistError::Corrupt {
            identity: identity.to_string(),
            reason: format!("cursor {next_index} exceeds storage range"),
        })?;
        self.conn.execute(
            "INSERT INTO cursors(identity, next_index, updated_ms) VALUES (?1, ?2, ?3)
             ON CONFLICT(identity) DO UPDATE SET
                 next_index = excluded.next_index,
                 updated_ms = excluded.updated_ms",
            params![identity.as_str(), value, now_ms() as i64],
        )?;
        tracing::debug!(%identity, next_index, "saved cursor");
        Ok(())
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
