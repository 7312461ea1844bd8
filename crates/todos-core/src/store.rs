//! SQLite-backed datastore for todo rows.
//!
//! The store owns the only connection, so row writes are serialized by
//! construction. Timestamps are written by the store, not the caller:
//! `created_at` once at insert, `updated_at` on every successful mutation.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Result, TodoError};
use crate::todo::{Todo, TodoDraft};

pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Open or create the database at `path`. The parent directory is
    /// created if missing.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::init(Connection::open(path)?)
    }

    /// In-memory database, used by tests and the server's ephemeral mode.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS todos (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                title       TEXT NOT NULL,
                completed   INTEGER NOT NULL DEFAULT 0,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Insert a validated draft. SQLite assigns the id; both timestamps are
    /// set from the same captured instant, so `created_at == updated_at` on
    /// a fresh row.
    pub fn insert(&self, draft: &TodoDraft) -> Result<Todo> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO todos (title, completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![draft.title, draft.completed, now, now],
        )?;
        self.get(self.conn.last_insert_rowid())
    }

    /// Fetch one row by id.
    pub fn get(&self, id: i64) -> Result<Todo> {
        self.conn
            .query_row(
                "SELECT id, title, completed, created_at, updated_at
                 FROM todos WHERE id = ?1",
                params![id],
                todo_from_row,
            )
            .optional()?
            .ok_or(TodoError::TodoNotFound(id))
    }

    /// Overwrite `title` and `completed`, bumping `updated_at`.
    pub fn update(&self, id: i64, draft: &TodoDraft) -> Result<Todo> {
        let changed = self.conn.execute(
            "UPDATE todos SET title = ?2, completed = ?3, updated_at = ?4
             WHERE id = ?1",
            params![id, draft.title, draft.completed, Utc::now()],
        )?;
        if changed == 0 {
            return Err(TodoError::TodoNotFound(id));
        }
        self.get(id)
    }

    /// Write `completed` exactly as given, bumping `updated_at`. The toggle
    /// action supplies the negation of the caller's value; the stored state
    /// is not consulted.
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE todos SET completed = ?2, updated_at = ?3 WHERE id = ?1",
            params![id, completed, Utc::now()],
        )?;
        if changed == 0 {
            return Err(TodoError::TodoNotFound(id));
        }
        Ok(())
    }

    /// Hard delete. An absent id surfaces as `TodoNotFound`.
    pub fn delete(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(TodoError::TodoNotFound(id));
        }
        Ok(())
    }

    /// All rows, newest first. The id breaks ties between rows created
    /// within one timestamp.
    pub fn list_all(&self) -> Result<Vec<Todo>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, completed, created_at, updated_at
             FROM todos ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], todo_from_row)?;

        let mut todos = Vec::new();
        for todo in rows {
            todos.push(todo?);
        }
        Ok(todos)
    }
}

fn todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
