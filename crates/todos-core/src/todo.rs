use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted todo row.
///
/// Timestamps serialize as `createdAt`/`updatedAt` — the shape the
/// client-rendered page already consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated candidate record: the normalized (trimmed) title plus the
/// completion flag. Produced by the validation layer, consumed by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
