//! Structural validation of candidate todo records.
//!
//! Pure functions with no side effects; the single gate every persistence
//! action passes through before touching the store.

use crate::error::{Result, TodoError};
use crate::todo::TodoDraft;

/// Maximum title length, in Unicode scalar values.
pub const TITLE_MAX_CHARS: usize = 100;

/// Validate a candidate for creation. A missing `completed` flag defaults
/// to `false` here — and only here; updates must supply it explicitly.
pub fn validate_create(title: &str, completed: Option<bool>) -> Result<TodoDraft> {
    Ok(TodoDraft {
        title: validate_title(title)?,
        completed: completed.unwrap_or(false),
    })
}

/// Validate a full candidate record for update. The id must be a positive
/// integer; whether it refers to an existing row is the store's concern.
pub fn validate_update(id: i64, title: &str, completed: bool) -> Result<TodoDraft> {
    if id < 1 {
        return Err(TodoError::InvalidId(id));
    }
    Ok(TodoDraft {
        title: validate_title(title)?,
        completed,
    })
}

/// Trimmed length must be 1..=100 characters. Returns the normalized
/// (trimmed) title.
fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TodoError::TitleEmpty);
    }
    let len = trimmed.chars().count();
    if len > TITLE_MAX_CHARS {
        return Err(TodoError::TitleTooLong {
            len,
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
