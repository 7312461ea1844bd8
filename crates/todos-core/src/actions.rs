//! The four persistence actions: create, update, delete, toggle.
//!
//! Every action validates its input, performs one store write, and returns
//! a structured [`ActionResult`] — never a panic and never an escaping
//! error. Validation failures, datastore failures, and not-found all
//! collapse into one generic message per action family; the underlying
//! cause goes to the error log only.

use serde::Serialize;

use crate::error::Result;
use crate::store::TodoStore;
use crate::todo::Todo;
use crate::validate;

/// Generic user-facing failure messages, one per action family. Toggle is
/// part of the update family.
pub const CREATE_FAILED: &str = "Failed to create todo.";
pub const UPDATE_FAILED: &str = "Failed to update todo.";
pub const DELETE_FAILED: &str = "Failed to delete todo.";

/// Outcome of a persistence action, as exposed to the view layer:
/// `{"success": true}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            success: false,
            error: Some(message.to_string()),
        }
    }
}

/// Create a new todo from a raw title and an optional completion flag
/// (absent means `false`).
pub fn create(store: &TodoStore, title: &str, completed: Option<bool>) -> ActionResult {
    match try_create(store, title, completed) {
        Ok(_) => ActionResult::ok(),
        Err(err) => {
            tracing::error!(error = %err, "create todo failed");
            ActionResult::fail(CREATE_FAILED)
        }
    }
}

fn try_create(store: &TodoStore, title: &str, completed: Option<bool>) -> Result<Todo> {
    let draft = validate::validate_create(title, completed)?;
    store.insert(&draft)
}

/// Overwrite the title and completion flag of an existing todo.
pub fn update(store: &TodoStore, id: i64, title: &str, completed: bool) -> ActionResult {
    match try_update(store, id, title, completed) {
        Ok(_) => ActionResult::ok(),
        Err(err) => {
            tracing::error!(error = %err, id, "update todo failed");
            ActionResult::fail(UPDATE_FAILED)
        }
    }
}

fn try_update(store: &TodoStore, id: i64, title: &str, completed: bool) -> Result<Todo> {
    let draft = validate::validate_update(id, title, completed)?;
    store.update(id, &draft)
}

/// Remove a todo. Deleting an id that no longer exists yields the same
/// generic failure as any other delete error.
pub fn delete(store: &TodoStore, id: i64) -> ActionResult {
    match store.delete(id) {
        Ok(()) => ActionResult::ok(),
        Err(err) => {
            tracing::error!(error = %err, id, "delete todo failed");
            ActionResult::fail(DELETE_FAILED)
        }
    }
}

/// Flip the completion state by writing the negation of the *caller's*
/// current value. The stored state is not re-read first, so two racing
/// toggles computed from the same stale value write the same final bit
/// (last write wins).
pub fn toggle(store: &TodoStore, id: i64, current: bool) -> ActionResult {
    match store.set_completed(id, !current) {
        Ok(()) => ActionResult::ok(),
        Err(err) => {
            tracing::error!(error = %err, id, "toggle todo failed");
            ActionResult::fail(UPDATE_FAILED)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
