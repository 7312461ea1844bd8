//! Client-side list/form synchronization, modeled as an explicit state
//! machine: a read-only snapshot of the collection, one editing slot
//! (the viewing/editing state per row), and a single list-wide pending
//! lock.
//!
//! The machine performs no IO. User intents and completed fetches/actions
//! go in; [`Effect`]s come out, and the embedding client dispatches them:
//! `Fetch` re-reads the full collection from the read endpoint, `Dispatch`
//! runs one persistence action and feeds the result back. Every successful
//! mutation yields a `Fetch` — the view re-reads rather than patching the
//! changed row locally.

use crate::actions::ActionResult;
use crate::todo::Todo;

/// A mutating request the embedding client dispatches to the persistence
/// actions. `Toggle` carries the caller's current value, not the target.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Create {
        title: String,
        completed: bool,
    },
    Update {
        id: i64,
        title: String,
        completed: bool,
    },
    Delete {
        id: i64,
    },
    Toggle {
        id: i64,
        completed: bool,
    },
}

/// What the embedding client must do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-fetch the full collection from the read endpoint.
    Fetch,
    /// Run one persistence action; report back via `action_finished`.
    Dispatch(Request),
}

// ---------------------------------------------------------------------------
// ListView
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct EditSlot {
    id: i64,
    buffer: String,
}

/// The task list: snapshot, editing slot, pending lock.
///
/// While an action is in flight every intent is refused — one lock covers
/// the whole list, not each row. Operations are not cancellable once
/// dispatched, and a failed action is never retried automatically.
#[derive(Debug, Default)]
pub struct ListView {
    todos: Vec<Todo>,
    editing: Option<EditSlot>,
    in_flight: Option<Request>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, in the order the read endpoint returned it.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|slot| slot.id)
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.editing.as_ref().map(|slot| slot.buffer.as_str())
    }

    /// Replace the snapshot with a freshly fetched collection.
    pub fn fetch_completed(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// viewing → editing: capture the row's current title into the edit
    /// buffer. Ignored while pending or when the id is not in the snapshot.
    pub fn begin_edit(&mut self, id: i64) {
        if self.is_pending() {
            return;
        }
        let Some(todo) = self.find(id) else {
            return;
        };
        let buffer = todo.title.clone();
        self.editing = Some(EditSlot { id, buffer });
    }

    /// Replace the edit buffer. Ignored unless a row is being edited.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if self.is_pending() {
            return;
        }
        if let Some(slot) = self.editing.as_mut() {
            slot.buffer = text.into();
        }
    }

    /// editing → viewing without a server call: discard the buffer.
    pub fn cancel_edit(&mut self) {
        if self.is_pending() {
            return;
        }
        self.editing = None;
    }

    /// Commit the edit: dispatch an update carrying the buffer and the
    /// row's current completion flag. Refused locally — no server call —
    /// when the trimmed buffer is empty, the row vanished from the
    /// snapshot, or an action is already in flight.
    pub fn commit_edit(&mut self) -> Option<Effect> {
        if self.is_pending() {
            return None;
        }
        let slot = self.editing.as_ref()?;
        if slot.buffer.trim().is_empty() {
            return None;
        }
        let todo = self.find(slot.id)?;

        let request = Request::Update {
            id: slot.id,
            title: slot.buffer.clone(),
            completed: todo.completed,
        };
        self.in_flight = Some(request.clone());
        Some(Effect::Dispatch(request))
    }

    /// Dispatch a toggle carrying the row's current completion flag as the
    /// view knows it (the action writes its negation).
    pub fn toggle(&mut self, id: i64) -> Option<Effect> {
        if self.is_pending() {
            return None;
        }
        let todo = self.find(id)?;

        let request = Request::Toggle {
            id,
            completed: todo.completed,
        };
        self.in_flight = Some(request.clone());
        Some(Effect::Dispatch(request))
    }

    /// Dispatch a delete for a row in the snapshot.
    pub fn delete(&mut self, id: i64) -> Option<Effect> {
        if self.is_pending() {
            return None;
        }
        self.find(id)?;

        let request = Request::Delete { id };
        self.in_flight = Some(request.clone());
        Some(Effect::Dispatch(request))
    }

    /// Feed back the result of the dispatched action. Success clears the
    /// editing slot (for updates) and asks for a re-fetch; failure releases
    /// the lock and keeps the edit state so the user can retry.
    pub fn action_finished(&mut self, result: &ActionResult) -> Option<Effect> {
        let finished = self.in_flight.take()?;
        if !result.success {
            return None;
        }
        if matches!(finished, Request::Update { .. }) {
            self.editing = None;
        }
        Some(Effect::Fetch)
    }

    fn find(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }
}

// ---------------------------------------------------------------------------
// CreateForm
// ---------------------------------------------------------------------------

/// The creation form: one draft title, its own pending flag, and the last
/// failure message. Resets the draft only when the create action succeeds.
#[derive(Debug, Default)]
pub struct CreateForm {
    draft: String,
    error: Option<String>,
    pending: bool,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.pending {
            return;
        }
        self.draft = text.into();
    }

    /// Submit the draft as a new, not-yet-completed todo.
    pub fn submit(&mut self) -> Option<Effect> {
        if self.pending {
            return None;
        }
        self.error = None;
        self.pending = true;
        Some(Effect::Dispatch(Request::Create {
            title: self.draft.clone(),
            completed: false,
        }))
    }

    /// On success the form resets itself and asks for a list re-fetch; on
    /// failure it keeps the draft and shows the action's message.
    pub fn action_finished(&mut self, result: &ActionResult) -> Option<Effect> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        if result.success {
            self.draft.clear();
            Some(Effect::Fetch)
        } else {
            self.error = result.error.clone();
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
