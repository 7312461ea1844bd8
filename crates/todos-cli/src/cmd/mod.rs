pub mod add;
pub mod edit;
pub mod list;
pub mod remove;
pub mod serve;
pub mod toggle;

use std::path::Path;

use anyhow::Result;
use todos_core::actions::{self, ActionResult};
use todos_core::config::Config;
use todos_core::store::TodoStore;
use todos_core::view::Request;

/// Resolve the database path (flag → todos.yaml → home default) and open
/// the store.
pub fn open_store(db: Option<&Path>) -> Result<TodoStore> {
    let path = match db {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir()?;
            Config::load(&cwd)?.database_path()?
        }
    };
    Ok(TodoStore::open(&path)?)
}

/// Run one view request against the store.
pub fn dispatch(store: &TodoStore, request: Request) -> ActionResult {
    match request {
        Request::Create { title, completed } => actions::create(store, &title, Some(completed)),
        Request::Update {
            id,
            title,
            completed,
        } => actions::update(store, id, &title, completed),
        Request::Delete { id } => actions::delete(store, id),
        Request::Toggle { id, completed } => actions::toggle(store, id, completed),
    }
}

/// Exit-code contract for action commands: a failed action becomes an
/// error carrying its generic message.
pub fn check(result: ActionResult) -> Result<()> {
    match result.error {
        None => Ok(()),
        Some(message) => Err(anyhow::anyhow!(message)),
    }
}
