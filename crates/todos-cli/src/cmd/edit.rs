use std::path::Path;

use anyhow::Result;
use todos_core::actions::UPDATE_FAILED;
use todos_core::view::{Effect, ListView};

/// `todos edit` — drive the update through the list view's edit path, so
/// the same commit rules apply as in the browser: the row must be in the
/// fetched snapshot and the new title must not be blank.
pub fn run(db: Option<&Path>, id: i64, title: &str) -> Result<()> {
    let store = super::open_store(db)?;

    let mut view = ListView::new();
    view.fetch_completed(store.list_all()?);

    view.begin_edit(id);
    view.set_edit_buffer(title);
    let Some(Effect::Dispatch(request)) = view.commit_edit() else {
        anyhow::bail!(UPDATE_FAILED);
    };

    let result = super::dispatch(&store, request);
    if view.action_finished(&result) == Some(Effect::Fetch) {
        view.fetch_completed(store.list_all()?);
    }
    super::check(result)
}
