use std::path::Path;

use anyhow::Result;
use todos_core::actions::UPDATE_FAILED;
use todos_core::view::{Effect, ListView};

/// `todos toggle` — flip completion using the fetched snapshot's value.
/// Same stale-read semantics as the web view: the negation is computed
/// from what was read, not from the stored state at write time.
pub fn run(db: Option<&Path>, id: i64) -> Result<()> {
    let store = super::open_store(db)?;

    let mut view = ListView::new();
    view.fetch_completed(store.list_all()?);

    let Some(Effect::Dispatch(request)) = view.toggle(id) else {
        anyhow::bail!(UPDATE_FAILED);
    };
    super::check(super::dispatch(&store, request))
}
