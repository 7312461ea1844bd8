use std::path::Path;

use anyhow::Result;
use todos_core::actions;

/// `todos add` — the create action. Prints nothing on success.
pub fn run(db: Option<&Path>, title: &str, completed: bool) -> Result<()> {
    let store = super::open_store(db)?;
    super::check(actions::create(&store, title, Some(completed)))
}
