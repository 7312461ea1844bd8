use std::path::Path;

use anyhow::Result;
use todos_core::actions;

/// `todos rm` — the delete action. Unknown ids get the same generic
/// failure as any other delete error.
pub fn run(db: Option<&Path>, id: i64) -> Result<()> {
    let store = super::open_store(db)?;
    super::check(actions::delete(&store, id))
}
