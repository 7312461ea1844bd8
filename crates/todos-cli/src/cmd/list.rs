use std::path::Path;

use anyhow::Result;
use todos_core::view::ListView;

/// `todos list` — fetch the collection and render it through the list view.
pub fn run(db: Option<&Path>, json: bool) -> Result<()> {
    let store = super::open_store(db)?;

    let mut view = ListView::new();
    view.fetch_completed(store.list_all()?);

    if json {
        println!("{}", serde_json::to_string_pretty(view.todos())?);
        return Ok(());
    }

    if view.todos().is_empty() {
        println!("no todos");
        return Ok(());
    }
    for todo in view.todos() {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{mark}] {:>4}  {}", todo.id, todo.title);
    }
    Ok(())
}
