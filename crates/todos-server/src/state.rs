use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use todos_core::store::TodoStore;

/// Shared application state passed to all route handlers.
///
/// The store sits behind a mutex: SQLite gets one connection and writes
/// are serialized through it. Handlers take the lock on the blocking pool
/// only.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TodoStore>>,
    pub refresh_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        let (tx, _) = broadcast::channel(64);
        Self {
            store: Arc::new(Mutex::new(store)),
            refresh_tx: tx,
        }
    }

    /// Signal every subscribed view to re-fetch the collection. Dropped
    /// silently when nobody is listening.
    pub fn notify_refresh(&self) {
        let _ = self.refresh_tx.send(());
    }
}
