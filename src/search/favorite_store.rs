use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::watch;

use crate::error::Result;

/// The external store owning the favorite-id set. The store is the single
/// source of truth: observers hold a read-only mirror fed by `subscribe`,
/// and every mutation goes through `add`/`remove` and becomes visible only
/// once the store re-emits.
///
/// `add` and `remove` are idempotent; adding a present id or removing an
/// absent one is a no-op, never an error.
pub trait FavoriteStore: Send + Sync {
    /// Live stream of the favorite-id set; each emission is a complete
    /// snapshot replacing the previous one.
    fn subscribe(&self) -> watch::Receiver<HashSet<String>>;

    fn add(&self, id: &str) -> BoxFuture<'static, Result<()>>;
    fn remove(&self, id: &str) -> BoxFuture<'static, Result<()>>;
    fn contains(&self, id: &str) -> BoxFuture<'static, Result<bool>>;
}

/// In-process favorite store. Durable persistence is the host's concern;
/// this one keeps the authoritative set in memory and re-emits on change.
pub struct MemoryFavoriteStore {
    ids: Arc<Mutex<HashSet<String>>>,
    tx : watch::Sender<HashSet<String>>,
}

impl MemoryFavoriteStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(HashSet::new());
        Self {
            ids: Arc::new(Mutex::new(HashSet::new())),
            tx,
        }
    }

    pub fn with_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let store = Self::new();
        {
            let mut locked = store.ids.lock().unwrap();
            for id in ids {
                locked.insert(id.to_string());
            }
            store.tx.send_replace(locked.clone());
        }
        store
    }
}

impl Default for MemoryFavoriteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoriteStore for MemoryFavoriteStore {
    fn subscribe(&self) -> watch::Receiver<HashSet<String>> {
        self.tx.subscribe()
    }

    fn add(&self, id: &str) -> BoxFuture<'static, Result<()>> {
        let ids = self.ids.clone();
        let tx = self.tx.clone();
        let id = id.to_string();
        async move {
            let mut locked = ids.lock().unwrap();
            if locked.insert(id) {
                tx.send_replace(locked.clone());
            }
            Ok(())
        }.boxed()
    }

    fn remove(&self, id: &str) -> BoxFuture<'static, Result<()>> {
        let ids = self.ids.clone();
        let tx = self.tx.clone();
        let id = id.to_string();
        async move {
            let mut locked = ids.lock().unwrap();
            if locked.remove(&id) {
                tx.send_replace(locked.clone());
            }
            Ok(())
        }.boxed()
    }

    fn contains(&self, id: &str) -> BoxFuture<'static, Result<bool>> {
        let ids = self.ids.clone();
        let id = id.to_string();
        async move {
            Ok(ids.lock().unwrap().contains(&id))
        }.boxed()
    }
}
