use std::future::Future;
use std::sync::Arc;

use tokio::sync::OnceCell;

/// Holds one dataset once it has loaded successfully.
///
/// Failed loads leave the cache empty so the next call tries again.
/// Concurrent first calls share a single load.
#[derive(Debug)]
pub struct DatasetCache<T> {
    cell: OnceCell<Arc<T>>,
}

impl<T> DatasetCache<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// The cached value, if a load has succeeded
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Return the cached value or run `load` to fill the cache
    pub async fn get_or_try_load<F, Fut, E>(&self, load: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell
            .get_or_try_init(|| async { load().await.map(Arc::new) })
            .await
            .cloned()
    }
}

impl<T> Default for DatasetCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
