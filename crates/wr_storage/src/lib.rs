use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use wr_core::{Error, ListStore, Result};

pub mod backends;

pub use backends::*;

/// Constructor seam shared by the storage backends.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short backend name for log lines and error messages.
    fn describe() -> &'static str;

    /// Open the backend. `data_dir` is where durable backends keep their
    /// files; in-memory backends ignore it.
    async fn open(data_dir: Option<&Path>) -> Result<Self>
    where
        Self: Sized;
}

async fn open_backend<T>(data_dir: Option<&Path>) -> Result<Arc<dyn ListStore>>
where
    T: StorageBackend + ListStore + 'static,
{
    let store = T::open(data_dir).await?;
    debug!("opened {} store", T::describe());
    Ok(Arc::new(store))
}

/// Map a CLI backend name to a store. The only place backend names are
/// interpreted.
pub async fn create_store(kind: &str, data_dir: Option<&Path>) -> Result<Arc<dyn ListStore>> {
    match kind {
        "memory" => open_backend::<MemoryStore>(data_dir).await,
        "file" => open_backend::<FileStore>(data_dir).await,
        other => Err(Error::Storage(format!("Unknown storage backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_store, StorageBackend};
}

#[cfg(test)]
mod tests {
    use super::*;
    use wr_core::{Article, ListKind};

    #[tokio::test]
    async fn create_store_rejects_unknown_backends() {
        let err = create_store("carrier-pigeon", None).await.err().unwrap();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[tokio::test]
    async fn create_store_opens_a_working_file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let store = create_store("file", Some(dir.path())).await.unwrap();

        let list = vec![Article {
            id: 1,
            title: "First".to_string(),
            extract: "About First.".to_string(),
            thumbnail: None,
        }];
        store.save(ListKind::Bookmarks, &list).await.unwrap();
        assert_eq!(store.load(ListKind::Bookmarks).await.unwrap(), list);
    }
}
