use async_trait::async_trait;

use crate::types::{Article, ListKind};
use crate::Result;

/// Persistent storage for the two article lists.
///
/// All reads and writes of the persisted lists go through this trait so the
/// serialization format and the corruption policy are defined in one place.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Load a list. Absent or unparsable persisted data degrades to an empty
    /// list; this never fails because of what is on disk.
    async fn load(&self, list: ListKind) -> Result<Vec<Article>>;

    /// Replace the persisted value for a list. Atomic per list: a concurrent
    /// `load` sees either the previous value or `articles`, never a partial
    /// write.
    async fn save(&self, list: ListKind, articles: &[Article]) -> Result<()>;

    /// Empty a list.
    async fn clear(&self, list: ListKind) -> Result<()>;
}
