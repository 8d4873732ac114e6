use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use wr_core::{Article, ListKind, ListStore, Result};

use crate::StorageBackend;

/// Non-durable store used by tests and `--storage memory` runs.
pub struct MemoryStore {
    lists: RwLock<HashMap<ListKind, Vec<Article>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for MemoryStore {
    fn describe() -> &'static str {
        "memory"
    }

    async fn open(_data_dir: Option<&Path>) -> Result<Self> {
        Ok(Self::new())
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn load(&self, list: ListKind) -> Result<Vec<Article>> {
        let lists = self.lists.read().await;
        Ok(lists.get(&list).cloned().unwrap_or_default())
    }

    async fn save(&self, list: ListKind, articles: &[Article]) -> Result<()> {
        let mut lists = self.lists.write().await;
        lists.insert(list, articles.to_vec());
        Ok(())
    }

    async fn clear(&self, list: ListKind) -> Result<()> {
        self.save(list, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64) -> Article {
        Article {
            id,
            title: format!("Article {id}"),
            extract: "An extract.".to_string(),
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn loads_empty_before_first_save() {
        let store = MemoryStore::new();
        assert!(store.load(ListKind::History).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn round_trips_a_list() {
        let store = MemoryStore::new();
        let list = vec![article(1), article(2)];
        store.save(ListKind::Bookmarks, &list).await.unwrap();
        assert_eq!(store.load(ListKind::Bookmarks).await.unwrap(), list);
    }

    #[tokio::test]
    async fn lists_are_independent() {
        let store = MemoryStore::new();
        store.save(ListKind::History, &[article(1)]).await.unwrap();
        assert!(store.load(ListKind::Bookmarks).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_empties_the_list() {
        let store = MemoryStore::new();
        store.save(ListKind::History, &[article(1)]).await.unwrap();
        store.clear(ListKind::History).await.unwrap();
        assert!(store.load(ListKind::History).await.unwrap().is_empty());
    }
}
