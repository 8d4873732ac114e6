use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;
use wr_core::{Article, ListKind, ListStore, Result};

use crate::StorageBackend;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".wikirandom";

/// Durable store keeping one JSON file per list under a data directory.
///
/// Saves go through a sibling temp file and a rename, so a reader never sees
/// a partially written list. Anything unreadable on disk is treated as an
/// empty list; a corrupted file must not block browsing.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new_with_dir(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn list_path(&self, list: ListKind) -> PathBuf {
        self.dir.join(format!("{}.json", list.key()))
    }
}

#[async_trait]
impl StorageBackend for FileStore {
    fn describe() -> &'static str {
        "file"
    }

    async fn open(data_dir: Option<&Path>) -> Result<Self> {
        Self::new_with_dir(data_dir.unwrap_or(Path::new(DEFAULT_DATA_DIR)))
    }
}

#[async_trait]
impl ListStore for FileStore {
    async fn load(&self, list: ListKind) -> Result<Vec<Article>> {
        let path = self.list_path(list);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                warn!("could not read {}: {}", path.display(), e);
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(articles) => Ok(articles),
            Err(e) => {
                warn!("discarding corrupt {} list: {}", list, e);
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, list: ListKind, articles: &[Article]) -> Result<()> {
        let path = self.list_path(list);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(articles)?)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    async fn clear(&self, list: ListKind) -> Result<()> {
        self.save(list, &[]).await
    }
}
