use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

/// A read-only article provider.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Pick one random article and return its title.
    async fn random_title(&self) -> Result<String>;

    /// Fetch the summary fields for a title.
    async fn summary(&self, title: &str) -> Result<Article>;
}
