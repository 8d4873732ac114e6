//! View state for the reading surface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};
use wr_core::{links, lists, Article, ArticleSource, ListKind, ListStore, Result, HISTORY_LIMIT};

#[derive(Debug, Clone)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded { article: Article, bookmarked: bool },
    Failed,
}

/// What the share action hands to the platform: the title, a short teaser
/// and the canonical link.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

/// Orchestrates the article source and the persisted lists, and owns the
/// view state the presentation layer renders.
///
/// Each `fetch_next` call takes a fresh request generation; a fetch whose
/// generation is no longer current when it resolves is discarded before any
/// state write or list mutation, so rapid re-fetches can never show a stale
/// article or record it in history.
pub struct ReaderManager {
    source: Arc<dyn ArticleSource>,
    store: Arc<dyn ListStore>,
    state: RwLock<ViewState>,
    generation: AtomicU64,
}

impl ReaderManager {
    pub fn new(source: Arc<dyn ArticleSource>, store: Arc<dyn ListStore>) -> Self {
        Self {
            source,
            store,
            state: RwLock::new(ViewState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn state(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Fetch a random article and make it current.
    ///
    /// On success the article is prepended to history (bounded, repeats
    /// allowed) and its bookmark status is recomputed from the store. A
    /// failed history write still presents the article; the error comes back
    /// for a non-fatal "could not save" notice. Fetch failures land in
    /// `ViewState::Failed`; retrying is calling this again.
    pub async fn fetch_next(&self) -> Result<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write().await = ViewState::Loading;

        let fetched = self.fetch_one().await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding superseded fetch");
            return Ok(());
        }

        let article = match fetched {
            Ok(article) => article,
            Err(e) => {
                *state = ViewState::Failed;
                return Err(e);
            }
        };

        let bookmarks = self.store.load(ListKind::Bookmarks).await?;
        let bookmarked = lists::contains(&bookmarks, article.id);

        let history = self.store.load(ListKind::History).await?;
        let history = lists::push_recent(history, article.clone(), HISTORY_LIMIT);
        let persisted = self.store.save(ListKind::History, &history).await;

        info!("📰 {}", article.title);
        *state = ViewState::Loaded { article, bookmarked };
        persisted
    }

    /// Add or remove the current article from the bookmark list.
    ///
    /// Returns the new membership, or `None` when no article is loaded. The
    /// in-state flag flips together with the list mutation; if the persist
    /// fails the flip stands and the error comes back for a notice.
    pub async fn toggle_bookmark(&self) -> Result<Option<bool>> {
        let mut state = self.state.write().await;
        let ViewState::Loaded { article, bookmarked } = &mut *state else {
            return Ok(None);
        };

        let list = self.store.load(ListKind::Bookmarks).await?;
        let (list, now) = lists::toggle(list, article);
        *bookmarked = now;
        self.store.save(ListKind::Bookmarks, &list).await?;
        Ok(Some(now))
    }

    /// Share payload for the current article, if one is loaded.
    pub async fn share_current(&self) -> Option<Share> {
        match &*self.state.read().await {
            ViewState::Loaded { article, .. } => Some(Share {
                title: article.title.clone(),
                snippet: snippet(&article.extract),
                url: links::article_url(&article.title),
            }),
            _ => None,
        }
    }

    // The two source calls are dependent: no title, no summary request.
    async fn fetch_one(&self) -> Result<Article> {
        let title = self.source.random_title().await?;
        self.source.summary(&title).await
    }
}

fn snippet(extract: &str) -> String {
    let mut teaser: String = extract.chars().take(100).collect();
    teaser.push_str("...");
    teaser
}
