//! Mutation rules for the two persisted lists.
//!
//! History and bookmarks deliberately disagree about duplicates: history
//! records every view, so a re-shown article appears again at the top, while
//! bookmarks hold an article at most once. Callers apply these functions and
//! persist the result instead of editing lists in place.

use crate::types::Article;

/// Prepend `article` and drop everything past `limit`. Repeats are allowed.
pub fn push_recent(mut list: Vec<Article>, article: Article, limit: usize) -> Vec<Article> {
    list.insert(0, article);
    list.truncate(limit);
    list
}

/// Toggle `article`'s membership, keyed by id. Returns the new list and
/// whether the article is now present.
pub fn toggle(list: Vec<Article>, article: &Article) -> (Vec<Article>, bool) {
    if contains(&list, article.id) {
        (remove_by_id(list, article.id), false)
    } else {
        let mut out = Vec::with_capacity(list.len() + 1);
        out.push(article.clone());
        out.extend(list);
        (out, true)
    }
}

/// Drop every entry with the given id.
pub fn remove_by_id(mut list: Vec<Article>, id: u64) -> Vec<Article> {
    list.retain(|a| a.id != id);
    list
}

pub fn contains(list: &[Article], id: u64) -> bool {
    list.iter().any(|a| a.id == id)
}
