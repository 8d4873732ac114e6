use serde::{Deserialize, Serialize};

/// History keeps this many entries, most recent first.
pub const HISTORY_LIMIT: usize = 20;

/// A single encyclopedia entry, reduced to its display-relevant fields.
///
/// Two articles with the same `id` are the same article as far as history
/// deduplication and bookmark lookup are concerned; the other fields are
/// display payload and are never compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub extract: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// The two persisted lists. `key()` is the storage key and must stay stable:
/// it names the file (or map slot) a backend stores the list under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    History,
    Bookmarks,
}

impl ListKind {
    pub fn key(&self) -> &'static str {
        match self {
            ListKind::History => "history",
            ListKind::Bookmarks => "bookmarks",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
