pub mod error;
pub mod links;
pub mod lists;
pub mod source;
pub mod storage;
pub mod types;

pub use error::Error;
pub use source::ArticleSource;
pub use storage::ListStore;
pub use types::{Article, ListKind, HISTORY_LIMIT};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::source::ArticleSource;
    pub use crate::storage::ListStore;
    pub use crate::types::{Article, ListKind};
    pub use crate::{Error, Result};
}
