pub mod api;
pub mod manager;

pub use api::WikipediaSource;
pub use manager::{ReaderManager, Share, ViewState};

pub mod prelude {
    pub use crate::api::WikipediaSource;
    pub use crate::manager::{ReaderManager, ViewState};
    pub use wr_core::{Article, Error, Result};
}
