//! Chapter metadata and verse fetching.
//!
//! The browsing screens only ever see a [`LoadState`]; how the data is
//! obtained sits behind the [`ChapterSource`] trait.

pub mod http_fetcher;
pub mod loader;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{ChapterRecord, Verse};

pub use http_fetcher::HttpFetcher;
pub use loader::Loader;

#[async_trait]
pub trait ChapterSource {
    /// All chapters, ordered by number.
    async fn fetch_chapters(&self) -> Result<Vec<ChapterRecord>>;

    /// Verses of one chapter, ordered by position.
    async fn fetch_verses(&self, chapter: u16) -> Result<Vec<Verse>>;
}

/// Progress of a one-shot load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    /// Human-readable failure message. Never retried.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Snapshot of chapter metadata as consumed by the browsing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterMetadata<'a> {
    pub records: &'a [ChapterRecord],
    pub is_loading: bool,
    pub error: Option<&'a str>,
}

impl<'a> From<&'a LoadState<Vec<ChapterRecord>>> for ChapterMetadata<'a> {
    fn from(state: &'a LoadState<Vec<ChapterRecord>>) -> Self {
        Self {
            records: state.loaded().map(Vec::as_slice).unwrap_or(&[]),
            is_loading: state.is_loading(),
            error: state.error(),
        }
    }
}
