//! Full-text view of one chapter.
//!
//! The reader is opened with a [`ReaderRequest`] and loads the chapter's
//! verses on its own. Nothing flows back to the browsing screen.

use std::sync::Arc;

use crate::domain::{ChapterRecord, Verse};
use crate::fetcher::loader::{self, Loader};
use crate::fetcher::{ChapterSource, LoadState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderRequest {
    pub chapter_number: u16,
    pub common_name: String,
    pub local_name: String,
    pub common_name_translation: String,
}

impl From<&ChapterRecord> for ReaderRequest {
    fn from(chapter: &ChapterRecord) -> Self {
        Self {
            chapter_number: chapter.number,
            common_name: chapter.english_name.clone(),
            local_name: chapter.name.clone(),
            common_name_translation: chapter.english_name_translation.clone(),
        }
    }
}

pub struct Reader {
    request: ReaderRequest,
    verses: Loader<Vec<Verse>>,
    scroll: u16,
}

impl Reader {
    /// Start loading the verses for `request`.
    pub fn open(request: ReaderRequest, source: Arc<dyn ChapterSource + Send + Sync>) -> Self {
        tracing::info!(
            "Opening chapter {} ({})",
            request.chapter_number,
            request.common_name
        );
        let verses = loader::load_verses(source, request.chapter_number);
        Self::with_loader(request, verses)
    }

    pub fn with_loader(request: ReaderRequest, verses: Loader<Vec<Verse>>) -> Self {
        Self {
            request,
            verses,
            scroll: 0,
        }
    }

    pub fn request(&self) -> &ReaderRequest {
        &self.request
    }

    pub fn verses(&self) -> &LoadState<Vec<Verse>> {
        self.verses.state()
    }

    pub fn poll(&mut self) -> bool {
        self.verses.poll()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }
}
