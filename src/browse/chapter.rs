use crate::browse::{title, BackOutcome, View};
use crate::domain::chapter::JUZ_COUNT;
use crate::domain::ChapterRecord;
use crate::fetcher::{ChapterMetadata, Loader};
use crate::filter;
use crate::reader::ReaderRequest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuranTab {
    #[default]
    Chapters,
    Juz,
    Bookmarks,
}

impl QuranTab {
    pub const ALL: [QuranTab; 3] = [QuranTab::Chapters, QuranTab::Juz, QuranTab::Bookmarks];

    pub fn label(self) -> &'static str {
        match self {
            QuranTab::Chapters => "সূরা",
            QuranTab::Juz => "পারা",
            QuranTab::Bookmarks => "সংরক্ষিত",
        }
    }

    pub fn next(self) -> Self {
        match self {
            QuranTab::Chapters => QuranTab::Juz,
            QuranTab::Juz => QuranTab::Bookmarks,
            QuranTab::Bookmarks => QuranTab::Chapters,
        }
    }
}

/// What the list area of the Quran screen should show.
#[derive(Debug, PartialEq, Eq)]
pub enum ChapterListing<'a> {
    Loading,
    Failed(&'a str),
    Chapters {
        /// Quick-access strip; empty while searching.
        featured: Vec<&'a ChapterRecord>,
        chapters: Vec<&'a ChapterRecord>,
    },
    Juz(Vec<u8>),
    Bookmarks,
}

/// Browsing state of the Quran screen.
pub struct ChapterBrowser {
    metadata: Loader<Vec<ChapterRecord>>,
    query: String,
    tab: QuranTab,
    selected: Option<ChapterRecord>,
}

impl ChapterBrowser {
    pub fn new(metadata: Loader<Vec<ChapterRecord>>) -> Self {
        Self {
            metadata,
            query: String::new(),
            tab: QuranTab::default(),
            selected: None,
        }
    }

    /// Pick up the metadata load result. Returns `true` when it arrived.
    pub fn poll(&mut self) -> bool {
        self.metadata.poll()
    }

    pub fn metadata(&self) -> ChapterMetadata<'_> {
        ChapterMetadata::from(self.metadata.state())
    }

    // Search and tabs stay inert until the list has loaded.
    fn is_ready(&self) -> bool {
        self.metadata.state().loaded().is_some()
    }

    pub fn view(&self) -> View {
        if self.selected.is_some() {
            View::Detail
        } else {
            View::List
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tab(&self) -> QuranTab {
        self.tab
    }

    pub fn selected(&self) -> Option<&ChapterRecord> {
        self.selected.as_ref()
    }

    pub fn title(&self) -> &str {
        title::quran_title(self.selected.as_ref())
    }

    pub fn listing(&self) -> ChapterListing<'_> {
        let meta = self.metadata();
        if meta.is_loading {
            return ChapterListing::Loading;
        }
        if let Some(error) = meta.error {
            return ChapterListing::Failed(error);
        }

        match self.tab {
            QuranTab::Chapters => {
                let featured = if self.query.is_empty() {
                    filter::featured_chapters(meta.records)
                } else {
                    Vec::new()
                };
                ChapterListing::Chapters {
                    featured,
                    chapters: filter::filter_chapters(meta.records, &self.query),
                }
            }
            QuranTab::Juz => ChapterListing::Juz((1..=JUZ_COUNT).collect()),
            QuranTab::Bookmarks => ChapterListing::Bookmarks,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        if self.is_ready() {
            self.query = query.into();
        }
    }

    pub fn push_query_char(&mut self, c: char) {
        if self.is_ready() {
            self.query.push(c);
        }
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn select_tab(&mut self, tab: QuranTab) {
        if self.is_ready() && self.view() == View::List {
            self.tab = tab;
        }
    }

    pub fn cycle_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    /// Open a chapter, handing back what the reader needs.
    pub fn select(&mut self, chapter: &ChapterRecord) -> Option<ReaderRequest> {
        if !self.is_ready() || self.view() == View::Detail {
            return None;
        }
        let request = ReaderRequest::from(chapter);
        self.selected = Some(chapter.clone());
        Some(request)
    }

    pub fn back(&mut self) -> BackOutcome {
        if self.selected.take().is_some() {
            return BackOutcome::Handled;
        }
        if self.tab != QuranTab::Chapters {
            self.tab = QuranTab::Chapters;
            return BackOutcome::Handled;
        }
        BackOutcome::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RevelationPlace;
    use crate::fetcher::LoadState;

    fn chapters() -> Vec<ChapterRecord> {
        (1..=114)
            .map(|n| ChapterRecord {
                number: n,
                name: format!("سورة {}", n),
                english_name: format!("Chapter {}", n),
                english_name_translation: String::new(),
                number_of_ayahs: 5,
                revelation_type: if n % 2 == 0 {
                    RevelationPlace::Medinan
                } else {
                    RevelationPlace::Meccan
                },
            })
            .collect()
    }

    fn loaded() -> ChapterBrowser {
        ChapterBrowser::new(Loader::settled(LoadState::Loaded(chapters())))
    }

    #[test]
    fn test_listing_with_featured() {
        let b = loaded();
        match b.listing() {
            ChapterListing::Chapters { featured, chapters } => {
                assert_eq!(featured.len(), 6);
                assert_eq!(chapters.len(), 114);
            }
            other => panic!("unexpected listing {:?}", other),
        }
    }

    #[test]
    fn test_search_hides_featured() {
        let mut b = loaded();
        b.set_query("chapter 11");
        match b.listing() {
            ChapterListing::Chapters { featured, chapters } => {
                assert!(featured.is_empty());
                let numbers: Vec<u16> = chapters.iter().map(|c| c.number).collect();
                assert_eq!(numbers, vec![11, 110, 111, 112, 113, 114]);
            }
            other => panic!("unexpected listing {:?}", other),
        }
    }

    #[test]
    fn test_failed_load_is_inert() {
        let mut b = ChapterBrowser::new(Loader::settled(LoadState::Failed("offline".into())));
        b.set_query("x");
        b.select_tab(QuranTab::Juz);
        assert_eq!(b.query(), "");
        assert_eq!(b.tab(), QuranTab::Chapters);
        assert_eq!(b.listing(), ChapterListing::Failed("offline"));
        assert_eq!(b.back(), BackOutcome::Exit);
    }

    #[test]
    fn test_loading_shows_placeholder() {
        let b = ChapterBrowser::new(Loader::settled(LoadState::Loading));
        assert_eq!(b.listing(), ChapterListing::Loading);
    }

    #[test]
    fn test_select_and_back() {
        let mut b = loaded();
        let all = chapters();
        let request = b.select(&all[35]).unwrap();
        assert_eq!(request.chapter_number, 36);
        assert_eq!(b.view(), View::Detail);
        assert_eq!(b.title(), "Chapter 36");

        assert_eq!(b.back(), BackOutcome::Handled);
        assert_eq!(b.view(), View::List);
        assert!(b.selected().is_none());
        assert_eq!(b.back(), BackOutcome::Exit);
    }

    #[test]
    fn test_back_resets_tab_before_exit() {
        let mut b = loaded();
        b.cycle_tab();
        assert_eq!(b.tab(), QuranTab::Juz);
        assert_eq!(b.listing(), ChapterListing::Juz((1..=30).collect()));

        assert_eq!(b.back(), BackOutcome::Handled);
        assert_eq!(b.tab(), QuranTab::Chapters);
        assert_eq!(b.back(), BackOutcome::Exit);
    }

    #[test]
    fn test_bookmarks_tab() {
        let mut b = loaded();
        b.select_tab(QuranTab::Bookmarks);
        assert_eq!(b.listing(), ChapterListing::Bookmarks);
    }
}
