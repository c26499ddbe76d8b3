use crate::browse::{title, BackOutcome, View};
use crate::domain::{Language, SupplicationRecord};
use crate::filter;

/// Browsing state of the supplication screen.
#[derive(Debug, Clone)]
pub struct DuaBrowser<'a> {
    records: &'a [SupplicationRecord],
    language: Language,
    query: String,
    category: Option<String>,
    selected: Option<&'a SupplicationRecord>,
}

impl<'a> DuaBrowser<'a> {
    pub fn new(records: &'a [SupplicationRecord], language: Language) -> Self {
        Self {
            records,
            language,
            query: String::new(),
            category: None,
            selected: None,
        }
    }

    pub fn view(&self) -> View {
        if self.selected.is_some() {
            View::Detail
        } else {
            View::List
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn selected(&self) -> Option<&'a SupplicationRecord> {
        self.selected
    }

    /// Records passing the current search and category.
    pub fn visible(&self) -> Vec<&'a SupplicationRecord> {
        filter::filter_supplications(
            self.records,
            &self.query,
            self.category.as_deref(),
            self.language,
        )
    }

    /// Categories for the active language, first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        filter::categories(self.records, self.language)
    }

    pub fn title(&self) -> &str {
        title::dua_title(self.language, self.category.as_deref(), self.selected)
    }

    /// Switch language. Category labels are per-language strings, so any
    /// selected category is dropped. Ignored while a record is open.
    pub fn set_language(&mut self, language: Language) {
        if self.view() == View::Detail {
            return;
        }
        tracing::debug!("Language {} -> {}", self.language, language);
        self.language = language;
        self.category = None;
    }

    pub fn cycle_language(&mut self) {
        self.set_language(self.language.next());
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        if self.view() == View::List {
            self.category = Some(category.into());
        }
    }

    pub fn select(&mut self, record: &'a SupplicationRecord) {
        if self.view() == View::List {
            self.selected = Some(record);
        }
    }

    pub fn back(&mut self) -> BackOutcome {
        if self.selected.take().is_some() {
            return BackOutcome::Handled;
        }
        if self.category.take().is_some() {
            return BackOutcome::Handled;
        }
        BackOutcome::Exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SUPPLICATIONS;

    fn browser() -> DuaBrowser<'static> {
        DuaBrowser::new(SUPPLICATIONS, Language::English)
    }

    #[test]
    fn test_initial_state() {
        let b = browser();
        assert_eq!(b.view(), View::List);
        assert_eq!(b.query(), "");
        assert_eq!(b.category(), None);
        assert_eq!(b.visible().len(), SUPPLICATIONS.len());
        assert_eq!(b.title(), "Dua Collection");
    }

    #[test]
    fn test_language_switch_clears_category() {
        let mut b = browser();
        b.select_category("Food");
        assert_eq!(b.visible().len(), 2);

        b.set_language(Language::Urdu);
        assert_eq!(b.category(), None);
        assert_eq!(b.visible().len(), SUPPLICATIONS.len());

        // Same language again still clears.
        b.select_category("گھر");
        b.set_language(Language::Urdu);
        assert_eq!(b.category(), None);
    }

    #[test]
    fn test_language_switch_ignored_in_detail() {
        let mut b = browser();
        b.select(&SUPPLICATIONS[1]);
        b.set_language(Language::Hindi);
        assert_eq!(b.language(), Language::English);
        assert_eq!(b.title(), "Evening Dua");
    }

    #[test]
    fn test_back_from_detail_returns_to_list() {
        let mut b = browser();
        b.select_category("Food");
        let record = b.visible()[0];
        b.select(record);
        assert_eq!(b.view(), View::Detail);

        assert_eq!(b.back(), BackOutcome::Handled);
        assert_eq!(b.view(), View::List);
        assert_eq!(b.selected(), None);
        assert_eq!(b.category(), Some("Food"));
    }

    #[test]
    fn test_back_walks_out_then_stays_at_exit() {
        let mut b = browser();
        b.select_category("Home");
        b.select(&SUPPLICATIONS[6]);

        assert_eq!(b.back(), BackOutcome::Handled);
        assert_eq!(b.back(), BackOutcome::Handled);
        assert_eq!(b.category(), None);
        assert_eq!(b.back(), BackOutcome::Exit);
        assert_eq!(b.back(), BackOutcome::Exit);
        assert_eq!(b.view(), View::List);
    }

    #[test]
    fn test_back_keeps_query() {
        let mut b = browser();
        b.set_query("dua");
        assert_eq!(b.back(), BackOutcome::Exit);
        assert_eq!(b.query(), "dua");
    }

    #[test]
    fn test_query_editing() {
        let mut b = browser();
        for c in "mornin".chars() {
            b.push_query_char(c);
        }
        b.push_query_char('x');
        b.pop_query_char();
        b.push_query_char('g');
        assert_eq!(b.query(), "morning");
        assert_eq!(b.visible().len(), 1);

        b.clear_query();
        assert_eq!(b.visible().len(), SUPPLICATIONS.len());
    }

    #[test]
    fn test_category_title_and_detail_title() {
        let mut b = browser();
        b.select_category("Protection");
        assert_eq!(b.title(), "Protection");
        let record = b.visible()[0];
        b.select(record);
        assert_eq!(b.title(), "Ayatul Kursi");
    }

    #[test]
    fn test_select_in_detail_is_ignored() {
        let mut b = browser();
        b.select(&SUPPLICATIONS[0]);
        b.select(&SUPPLICATIONS[1]);
        assert_eq!(b.selected().map(|r| r.id), Some(1));
    }
}
