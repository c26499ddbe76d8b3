use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::browse::{BackOutcome, ChapterBrowser, ChapterListing, DuaBrowser, View};
use crate::domain::chapter::JUZ_COUNT;
use crate::domain::{ChapterRecord, Language};
use crate::fetcher::{loader, ChapterSource};
use crate::reader::Reader;
use crate::store::SUPPLICATIONS;
use crate::tui::event::Action;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEntry {
    Duas,
    Quran,
}

impl HomeEntry {
    pub const ALL: [HomeEntry; 2] = [HomeEntry::Duas, HomeEntry::Quran];

    pub fn label(self) -> &'static str {
        match self {
            HomeEntry::Duas => "দোয়া (Duas)",
            HomeEntry::Quran => "কুরআন (Quran)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuaFocus {
    Categories,
    #[default]
    Records,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuranFocus {
    Featured,
    #[default]
    Chapters,
}

/// Per-mount state of the supplication screen.
pub struct DuaScreen {
    pub browser: DuaBrowser<'static>,
    pub focus: DuaFocus,
    pub category_index: usize,
    pub list_state: ListState,
    pub detail_scroll: u16,
}

impl DuaScreen {
    fn new(language: Language) -> Self {
        Self {
            browser: DuaBrowser::new(SUPPLICATIONS, language),
            focus: DuaFocus::Records,
            category_index: 0,
            list_state: ListState::default().with_selected(Some(0)),
            detail_scroll: 0,
        }
    }

    fn list_len(&self) -> usize {
        self.browser.visible().len()
    }

    fn move_list(&mut self, delta: isize) {
        let len = self.list_len();
        move_selection(&mut self.list_state, delta, len);
    }

    fn reset_list(&mut self) {
        self.list_state.select(Some(0));
        self.category_index = 0;
        self.focus = DuaFocus::Records;
    }

    fn handle(&mut self, action: Action) -> BackOutcome {
        if self.browser.view() == View::Detail {
            match action {
                Action::MoveDown => self.detail_scroll = self.detail_scroll.saturating_add(1),
                Action::MoveUp => self.detail_scroll = self.detail_scroll.saturating_sub(1),
                Action::NextPage => {
                    self.detail_scroll = self.detail_scroll.saturating_add(PAGE_SIZE as u16)
                }
                Action::PrevPage => {
                    self.detail_scroll = self.detail_scroll.saturating_sub(PAGE_SIZE as u16)
                }
                Action::Back => return self.browser.back(),
                _ => {}
            }
            return BackOutcome::Handled;
        }

        match (self.focus, action) {
            (_, Action::Back) => {
                let outcome = self.browser.back();
                self.focus = DuaFocus::Records;
                return outcome;
            }
            (_, Action::NextLanguage) => {
                self.browser.cycle_language();
                self.reset_list();
            }
            (DuaFocus::Records, Action::NextPane) => {
                // The strip is hidden once a category is picked.
                if self.browser.category().is_none() {
                    self.focus = DuaFocus::Categories;
                }
            }
            (DuaFocus::Categories, Action::NextPane) => self.focus = DuaFocus::Records,
            (DuaFocus::Categories, Action::MoveUp) => {
                self.category_index = self.category_index.saturating_sub(1);
            }
            (DuaFocus::Categories, Action::MoveDown) => {
                let count = self.browser.categories().len();
                self.category_index = step(self.category_index, 1, count);
            }
            (DuaFocus::Categories, Action::Select) => {
                if let Some(category) = self.browser.categories().get(self.category_index) {
                    self.browser.select_category(*category);
                    self.list_state.select(Some(0));
                    self.focus = DuaFocus::Records;
                }
            }
            (DuaFocus::Records, Action::Select) => {
                let index = self.list_state.selected().unwrap_or(0);
                if let Some(record) = self.browser.visible().get(index).copied() {
                    self.browser.select(record);
                    self.detail_scroll = 0;
                }
            }
            (DuaFocus::Records, Action::MoveUp) => self.move_list(-1),
            (DuaFocus::Records, Action::MoveDown) => self.move_list(1),
            (DuaFocus::Records, Action::NextPage) => self.move_list(PAGE_SIZE as isize),
            (DuaFocus::Records, Action::PrevPage) => self.move_list(-(PAGE_SIZE as isize)),
            _ => {}
        }
        BackOutcome::Handled
    }
}

/// Per-mount state of the Quran screen.
pub struct QuranScreen {
    pub browser: ChapterBrowser,
    pub focus: QuranFocus,
    pub featured_index: usize,
    pub list_state: ListState,
    pub reader: Option<Reader>,
}

impl QuranScreen {
    fn new(source: Arc<dyn ChapterSource + Send + Sync>) -> Self {
        Self {
            browser: ChapterBrowser::new(loader::load_chapters(source)),
            focus: QuranFocus::Chapters,
            featured_index: 0,
            list_state: ListState::default().with_selected(Some(0)),
            reader: None,
        }
    }

    fn list_len(&self) -> usize {
        match self.browser.listing() {
            ChapterListing::Chapters { chapters, .. } => chapters.len(),
            ChapterListing::Juz(_) => JUZ_COUNT as usize,
            _ => 0,
        }
    }

    fn move_list(&mut self, delta: isize) {
        let len = self.list_len();
        move_selection(&mut self.list_state, delta, len);
    }

    fn featured_len(&self) -> usize {
        match self.browser.listing() {
            ChapterListing::Chapters { featured, .. } => featured.len(),
            _ => 0,
        }
    }

    fn poll(&mut self) -> bool {
        let mut changed = self.browser.poll();
        if let Some(reader) = self.reader.as_mut() {
            changed |= reader.poll();
        }
        changed
    }

    fn handle(
        &mut self,
        action: Action,
        source: &Arc<dyn ChapterSource + Send + Sync>,
    ) -> BackOutcome {
        if let Some(reader) = self.reader.as_mut() {
            match action {
                Action::MoveDown => reader.scroll_by(1),
                Action::MoveUp => reader.scroll_by(-1),
                Action::NextPage => reader.scroll_by(PAGE_SIZE as i32),
                Action::PrevPage => reader.scroll_by(-(PAGE_SIZE as i32)),
                Action::Back => {
                    self.reader = None;
                    return self.browser.back();
                }
                _ => {}
            }
            return BackOutcome::Handled;
        }

        match (self.focus, action) {
            (_, Action::Back) => {
                self.focus = QuranFocus::Chapters;
                return self.browser.back();
            }
            (QuranFocus::Chapters, Action::NextPane) if self.featured_len() > 0 => {
                self.focus = QuranFocus::Featured;
                self.featured_index = 0;
            }
            (_, Action::NextPane) => {
                // Leaving the strip moves on to the next tab.
                self.focus = QuranFocus::Chapters;
                self.browser.cycle_tab();
                self.list_state.select(Some(0));
            }
            (QuranFocus::Featured, Action::MoveUp) => {
                self.featured_index = self.featured_index.saturating_sub(1);
            }
            (QuranFocus::Featured, Action::MoveDown) => {
                self.featured_index = step(self.featured_index, 1, self.featured_len());
            }
            (QuranFocus::Featured, Action::Select) => {
                let chapter = match self.browser.listing() {
                    ChapterListing::Chapters { featured, .. } => {
                        featured.get(self.featured_index).map(|c| (*c).clone())
                    }
                    _ => None,
                };
                self.open_reader(chapter, source);
            }
            (QuranFocus::Chapters, Action::Select) => {
                let index = self.list_state.selected().unwrap_or(0);
                let chapter = match self.browser.listing() {
                    ChapterListing::Chapters { chapters, .. } => {
                        chapters.get(index).map(|c| (*c).clone())
                    }
                    _ => None,
                };
                self.open_reader(chapter, source);
            }
            (QuranFocus::Chapters, Action::MoveUp) => self.move_list(-1),
            (QuranFocus::Chapters, Action::MoveDown) => self.move_list(1),
            (QuranFocus::Chapters, Action::NextPage) => self.move_list(PAGE_SIZE as isize),
            (QuranFocus::Chapters, Action::PrevPage) => self.move_list(-(PAGE_SIZE as isize)),
            _ => {}
        }
        BackOutcome::Handled
    }

    fn open_reader(
        &mut self,
        chapter: Option<ChapterRecord>,
        source: &Arc<dyn ChapterSource + Send + Sync>,
    ) {
        if let Some(request) = chapter.and_then(|c| self.browser.select(&c)) {
            self.focus = QuranFocus::Chapters;
            self.reader = Some(Reader::open(request, source.clone()));
        }
    }
}

pub enum Screen {
    Home,
    Duas(DuaScreen),
    Quran(QuranScreen),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Duas(_) => "duas",
            Screen::Quran(_) => "quran",
        }
    }
}

pub struct TuiApp {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub home_state: ListState,
    pub should_quit: bool,
    pub status_message: Option<String>,
    language: Language,
    source: Arc<dyn ChapterSource + Send + Sync>,
}

impl TuiApp {
    pub fn new(source: Arc<dyn ChapterSource + Send + Sync>, language: Language) -> Self {
        Self {
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            home_state: ListState::default().with_selected(Some(0)),
            should_quit: false,
            status_message: None,
            language,
            source,
        }
    }

    /// Mount a screen with fresh state. The Quran screen starts its
    /// metadata load here.
    pub fn open(&mut self, entry: HomeEntry) {
        self.screen = match entry {
            HomeEntry::Duas => Screen::Duas(DuaScreen::new(self.language)),
            HomeEntry::Quran => Screen::Quran(QuranScreen::new(self.source.clone())),
        };
        self.input_mode = InputMode::Normal;
        tracing::info!("Entered {} screen", self.screen.name());
    }

    /// Advance any background loads. Returns `true` when something changed.
    pub fn tick(&mut self) -> bool {
        let Screen::Quran(quran) = &mut self.screen else {
            return false;
        };
        let changed = quran.poll();
        if changed && quran.reader.is_none() {
            let count = quran.browser.metadata().records.len();
            if count > 0 {
                self.set_status(format!("Loaded {} chapters", count));
            }
        }
        changed
    }

    pub fn handle_action(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        if matches!(self.screen, Screen::Home) {
            self.handle_home(action);
            return;
        }

        let outcome = match &mut self.screen {
            Screen::Home => return,
            Screen::Duas(duas) => {
                if action == Action::Search && duas.browser.view() == View::List {
                    self.input_mode = InputMode::Search;
                    return;
                }
                duas.handle(action)
            }
            Screen::Quran(quran) => {
                let ready = quran.browser.metadata().error.is_none()
                    && !quran.browser.metadata().is_loading;
                if action == Action::Search && ready && quran.reader.is_none() {
                    self.input_mode = InputMode::Search;
                    return;
                }
                quran.handle(action, &self.source)
            }
        };

        if outcome == BackOutcome::Exit {
            tracing::info!("Leaving {} screen", self.screen.name());
            self.screen = Screen::Home;
        }
    }

    fn handle_home(&mut self, action: Action) {
        let len = HomeEntry::ALL.len();
        match action {
            Action::MoveUp => move_selection(&mut self.home_state, -1, len),
            Action::MoveDown => move_selection(&mut self.home_state, 1, len),
            Action::Select => {
                let index = self.home_state.selected().unwrap_or(0);
                if let Some(entry) = HomeEntry::ALL.get(index) {
                    self.open(*entry);
                }
            }
            Action::Back => self.should_quit = true,
            _ => {}
        }
    }

    /// Keys typed while the search box has focus. Enter keeps the query,
    /// Esc discards it.
    pub fn handle_search_key(&mut self, key: &KeyEvent) {
        // Control chords are never text.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        let done = matches!(key.code, KeyCode::Enter | KeyCode::Esc);
        match &mut self.screen {
            Screen::Duas(duas) => {
                match key.code {
                    KeyCode::Char(c) => duas.browser.push_query_char(c),
                    KeyCode::Backspace => duas.browser.pop_query_char(),
                    KeyCode::Esc => duas.browser.clear_query(),
                    _ => {}
                }
                duas.list_state.select(Some(0));
            }
            Screen::Quran(quran) => {
                match key.code {
                    KeyCode::Char(c) => quran.browser.push_query_char(c),
                    KeyCode::Backspace => quran.browser.pop_query_char(),
                    KeyCode::Esc => quran.browser.clear_query(),
                    _ => {}
                }
                quran.list_state.select(Some(0));
                quran.focus = QuranFocus::Chapters;
            }
            Screen::Home => {}
        }
        if done {
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

fn move_selection(state: &mut ListState, delta: isize, len: usize) {
    let current = state.selected().unwrap_or(0);
    state.select(Some(step(current, delta, len)));
}
