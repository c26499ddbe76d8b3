use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::browse::title::QURAN_SUBHEADING;
use crate::browse::{ChapterListing, QuranTab, View};
use crate::config::ColorConfig;
use crate::domain::chapter::{AYAH_COUNT, CHAPTER_COUNT, JUZ_COUNT};
use crate::domain::{ChapterRecord, Language, RevelationPlace};
use crate::fetcher::LoadState;
use crate::reader::Reader;
use crate::tui::app::{
    DuaFocus, DuaScreen, HomeEntry, InputMode, QuranFocus, QuranScreen, Screen, TuiApp,
};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    let searching = app.input_mode == InputMode::Search;
    match &mut app.screen {
        Screen::Home => render_home(frame, &mut app.home_state, colors, chunks[0]),
        Screen::Duas(duas) => render_duas(frame, duas, searching, colors, chunks[0]),
        Screen::Quran(quran) => render_quran(frame, quran, searching, colors, chunks[0]),
    }
    render_status_bar(frame, app, colors, chunks[1]);
}

fn selection_style(colors: &ColorConfig) -> Style {
    Style::default()
        .bg(colors.selection_bg)
        .fg(colors.selection_fg)
        .add_modifier(Modifier::BOLD)
}

fn bordered(title: String, focused: bool, colors: &ColorConfig) -> Block<'static> {
    let border = if focused {
        colors.focused_border
    } else {
        colors.border
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_home(
    frame: &mut Frame,
    state: &mut ratatui::widgets::ListState,
    colors: &ColorConfig,
    area: Rect,
) {
    let items: Vec<ListItem> = HomeEntry::ALL
        .iter()
        .map(|entry| ListItem::new(entry.label()))
        .collect();

    let list = List::new(items)
        .block(bordered(" Noor ".to_string(), true, colors))
        .highlight_style(selection_style(colors))
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, area, state);
}

fn render_search_box(
    frame: &mut Frame,
    query: &str,
    placeholder: &str,
    searching: bool,
    colors: &ColorConfig,
    area: Rect,
) {
    let (text, style) = if query.is_empty() && !searching {
        (placeholder.to_string(), Style::default().fg(colors.border))
    } else if searching {
        (format!("{}▏", query), Style::default().fg(colors.search_active))
    } else {
        (query.to_string(), Style::default())
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .block(bordered(" / Search ".to_string(), searching, colors));
    frame.render_widget(paragraph, area);
}

fn render_duas(
    frame: &mut Frame,
    duas: &mut DuaScreen,
    searching: bool,
    colors: &ColorConfig,
    area: Rect,
) {
    let language = duas.browser.language();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    // Heading and language selector
    let mut selector: Vec<Span> = Vec::new();
    for lang in Language::ALL {
        let style = if lang == language {
            Style::default()
                .fg(colors.active_tab)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(colors.border)
        };
        selector.push(Span::styled(format!(" {} ", lang.label()), style));
        selector.push(Span::raw(" "));
    }
    let header = Text::from(vec![
        Line::from(Span::styled(
            duas.browser.title().to_string(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(selector),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    if duas.browser.view() == View::Detail {
        render_dua_detail(frame, duas, colors, chunks[1]);
        return;
    }

    let show_categories = duas.browser.category().is_none();
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if show_categories { 3 } else { 0 }),
            Constraint::Min(3),
        ])
        .split(chunks[1]);

    render_search_box(
        frame,
        duas.browser.query(),
        language.search_placeholder(),
        searching,
        colors,
        body[0],
    );

    if show_categories {
        let focused = duas.focus == DuaFocus::Categories;
        let spans: Vec<Span> = duas
            .browser
            .categories()
            .into_iter()
            .enumerate()
            .flat_map(|(i, category)| {
                let style = if focused && i == duas.category_index {
                    selection_style(colors)
                } else {
                    Style::default()
                };
                [Span::styled(format!(" {} ", category), style), Span::raw("·")]
            })
            .collect();
        let strip = Paragraph::new(Line::from(spans))
            .block(bordered(" Categories (Tab) ".to_string(), focused, colors));
        frame.render_widget(strip, body[1]);
    }

    let records = duas.browser.visible();
    let items: Vec<ListItem> = records
        .iter()
        .map(|record| {
            ListItem::new(Text::from(vec![
                Line::from(format!("{:>2}. {}", record.id, record.title(language))),
                Line::from(Span::styled(
                    format!("    {}", record.arabic),
                    Style::default().fg(colors.arabic_text),
                )),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(bordered(
            format!(" {} ({}) ", duas.browser.title(), records.len()),
            duas.focus == DuaFocus::Records,
            colors,
        ))
        .highlight_style(selection_style(colors));
    frame.render_stateful_widget(list, body[2], &mut duas.list_state);
}

fn render_dua_detail(frame: &mut Frame, duas: &DuaScreen, colors: &ColorConfig, area: Rect) {
    let Some(record) = duas.browser.selected() else {
        return;
    };
    let language = duas.browser.language();
    let label = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        label(language.arabic_label()),
        Line::from(Span::styled(
            record.arabic,
            Style::default().fg(colors.arabic_text),
        )),
        Line::from(""),
        label(language.transliteration_label()),
        Line::from(Span::styled(
            record.transliteration,
            Style::default()
                .fg(colors.transliteration)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        label(language.translation_label()),
        Line::from(record.translation(language).body),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(bordered(
            format!(" {} · {} ", record.id, record.category(language)),
            true,
            colors,
        ))
        .wrap(Wrap { trim: false })
        .scroll((duas.detail_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_quran(
    frame: &mut Frame,
    quran: &mut QuranScreen,
    searching: bool,
    colors: &ColorConfig,
    area: Rect,
) {
    if let Some(reader) = quran.reader.as_ref() {
        render_reader(frame, reader, colors, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let heading = Style::default()
        .fg(colors.heading)
        .add_modifier(Modifier::BOLD);
    let header = Text::from(vec![
        Line::from(Span::styled(quran.browser.title().to_string(), heading)),
        Line::from(QURAN_SUBHEADING),
        Line::from(format!(
            "{} সূরা · {} পারা · {} আয়াত",
            CHAPTER_COUNT, JUZ_COUNT, AYAH_COUNT
        )),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    render_search_box(
        frame,
        quran.browser.query(),
        "সূরা খুঁজুন...",
        searching,
        colors,
        chunks[1],
    );

    let tabs: Vec<Span> = QuranTab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == quran.browser.tab() {
                Style::default()
                    .fg(colors.active_tab)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(colors.border)
            };
            Span::styled(format!(" {} ", tab.label()), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[2]);

    let list_area = chunks[3];
    match quran.browser.listing() {
        ChapterListing::Loading => {
            let p = Paragraph::new("Loading chapters...").block(bordered(String::new(), false, colors));
            frame.render_widget(p, list_area);
        }
        ChapterListing::Failed(error) => {
            let p = Paragraph::new(format!("Failed to load chapters: {}", error))
                .style(Style::default().fg(colors.error))
                .wrap(Wrap { trim: false })
                .block(bordered(String::new(), false, colors));
            frame.render_widget(p, list_area);
        }
        ChapterListing::Chapters { featured, chapters } => {
            let (strip_area, list_area) = if featured.is_empty() {
                (None, list_area)
            } else {
                let split = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(3), Constraint::Min(3)])
                    .split(list_area);
                (Some(split[0]), split[1])
            };

            let strip_focused = quran.focus == QuranFocus::Featured;
            if let Some(strip_area) = strip_area {
                let spans: Vec<Span> = featured
                    .iter()
                    .enumerate()
                    .flat_map(|(i, chapter)| {
                        let style = if strip_focused && i == quran.featured_index {
                            selection_style(colors)
                        } else {
                            Style::default()
                        };
                        [
                            Span::styled(format!(" {} ", chapter.english_name), style),
                            Span::raw("·"),
                        ]
                    })
                    .collect();
                let strip = Paragraph::new(Line::from(spans))
                    .block(bordered(" ★ (Tab) ".to_string(), strip_focused, colors));
                frame.render_widget(strip, strip_area);
            }

            if chapters.is_empty() {
                let p = Paragraph::new("কোনো সূরা পাওয়া যায়নি")
                    .block(bordered(" 0 ".to_string(), true, colors));
                frame.render_widget(p, list_area);
                return;
            }

            let items: Vec<ListItem> = chapters
                .iter()
                .map(|chapter| chapter_item(chapter, colors))
                .collect();
            let list = List::new(items)
                .block(bordered(format!(" {} ", chapters.len()), !strip_focused, colors))
                .highlight_style(selection_style(colors));
            frame.render_stateful_widget(list, list_area, &mut quran.list_state);
        }
        ChapterListing::Juz(parts) => {
            let items: Vec<ListItem> = parts
                .iter()
                .map(|n| ListItem::new(format!("পারা {}", n)))
                .collect();
            let list = List::new(items)
                .block(bordered(format!(" {} ", QuranTab::Juz.label()), true, colors))
                .highlight_style(selection_style(colors));
            frame.render_stateful_widget(list, list_area, &mut quran.list_state);
        }
        ChapterListing::Bookmarks => {
            let p = Paragraph::new("কোনো সংরক্ষিত সূরা নেই")
                .block(bordered(format!(" {} ", QuranTab::Bookmarks.label()), true, colors));
            frame.render_widget(p, list_area);
        }
    }
}

fn chapter_item<'a>(chapter: &'a ChapterRecord, colors: &ColorConfig) -> ListItem<'a> {
    let badge = match chapter.revelation_type {
        RevelationPlace::Meccan => colors.meccan_badge,
        RevelationPlace::Medinan => colors.medinan_badge,
    };
    ListItem::new(Line::from(vec![
        Span::raw(format!("{:>3}. ", chapter.number)),
        Span::styled(
            chapter.english_name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}  ", chapter.ayah_label())),
        Span::styled(
            format!("[{}]", chapter.revelation_type.label()),
            Style::default().fg(badge),
        ),
        Span::raw("  "),
        Span::styled(chapter.name.as_str(), Style::default().fg(colors.arabic_text)),
    ]))
}

fn render_reader(frame: &mut Frame, reader: &Reader, colors: &ColorConfig, area: Rect) {
    let request = reader.request();
    let mut lines = vec![
        Line::from(Span::styled(
            request.local_name.as_str(),
            Style::default().fg(colors.arabic_text),
        )),
        Line::from(Span::styled(
            request.common_name_translation.as_str(),
            Style::default().fg(colors.transliteration),
        )),
        Line::from("─".repeat(area.width.saturating_sub(2) as usize)),
    ];

    match reader.verses() {
        LoadState::Loading => lines.push(Line::from("Loading verses...")),
        LoadState::Failed(error) => lines.push(Line::from(Span::styled(
            format!("Failed to load verses: {}", error),
            Style::default().fg(colors.error),
        ))),
        LoadState::Loaded(verses) => {
            for verse in verses {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("({}) ", verse.number_in_surah),
                        Style::default().fg(colors.heading),
                    ),
                    Span::styled(verse.text.as_str(), Style::default().fg(colors.arabic_text)),
                ]));
                lines.push(Line::from(""));
            }
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(bordered(
            format!(" {}. {} ", request.chapter_number, request.common_name),
            true,
            colors,
        ))
        .wrap(Wrap { trim: false })
        .scroll((reader.scroll(), 0));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, colors: &ColorConfig, area: Rect) {
    let status = if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if app.input_mode == InputMode::Search {
        "Type to filter  Enter:Keep  Esc:Clear".to_string()
    } else {
        match &app.screen {
            Screen::Home => "j/k:Navigate  Enter:Open  q:Quit".to_string(),
            Screen::Duas(d) if d.browser.view() == View::Detail => {
                "j/k:Scroll  Esc:Back  q:Quit".to_string()
            }
            Screen::Duas(_) => {
                "j/k:Navigate  Enter:Open  /:Search  Tab:Categories  l:Language  Esc:Back  q:Quit"
                    .to_string()
            }
            Screen::Quran(q) if q.reader.is_some() => "j/k:Scroll  Esc:Back  q:Quit".to_string(),
            Screen::Quran(_) => {
                "j/k:Navigate  Enter:Read  /:Search  Tab:Featured/Next tab  Esc:Back  q:Quit".to_string()
            }
        }
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::app::Result;
    use crate::domain::Verse;
    use crate::fetcher::ChapterSource;
    use crate::tui::event::Action;

    struct NeverSource;

    #[async_trait]
    impl ChapterSource for NeverSource {
        async fn fetch_chapters(&self) -> Result<Vec<ChapterRecord>> {
            std::future::pending().await
        }

        async fn fetch_verses(&self, _chapter: u16) -> Result<Vec<Verse>> {
            std::future::pending().await
        }
    }

    fn draw(app: &mut TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let colors = ColorConfig::default();
        terminal.draw(|frame| render(frame, app, &colors)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_home_renders_entries() {
        let mut app = TuiApp::new(Arc::new(NeverSource), Language::English);
        let screen = draw(&mut app);
        assert!(screen.contains("Duas"));
        assert!(screen.contains("Quran"));
    }

    #[test]
    fn test_dua_list_and_detail_render() {
        let mut app = TuiApp::new(Arc::new(NeverSource), Language::English);
        app.open(HomeEntry::Duas);
        let screen = draw(&mut app);
        assert!(screen.contains("Dua Collection"));
        assert!(screen.contains("Morning Dua"));

        app.handle_action(Action::Select);
        let screen = draw(&mut app);
        assert!(screen.contains("Transliteration"));
        assert!(screen.contains("Asbahna"));
    }

    #[tokio::test]
    async fn test_quran_shows_loading_placeholder() {
        let mut app = TuiApp::new(Arc::new(NeverSource), Language::English);
        app.open(HomeEntry::Quran);
        app.tick();
        let screen = draw(&mut app);
        assert!(screen.contains("Loading chapters..."));
    }
}
