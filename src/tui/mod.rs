pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};

use self::app::{InputMode, TuiApp};
use self::event::{AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let config = ctx.config.clone();
    let mut tui_app = TuiApp::new(ctx.source.clone(), config.general.language);
    let event_handler = EventHandler::new(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        // Blocking poll; yield so spawned loads make progress on the
        // current-thread scheduler too.
        let event = event_handler.next()?;
        tokio::task::yield_now().await;

        match event {
            AppEvent::Key(key) => {
                tui_app.clear_status();
                if tui_app.input_mode == InputMode::Search {
                    tui_app.handle_search_key(&key);
                } else {
                    let action = config.keybindings.get_action(&key);
                    tui_app.handle_action(action);
                }
            }
            AppEvent::Tick => {}
        }
        tui_app.tick();

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}
