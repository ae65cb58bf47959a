// TUI event loop and terminal management
use crate::{App, InputMode, PendingLookup, Screen};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use toolhub_core::{Category, LookupEvent, LookupOutcome, Route};
use tracing::debug;

/// How long we wait for input before redrawing (spinner needs the ticks)
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run_tui(mut app: App, mouse_enabled: bool) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Lookups run on their own task and report back here
    let (tx, mut rx) = mpsc::unbounded_channel::<(u64, LookupOutcome)>();

    let result = loop {
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, &mut app)) {
            break Err(e.into());
        }

        while let Ok((generation, outcome)) = rx.try_recv() {
            app.finish_lookup(generation, outcome);
        }
        app.tick = app.tick.wrapping_add(1);

        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => break Err(e.into()),
        }

        let pending = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => handle_key(&mut app, key),
            Ok(Event::Mouse(mouse)) => {
                match mouse.kind {
                    MouseEventKind::ScrollDown => app.next_tool(),
                    MouseEventKind::ScrollUp => app.previous_tool(),
                    _ => {}
                }
                None
            }
            Ok(_) => None,
            Err(e) => break Err(e.into()),
        };

        if let Some(pending) = pending {
            spawn_lookup(&app, pending, tx.clone());
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

fn spawn_lookup(app: &App, pending: PendingLookup, tx: mpsc::UnboundedSender<(u64, LookupOutcome)>) {
    let simulator = app.simulator.clone();
    debug!("Spawning lookup #{} for {}", pending.generation, pending.url);
    tokio::spawn(async move {
        let outcome = simulator.lookup(&pending.url).await;
        // Receiver gone means the TUI already exited, nothing to do
        let _ = tx.send((pending.generation, outcome));
    });
}

/// Route one key press; returns a lookup to start, if any
fn handle_key(app: &mut App, key: KeyEvent) -> Option<PendingLookup> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return None;
    }

    // Any key acknowledges the notice
    app.clear_notice();

    if key.code == KeyCode::F(1) {
        app.toggle_help();
        return None;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.toggle_help();
        }
        return None;
    }

    match app.screen {
        Screen::Catalog(_) => {
            handle_catalog_key(app, key);
            None
        }
        Screen::Detail(_) => handle_detail_key(app, key, ctrl),
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) {
    match app.input_mode() {
        InputMode::Searching => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.enter_normal_mode(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Char('?') => app.toggle_help(),
            KeyCode::Char('/') => app.enter_search_mode(),
            KeyCode::Char('j') | KeyCode::Down => app.next_tool(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_tool(),
            KeyCode::Tab => app.next_category(),
            KeyCode::BackTab => app.previous_category(),
            KeyCode::Char('m') => app.toggle_menu(),
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Enter => app.launch_selected(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                app.select_category(Category::ALL[index]);
            }
            _ => {}
        },
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent, ctrl: bool) -> Option<PendingLookup> {
    match key.code {
        KeyCode::Char('r') if ctrl => app.dispatch_lookup(LookupEvent::Reset),
        KeyCode::Char('d') if ctrl => app.dispatch_lookup(LookupEvent::Download),
        KeyCode::Esc => {
            app.navigate(Route::Catalog);
            None
        }
        KeyCode::Enter => app.dispatch_lookup(LookupEvent::Submit),
        KeyCode::Backspace => {
            app.pop_url_char();
            None
        }
        KeyCode::Char(c) if !ctrl => {
            app.push_url_char(c);
            None
        }
        _ => None,
    }
}
