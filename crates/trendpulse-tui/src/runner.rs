// TUI event loop and terminal management
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::debug;

use trendpulse_core::{snapshot, PrefStore, TrendFeed};

use crate::app::{App, AppEvent, InputMode};

/// Run the dashboard until the user quits.
///
/// All state lives in `App` on this task; background work (refresh
/// cycles, detail fetches, key reading) reports back over one mpsc
/// channel. No locks, no shared mutable state.
pub async fn run_tui(
    mut app: App,
    feed: Arc<dyn TrendFeed>,
    mut prefs: PrefStore,
    poll_interval: Duration,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);

    // Crossterm events block, so they get their own thread
    let input_tx = tx.clone();
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if input_tx.blocking_send(AppEvent::Input(key)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });

    // Fixed-interval poll ticks
    let tick_tx = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    // Immediate first refresh
    spawn_refresh(&mut app, &feed, &tx);

    // Main loop
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            AppEvent::Tick => {
                // Re-entrancy guard: skip the tick while a cycle runs
                if app.refresh_in_flight {
                    debug!("refresh still in flight, skipping tick");
                } else {
                    spawn_refresh(&mut app, &feed, &tx);
                }
            }
            AppEvent::Snapshot(snapshot) => app.apply_snapshot(snapshot),
            AppEvent::RefreshFailed(message) => app.refresh_failed(message),
            AppEvent::Detail { topic, result } => app.commit_detail(topic, result),
            AppEvent::Input(key) => handle_key(&mut app, key.code, &feed, &mut prefs, &tx),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Kick off one guarded refresh cycle in the background.
///
/// The cycle itself never fails (per-request fallbacks); a panic inside
/// it is the orchestration-level failure, caught via the task join and
/// surfaced as a banner.
fn spawn_refresh(app: &mut App, feed: &Arc<dyn TrendFeed>, tx: &mpsc::Sender<AppEvent>) {
    app.refresh_in_flight = true;
    let feed = Arc::clone(feed);
    let language = app.language;
    let tx = tx.clone();

    tokio::spawn(async move {
        let cycle = tokio::spawn(async move { snapshot::refresh(&*feed, language).await });
        let event = match cycle.await {
            Ok(snapshot) => AppEvent::Snapshot(snapshot),
            Err(e) => AppEvent::RefreshFailed(e.to_string()),
        };
        let _ = tx.send(event).await;
    });
}

fn spawn_detail_fetch(
    topic: String,
    app: &App,
    feed: &Arc<dyn TrendFeed>,
    tx: &mpsc::Sender<AppEvent>,
) {
    let feed = Arc::clone(feed);
    let language = app.language;
    let tx = tx.clone();

    tokio::spawn(async move {
        let result = feed
            .detail(&topic, language)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(AppEvent::Detail { topic, result }).await;
    });
}

fn handle_key(
    app: &mut App,
    code: KeyCode,
    feed: &Arc<dyn TrendFeed>,
    prefs: &mut PrefStore,
    tx: &mpsc::Sender<AppEvent>,
) {
    match app.input_mode {
        InputMode::Filtering => match code {
            KeyCode::Enter | KeyCode::Esc => {
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Char(c) => {
                app.keyword_input.push(c);
                app.apply_filters();
            }
            KeyCode::Backspace => {
                app.keyword_input.pop();
                app.apply_filters();
            }
            _ => {}
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') => {
                app.should_quit = true;
            }
            KeyCode::Char('?') => {
                app.show_help = !app.show_help;
            }
            KeyCode::Esc => {
                if app.show_help {
                    app.show_help = false;
                } else if app.detail_open() {
                    app.close_detail();
                } else {
                    app.error_message = None;
                }
            }
            KeyCode::Char('r') => {
                if app.refresh_in_flight {
                    debug!("manual refresh ignored, cycle in flight");
                } else {
                    spawn_refresh(app, feed, tx);
                }
            }
            KeyCode::Char('l') => {
                app.toggle_language();
                prefs.set_language(app.language);
                // Localized data needs a re-fetch in the new language
                if !app.refresh_in_flight {
                    spawn_refresh(app, feed, tx);
                }
            }
            KeyCode::Char('d') => {
                let dark = !app.dark_mode;
                app.set_dark_mode(dark);
                prefs.set_dark_mode(dark);
            }
            KeyCode::Char('/') => {
                app.input_mode = InputMode::Filtering;
            }
            KeyCode::Tab => app.next_category(),
            KeyCode::BackTab => app.previous_category(),
            KeyCode::Char('s') => app.toggle_surge_focus(),
            KeyCode::Char('j') | KeyCode::Down => {
                if app.detail_open() {
                    app.next_related();
                } else {
                    app.select_next();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if app.detail_open() {
                    app.previous_related();
                } else {
                    app.select_previous();
                }
            }
            KeyCode::Enter => {
                if !app.detail_open() {
                    if let Some(topic) = app.open_detail() {
                        spawn_detail_fetch(topic, app, feed, tx);
                    }
                }
            }
            KeyCode::Char('o') => {
                if let Some(url) = app.selected_related_url() {
                    let url = url.to_string();
                    if let Err(e) = open::that(&url) {
                        app.error_message = Some(format!("Failed to open browser: {}", e));
                    }
                }
            }
            _ => {}
        },
    }
}
