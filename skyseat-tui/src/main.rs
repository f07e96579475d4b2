//! SKYSEAT TUI entry point.

use skyseat_tui::api_client::ApiClient;
use skyseat_tui::booking::{prepare_submission, refresh_all, send_booking};
use skyseat_tui::config::TuiConfig;
use skyseat_tui::error::TuiError;
use skyseat_tui::events::TuiEvent;
use skyseat_tui::keys::map_key;
use skyseat_tui::logging;
use skyseat_tui::state::{App, Effect};
use skyseat_tui::views::render_view;
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

type Term = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(&config.log_path)?;
    let api = ApiClient::new(&config)?;
    tracing::info!(api = api.base_url(), "Starting SkySeat TUI");
    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx);

    terminal.draw(|f| render_view(f, &app))?;
    refresh(&mut app, &api).await;

    let period = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                refresh(&mut app, &api).await;
            }
            event = event_rx.recv() => {
                let Some(event) = event else {
                    break;
                };
                if handle_event(&mut app, &api, &mut terminal, &mut event_rx, event).await? {
                    break;
                }
            }
        }
    }

    tracing::info!("SkySeat TUI exiting");
    Ok(())
}

fn setup_terminal() -> Result<Term, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                if let Some(event) = TuiEvent::from_terminal(evt) {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

/// Re-fetch everything; failures are already shown as notifications.
async fn refresh(app: &mut App, api: &ApiClient) {
    let anchor = app.cursor_anchor();
    let _ = refresh_all(&mut app.session, api).await;
    app.sync_after_refresh(anchor);
}

/// Returns `true` when the app should exit.
async fn handle_event(
    app: &mut App,
    api: &ApiClient,
    terminal: &mut Term,
    event_rx: &mut mpsc::Receiver<TuiEvent>,
    event: TuiEvent,
) -> Result<bool, TuiError> {
    let key = match event {
        TuiEvent::Input(key) => key,
        TuiEvent::Resize { width, height } => {
            tracing::debug!(width, height, "Terminal resized");
            return Ok(false);
        }
    };
    let Some(action) = map_key(key, app.text_entry()) else {
        return Ok(false);
    };

    match app.handle_action(action) {
        Effect::None => {}
        Effect::Quit => return Ok(true),
        Effect::Refresh => refresh(app, api).await,
        Effect::Submit => {
            if let Ok(request) = prepare_submission(&mut app.session) {
                terminal.draw(|f| render_view(f, app))?;
                let anchor = app.cursor_anchor();
                let _ = send_booking(&mut app.session, api, request).await;
                app.sync_after_refresh(anchor);
                // Keys pressed while the request was in flight are discarded.
                while event_rx.try_recv().is_ok() {}
            }
        }
    }
    Ok(false)
}
