use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use vignette_core::animation::LoadingDots;
use vignette_core::{AppConfig, SceneKind};
use vignette_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    load_theme, Theme,
    widgets::{PopupWidget, SceneWidget, StatusBarWidget},
};

/// Longest frame step fed to the scene; longer stalls are not replayed
const MAX_FRAME_SECS: f64 = 0.25;
/// One more loading dot per second
const LOADING_DOT_SECS: f64 = 1.0;
const LOADING_FRAME_MS: u64 = 100;

pub async fn run(mut config: AppConfig, scene: Option<SceneKind>, offline: bool) -> Result<()> {
    if let Some(kind) = scene {
        config.ui.start_scene = kind;
    }
    let theme = load_theme(&config.ui.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Vignette"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start(&mut terminal, config, theme, offline).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn start<B: Backend>(
    terminal: &mut Terminal<B>,
    config: AppConfig,
    theme: Theme,
    offline: bool,
) -> Result<()> {
    let label = "Loading dialogue";
    let mut loading = LoadingDots::new(label, LOADING_DOT_SECS);
    let width = label.len() + LoadingDots::MAX_DOTS;

    let chat_data = {
        let fetch = super::load_chat_data(&config, offline);
        tokio::pin!(fetch);
        let mut redraw = tokio::time::interval(Duration::from_millis(LOADING_FRAME_MS));
        let mut last = Instant::now();

        loop {
            tokio::select! {
                data = &mut fetch => break data,
                _ = redraw.tick() => {
                    let now = Instant::now();
                    loading.advance(now.duration_since(last).as_secs_f64());
                    last = now;
                    // Pad so the popup keeps its width while dots come and go
                    let text = format!("{:<width$}", loading.text(), width = width);
                    terminal.draw(|frame| PopupWidget::render_loading(frame, &text, &theme))?;
                }
            }
        }
    };

    let mut app = App::new(config, chat_data, theme)?;
    let outcome = run_app(terminal, &mut app);
    app.shutdown();
    outcome
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let event_handler = EventHandler::new(app.config().ui.tick_rate_ms);
    let mut last_frame = Instant::now();
    info!("Viewer started");

    // Main loop
    loop {
        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f64().min(MAX_FRAME_SECS);
        last_frame = now;
        app.tick(delta);

        // Draw UI
        let view: &App = app;
        terminal.draw(|frame| {
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            SceneWidget::render(frame, main_layout[0], view);
            StatusBarWidget::render(frame, main_layout[1], view);

            if view.mode == Mode::Help {
                PopupWidget::render_help(frame, &view.keymap, &view.theme);
            }
        })?;
        app.frame_drawn(now);

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    app.handle_action(action)?;
                }
                AppEvent::Resize(width, height) => {
                    tracing::debug!("Resized to {}x{}", width, height);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("Viewer closed");
            break;
        }
    }

    Ok(())
}
