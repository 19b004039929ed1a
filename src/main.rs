//! headline-carousel — a terminal landing page with a carousel of top news
//! headlines.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  PollMsg   ┌──────────┐  draw()  ┌──────────┐
//! │  poll.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (thread) │ ◄───────── │ (state)  │          │ (render) │
//! └──────────┘  Refresh   └──────────┘          └──────────┘
//!      │                       ▲
//!      ▼                       │ handle_key_event()
//! ┌──────────┐            ┌──────────┐
//! │ source/  │            │ input.rs │
//! └──────────┘            └──────────┘
//! ```
//!
//! * **`source/`** — the `ArticleSource` trait, the news API client, and
//!   the TTL cache wrapper.
//! * **`carousel`** — the cursor/window view-model.
//! * **`poll`** — background thread that fetches on start and on request.
//! * **`app`** — owns all application state (carousel, load state, status).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`config`** / **`error`** — startup options and typed errors.

mod app;
mod carousel;
mod config;
mod error;
mod input;
mod poll;
mod source;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::App;
use config::Config;
use error::ConfigError;
use source::NewsApiSource;

// ---------------------------------------------------------------------------
// RAII terminal guard
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Append logs to the configured file, or the default one in the temp
/// directory.  Stdout belongs to the TUI, so logs never go there.
fn init_tracing(config: &Config) -> Result<(), ConfigError> {
    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ConfigError::LogFile {
            path: path.display().to_string(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let config = Config::parse();
    config.validate()?;
    init_tracing(&config)?;
    info!(country = %config.country, page_size = config.page_size, "headline-carousel starting");

    let source = NewsApiSource::new(config.news_api())?;
    let poller = poll::spawn(source, config.cache_ttl());

    install_panic_hook();
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(config.layout());

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Drain any messages from the fetch thread.
    //   2. Forward a pending refresh request.
    //   3. Render the UI.
    //   4. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        while let Ok(msg) = poller.rx.try_recv() {
            app.apply(msg);
        }

        if let Some(kind) = app.pending_refresh.take() {
            if !poller.refresh(kind) {
                warn!("fetch thread has stopped");
                app.status = "Error: fetch thread stopped".into();
            }
        }

        guard.terminal.draw(|f| ui::draw(&app, f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    info!("headline-carousel exiting");
    Ok(())
}
