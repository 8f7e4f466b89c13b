//! Frontpage CLI - Binary entry point and terminal session management.
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`frontpage_tui::InputPump`])
//! 3. Advance smooth scrolling and reveal fades (`app.tick()`)
//! 4. Render frame

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        size as terminal_size,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use frontpage_config::FrontpageConfig;
use frontpage_tui::{AppSettings, FrontpageApp, InputPump, draw, handle_events};

const FRAME_DURATION: Duration = Duration::from_millis(8);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file, ~/.frontpage/logs/frontpage.log
    if let Some(config_path) = FrontpageConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("frontpage.log"));
    }

    // Fallback: ./.frontpage/logs/frontpage.log (useful in constrained environments)
    candidates.push(PathBuf::from(".frontpage").join("logs").join("frontpage.log"));

    candidates
}

fn load_settings() -> AppSettings {
    let config = match FrontpageConfig::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            info!("No config file found; using defaults");
            FrontpageConfig::default()
        }
        Err(err) => {
            error!(%err, "Ignoring invalid config; using defaults");
            FrontpageConfig::default()
        }
    };
    AppSettings::from(&config)
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages the terminal lifecycle including:
/// - Raw mode (disables line buffering and echo)
/// - Bracketed paste (keeps pasted text from being read as key bindings)
/// - Alternate screen
/// - Alternate scroll mode (maps scroll wheel to arrows without mouse capture)
///
/// On drop, all terminal state is restored to its original configuration,
/// ensuring the terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableBracketedPaste, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
            return Err(err.into());
        }
        // Mode 1007 turns the scroll wheel into Up/Down arrow keys in the
        // alternate screen without capturing mouse clicks.
        let _ = out.write_all(b"\x1b[?1007h");
        let _ = out.flush();

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                // Disable alternate scroll mode: CSI ? 1007 l
                let _ = out.write_all(b"\x1b[?1007l");
                let _ = out.flush();
                let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let backend = self.terminal.backend_mut();
        // Disable alternate scroll mode: CSI ? 1007 l
        let _ = backend.write_all(b"\x1b[?1007l");
        let _ = backend.flush();
        let _ = execute!(backend, LeaveAlternateScreen, DisableBracketedPaste);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = load_settings();
    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, settings).await
    };

    if let Err(err) = &result {
        error!(?err, "Frontpage exited with an error");
    }
    info!("Frontpage stopped");
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: AppSettings,
) -> Result<()> {
    let (width, height) = terminal_size()?;
    let mut app = FrontpageApp::new(settings, width, height);
    let mut input = InputPump::new();
    let mut frames = interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(&mut app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_frame));
        last_frame = now;

        if let Err(e) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
