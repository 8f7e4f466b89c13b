//! Shared test utilities and fixtures
//!
//! Drive a `FrontpageApp` headlessly and render it through ratatui's
//! `TestBackend`.

#![allow(dead_code)]

use std::time::Duration;

use frontpage_tui::{AppSettings, FrontpageApp, draw};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 30;

/// App on a wide terminal with default settings.
pub fn wide_app() -> FrontpageApp {
    FrontpageApp::new(AppSettings::default(), WIDTH, HEIGHT)
}

/// App below the mobile breakpoint.
pub fn narrow_app() -> FrontpageApp {
    FrontpageApp::new(AppSettings::default(), 60, HEIGHT)
}

/// Run frames until smooth scrolls and fades finish.
pub fn settle(app: &mut FrontpageApp) {
    for _ in 0..200 {
        if !app.is_animating() {
            return;
        }
        app.tick(Duration::from_millis(16));
    }
    panic!("animations never settled");
}

pub fn render(app: &FrontpageApp, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Frame text, one line per row, trailing blanks trimmed.
pub fn screen_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| {
            let row: String = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
