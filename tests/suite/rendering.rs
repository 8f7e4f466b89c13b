//! Full-frame rendering through the test backend.

use chrono::{Datelike, Local};
use insta::assert_snapshot;

use frontpage_tui::{Action, AppSettings, FrontpageApp, Palette};
use frontpage_types::{SectionId, ui::UiOptions};

use crate::common::{render, screen_text};

const WIDE: u16 = 100;
const NARROW: u16 = 60;
const ROWS: u16 = 16;

/// Render `app` and snapshot the frame text. The footer year is redacted.
fn snapshot_frame(name: &str, app: &FrontpageApp, width: u16) {
    let frame = screen_text(&render(app, width, ROWS))
        .replace(&Local::now().year().to_string(), "[year]");
    assert_snapshot!(name, frame);
}

#[test]
fn snapshot_first_frame() {
    let app = FrontpageApp::new(AppSettings::default(), WIDE, ROWS);
    snapshot_frame("first_frame", &app, WIDE);
}

#[test]
fn snapshot_narrow_menu_open() {
    let mut app = FrontpageApp::new(AppSettings::default(), NARROW, ROWS);
    app.apply(Action::ToggleMenu);
    snapshot_frame("narrow_menu_open", &app, NARROW);
}

#[test]
fn snapshot_solid_header() {
    let mut app = FrontpageApp::new(AppSettings::default(), WIDE, ROWS);
    app.apply(Action::ScrollBy(4));
    snapshot_frame("solid_header", &app, WIDE);
}

#[test]
fn snapshot_footer_at_bottom() {
    let mut app = FrontpageApp::new(AppSettings::default(), WIDE, ROWS);
    app.apply(Action::Bottom);
    snapshot_frame("footer_at_bottom", &app, WIDE);
}

#[test]
fn snapshot_ascii_footer() {
    let settings = AppSettings {
        ui: UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        },
        ..AppSettings::default()
    };
    let mut app = FrontpageApp::new(settings, NARROW, ROWS);
    app.apply(Action::Bottom);
    snapshot_frame("ascii_footer", &app, NARROW);
}

#[test]
fn header_background_tracks_scroll_position() {
    let mut app = FrontpageApp::new(AppSettings::default(), WIDE, ROWS);
    let palette = Palette::standard();

    app.apply(Action::ScrollBy(10));
    assert_eq!(render(&app, WIDE, ROWS)[(0, 0)].bg, palette.bg_panel);

    app.apply(Action::Top);
    assert_eq!(render(&app, WIDE, ROWS)[(0, 0)].bg, palette.bg);
}

#[test]
fn navigating_from_the_menu_restores_the_menu_glyph() {
    let mut app = FrontpageApp::new(AppSettings::default(), NARROW, ROWS);
    app.apply(Action::ToggleMenu);
    app.apply(Action::Navigate(SectionId::Philosophy));

    let frame = screen_text(&render(&app, NARROW, ROWS));
    let header = frame.lines().nth(1).unwrap_or_default();
    assert!(header.ends_with("m ☰"), "{header:?}");
}
