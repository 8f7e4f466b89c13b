//! Config files flowing through to a running app.

use std::{fs, time::Duration};

use frontpage_config::{ConfigError, FrontpageConfig};
use frontpage_tui::{Action, AppSettings, FrontpageApp};
use frontpage_types::SectionId;
use tempfile::tempdir;

use crate::common::{HEIGHT, WIDTH};

fn load(contents: &str) -> Result<Option<FrontpageConfig>, ConfigError> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    FrontpageConfig::load_from(&path)
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let loaded = FrontpageConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn reduced_motion_jumps_straight_to_sections() {
    let config = load("[app]\nreduced_motion = true\n").unwrap().unwrap();
    let mut app = FrontpageApp::new(AppSettings::from(&config), WIDTH, HEIGHT);

    app.apply(Action::Navigate(SectionId::Contact));

    assert!(!app.is_animating());
    assert!(app.has_entered(SectionId::Contact));
    assert!((app.opacity(SectionId::Contact) - 1.0).abs() < f32::EPSILON);
}

#[test]
fn header_threshold_stays_fixed_whatever_the_file_says() {
    let config = load("[viewport]\nheader_threshold_px = 0.0\n[reveal]\nthreshold = 1.0\n")
        .unwrap()
        .unwrap();
    let mut app = FrontpageApp::new(AppSettings::from(&config), WIDTH, HEIGHT);

    // 3 rows = 48px, 4 rows = 64px.
    app.apply(Action::ScrollBy(3));
    assert!(!app.scroll_state().is_past_threshold);
    app.apply(Action::ScrollBy(1));
    assert!(app.scroll_state().is_past_threshold);
    assert!((AppSettings::from(&config).controller.reveal.threshold - 0.1).abs() < f64::EPSILON);
}

#[test]
fn narrow_breakpoint_is_configurable() {
    let config = load("[viewport]\nmobile_breakpoint_cols = 120\n")
        .unwrap()
        .unwrap();
    let app = FrontpageApp::new(AppSettings::from(&config), WIDTH, HEIGHT);
    assert!(app.is_narrow());
}

#[test]
fn durations_come_from_milliseconds() {
    let config = load("[reveal]\nfade_ms = 250\n[navigation]\nsmooth_scroll_ms = 400\n")
        .unwrap()
        .unwrap();
    let settings = AppSettings::from(&config);
    assert_eq!(settings.fade, Duration::from_millis(250));
    assert_eq!(settings.smooth_scroll, Duration::from_millis(400));
}

#[test]
fn invalid_values_are_reported_not_clamped() {
    let err = load("[viewport]\nrow_height_px = -1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = load("[viewport\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
