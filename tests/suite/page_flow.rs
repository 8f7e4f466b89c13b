//! End-to-end controller behavior on the terminal viewport.

use std::{cell::RefCell, rc::Rc, time::Duration};

use frontpage_core::{Page, ViewportHost};
use frontpage_tui::{Action, PageLayout, TerminalViewport};
use frontpage_types::{
    ControllerSettings, NavigationResult, SectionId, SectionRegistry,
    ui::{MenuState, RevealPhase},
};

use crate::common::{narrow_app, settle, wide_app};

const ROW_PX: f64 = 16.0;

/// Five 40-row sections and a 20-row viewport.
fn viewport() -> Rc<TerminalViewport> {
    let heights: Vec<(SectionId, u32)> = SectionId::ALL.into_iter().map(|id| (id, 40)).collect();
    let layout = PageLayout::stacked(100, 20, &heights, 3);
    Rc::new(TerminalViewport::new(layout, ROW_PX, Duration::from_millis(600)))
}

fn mounted(viewport: &Rc<TerminalViewport>) -> Page {
    let host: Rc<dyn ViewportHost> = viewport.clone();
    let mut page = Page::new(host, SectionRegistry::standard(), ControllerSettings::default());
    page.mount();
    page
}

fn run(viewport: &TerminalViewport, total: Duration) {
    let frame = Duration::from_millis(16);
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        viewport.tick(frame);
        elapsed += frame;
    }
}

#[test]
fn nav_click_smooth_scrolls_and_closes_menu() {
    let viewport = viewport();
    let page = mounted(&viewport);
    page.toggle_menu();

    let result = page.navigate_to("philosophy");

    assert_eq!(result, NavigationResult::Navigated(SectionId::Philosophy));
    // Closing happens when the scroll starts, not when it lands.
    assert_eq!(page.menu_state(), MenuState::Closed);
    assert!(viewport.is_animating());

    run(&viewport, Duration::from_secs(1));

    assert!((viewport.offset() - 120.0 * ROW_PX).abs() < f64::EPSILON);
    assert!(page.scroll_state().is_past_threshold);
    assert!(page.has_entered(SectionId::Philosophy));
}

#[test]
fn stale_links_are_silently_ignored() {
    let viewport = viewport();
    let page = mounted(&viewport);
    page.toggle_menu();

    for identifier in ["careers", "#careers", "mission", ""] {
        assert_eq!(page.navigate_to(identifier), NavigationResult::NotFound);
    }

    assert!(!viewport.is_animating());
    assert!(viewport.offset().abs() < f64::EPSILON);
    assert_eq!(page.menu_state(), MenuState::Open);
}

#[test]
fn hash_prefixed_anchor_resolves() {
    let viewport = viewport();
    let page = mounted(&viewport);
    assert_eq!(
        page.navigate_to("#contact"),
        NavigationResult::Navigated(SectionId::Contact)
    );
}

#[test]
fn sections_reveal_once_in_scroll_order() {
    let viewport = viewport();
    let host: Rc<dyn ViewportHost> = viewport.clone();
    let mut page = Page::new(host, SectionRegistry::standard(), ControllerSettings::default());
    let reveals = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reveals);
    let _sub = page
        .visibility()
        .subscribe(move |section| sink.borrow_mut().push(*section));
    page.mount();

    for _ in 0..3 {
        viewport.scroll_to_bottom();
        viewport.scroll_to_top();
    }
    for _ in 0..250 {
        viewport.scroll_by(1);
    }

    assert_eq!(
        *reveals.borrow(),
        vec![
            SectionId::Contact,
            SectionId::Mission,
            SectionId::Portfolio,
            SectionId::Philosophy,
        ]
    );
    for (_, phase) in page.visibility().records() {
        assert_eq!(phase, RevealPhase::Revealed);
    }
}

#[test]
fn header_tracks_offset_with_strict_threshold() {
    let viewport = viewport();
    let page = mounted(&viewport);

    // 3 rows = 48px, 4 rows = 64px.
    viewport.scroll_by(3);
    assert!(!page.scroll_state().is_past_threshold);
    viewport.scroll_by(1);
    assert!(page.scroll_state().is_past_threshold);
    viewport.scroll_to_top();
    assert!(!page.scroll_state().is_past_threshold);
}

#[test]
fn mount_syncs_header_to_existing_offset() {
    let viewport = viewport();
    viewport.scroll_by(10);
    let page = mounted(&viewport);
    assert!(page.scroll_state().is_past_threshold);
}

#[test]
fn unmounted_page_stops_listening() {
    let viewport = viewport();
    let mut page = mounted(&viewport);
    page.unmount();

    viewport.scroll_to_bottom();

    assert!(!page.scroll_state().is_past_threshold);
    assert!(!page.has_entered(SectionId::Contact));
}

#[test]
fn forced_close_on_closed_menu_is_silent() {
    let viewport = viewport();
    let page = mounted(&viewport);
    let changes = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&changes);
    let _sub = page.menu().subscribe(move |_| *counter.borrow_mut() += 1);

    page.close_menu();
    page.navigate_to("home");
    page.close_menu();

    assert_eq!(*changes.borrow(), 0);
}

#[test]
fn keyboard_nav_on_narrow_screen() {
    let mut app = narrow_app();
    app.apply(Action::ToggleMenu);
    assert_eq!(app.menu_state(), MenuState::Open);

    app.apply(Action::Navigate(SectionId::Portfolio));
    assert_eq!(app.menu_state(), MenuState::Closed);
    settle(&mut app);

    assert!(app.has_entered(SectionId::Portfolio));
    assert!(app.scroll_state().is_past_threshold);
}

#[test]
fn manual_scroll_interrupts_navigation() {
    let mut app = wide_app();
    app.apply(Action::Navigate(SectionId::Contact));
    app.tick(Duration::from_millis(100));
    app.apply(Action::ScrollBy(-1));

    assert!(!app.viewport().is_animating());
    let contact_top = app
        .viewport()
        .layout()
        .section(SectionId::Contact)
        .map(|rows| rows.top)
        .unwrap();
    assert!(app.viewport().offset_rows() < contact_top);
}
