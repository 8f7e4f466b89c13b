//! Terminal application state: the page, its viewport and reveal effects.

use std::{cell::RefCell, rc::Rc, time::Duration};

use frontpage_config::FrontpageConfig;
use frontpage_core::{Page, Subscription, ViewportHost};
use frontpage_types::{
    ControllerSettings, SectionId, SectionRegistry,
    ui::{MenuState, ScrollState, UiOptions},
};
use tracing::{debug, info};

use crate::{
    effects::RevealEffects,
    layout::{HEADER_ROWS, PageLayout},
    viewport::TerminalViewport,
};

/// Everything the terminal front end needs to know up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppSettings {
    pub controller: ControllerSettings,
    pub ui: UiOptions,
    pub row_height_px: f64,
    /// Below this many columns the nav collapses into the menu.
    pub mobile_breakpoint_cols: u16,
    pub fade: Duration,
    pub smooth_scroll: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            controller: ControllerSettings::default(),
            ui: UiOptions::default(),
            row_height_px: 16.0,
            mobile_breakpoint_cols: 80,
            fade: Duration::from_millis(700),
            smooth_scroll: Duration::from_millis(600),
        }
    }
}

impl From<&FrontpageConfig> for AppSettings {
    fn from(config: &FrontpageConfig) -> Self {
        Self {
            controller: config.settings(),
            ui: config.ui_options(),
            row_height_px: config.viewport.row_height_px,
            mobile_breakpoint_cols: config.viewport.mobile_breakpoint_cols,
            fade: config.fade_duration(),
            smooth_scroll: config.smooth_scroll_duration(),
        }
    }
}

/// User intents decoded from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollBy(i32),
    PageUp,
    PageDown,
    Top,
    Bottom,
    Navigate(SectionId),
    /// The hero call-to-action.
    ViewCompanies,
    ToggleMenu,
    /// Close the menu if open, otherwise quit.
    Dismiss,
    Quit,
}

pub struct FrontpageApp {
    settings: AppSettings,
    page: Page,
    viewport: Rc<TerminalViewport>,
    effects: Rc<RefCell<RevealEffects>>,
    _reveals: Subscription,
    width: u16,
    height: u16,
    should_quit: bool,
}

impl FrontpageApp {
    #[must_use]
    pub fn new(settings: AppSettings, width: u16, height: u16) -> Self {
        let layout = PageLayout::compute(width, height, settings.ui);
        let viewport = Rc::new(TerminalViewport::new(
            layout,
            settings.row_height_px,
            settings.smooth_scroll,
        ));
        let host: Rc<dyn ViewportHost> = viewport.clone();
        let mut page = Page::new(
            host,
            SectionRegistry::standard(),
            settings.controller,
        );

        let effects = Rc::new(RefCell::new(RevealEffects::new(settings.fade)));
        let sink = Rc::clone(&effects);
        let reveals = page
            .visibility()
            .subscribe(move |section| sink.borrow_mut().start(*section));

        page.mount();
        info!(width, height, "Frontpage started");

        Self {
            settings,
            page,
            viewport,
            effects,
            _reveals: reveals,
            width,
            height,
            should_quit: false,
        }
    }

    /// Advance smooth scrolling and fades by one frame.
    pub fn tick(&mut self, delta: Duration) {
        self.viewport.tick(delta);
        self.effects.borrow_mut().tick(delta);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.viewport
            .set_layout(PageLayout::compute(width, height, self.settings.ui));
        debug!(width, height, "Resized");
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ScrollBy(rows) => self.viewport.scroll_by(rows),
            Action::PageUp => self.viewport.scroll_by(-self.page_rows()),
            Action::PageDown => self.viewport.scroll_by(self.page_rows()),
            Action::Top => self.viewport.scroll_to_top(),
            Action::Bottom => self.viewport.scroll_to_bottom(),
            Action::Navigate(section) => self.navigate(section),
            Action::ViewCompanies => self.navigate(SectionId::Portfolio),
            Action::ToggleMenu => {
                if self.is_narrow() {
                    self.page.toggle_menu();
                } else {
                    debug!("Menu toggle ignored on wide layout");
                }
            }
            Action::Dismiss => {
                if self.page.menu_state().is_open() {
                    self.page.close_menu();
                } else {
                    self.should_quit = true;
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&self, section: SectionId) {
        if !self.page.navigate_to_section(section).is_found() {
            debug!(%section, "Navigation ignored");
        }
    }

    fn page_rows(&self) -> i32 {
        i32::from(self.height.saturating_sub(HEADER_ROWS + 1).max(1))
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.width < self.settings.mobile_breakpoint_cols
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.settings.ui
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.page.scroll_state()
    }

    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        self.page.menu_state()
    }

    #[must_use]
    pub fn has_entered(&self, section: SectionId) -> bool {
        self.page.has_entered(section)
    }

    /// 0.0 while a section waits to be revealed, 1.0 once its fade is done.
    #[must_use]
    pub fn opacity(&self, section: SectionId) -> f32 {
        let phase = self.page.visibility().phase(section);
        self.effects.borrow().opacity(section, phase)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.viewport.is_animating() || self.effects.borrow().is_animating()
    }

    #[must_use]
    pub fn viewport(&self) -> &TerminalViewport {
        &self.viewport
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }
}
