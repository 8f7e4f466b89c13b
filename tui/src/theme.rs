//! Color theme and glyphs for the Frontpage TUI.
//!
//! Black-and-zinc palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use frontpage_types::ui::UiOptions;

/// Zinc scale color constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_BLACK: Color = Color::Rgb(0, 0, 0);
    pub const BG_ZINC_950: Color = Color::Rgb(9, 9, 11);
    pub const BG_ZINC_900: Color = Color::Rgb(24, 24, 27);
    pub const BORDER_ZINC_800: Color = Color::Rgb(39, 39, 42);

    // === Foregrounds ===
    pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_GRAY_300: Color = Color::Rgb(209, 213, 219);
    pub const TEXT_GRAY_400: Color = Color::Rgb(156, 163, 175);
    pub const TEXT_GRAY_500: Color = Color::Rgb(107, 114, 128);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Page background.
    pub bg: Color,
    /// Alternate section background.
    pub bg_alt: Color,
    /// Solid header and cards.
    pub bg_panel: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_faint: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg: colors::BG_BLACK,
            bg_alt: colors::BG_ZINC_950,
            bg_panel: colors::BG_ZINC_900,
            border: colors::BORDER_ZINC_800,
            text_primary: colors::TEXT_WHITE,
            text_secondary: colors::TEXT_GRAY_300,
            text_muted: colors::TEXT_GRAY_400,
            text_faint: colors::TEXT_GRAY_500,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_alt: Color::Black,
            bg_panel: Color::Black,
            border: Color::White,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            text_faint: Color::Gray,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub menu: &'static str,
    pub close: &'static str,
    pub arrow_right: &'static str,
    pub mail: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
    pub rule: &'static str,
    pub copyright: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            menu: "=",
            close: "x",
            arrow_right: "->",
            mail: "@",
            linkedin: "in",
            twitter: "tw",
            rule: "|",
            copyright: "(c)",
        }
    } else {
        Glyphs {
            menu: "☰",
            close: "✕",
            arrow_right: "→",
            mail: "✉",
            linkedin: "in",
            twitter: "𝕏",
            rule: "┃",
            copyright: "©",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_item(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_faint)
    }

    #[must_use]
    pub fn cta(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }
}
