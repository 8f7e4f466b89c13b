//! Vertical page layout measured in terminal rows.

use ratatui::{
    text::Line,
    widgets::{Paragraph, Wrap},
};

use frontpage_types::{ElementRect, SectionId, ui::UiOptions};

use crate::{
    content::{current_year, footer_lines, section_lines},
    theme::{glyphs, palette},
};

/// Fixed header overlaying the top of the viewport.
pub const HEADER_ROWS: u16 = 3;
/// Columns kept clear on each side of section bodies.
pub const HORIZONTAL_PADDING: u16 = 4;

/// Rows occupied by one block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub top: u32,
    pub height: u32,
}

impl RowSpan {
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// Page-pixel rectangle of this span.
    #[must_use]
    pub fn rect(&self, row_height_px: f64) -> ElementRect {
        ElementRect::new(
            f64::from(self.top) * row_height_px,
            f64::from(self.height) * row_height_px,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub rows: RowSpan,
}

/// Sections stacked top to bottom followed by the footer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    width: u16,
    viewport_rows: u16,
    sections: Vec<SectionSpan>,
    footer: Option<RowSpan>,
}

impl PageLayout {
    /// Measure every section at `width` columns. The hero fills at least one
    /// screen.
    #[must_use]
    pub fn compute(width: u16, viewport_rows: u16, options: UiOptions) -> Self {
        let palette = palette(options);
        let glyphs = glyphs(options);
        let text_width = content_width(width);

        let heights: Vec<(SectionId, u32)> = SectionId::ALL
            .into_iter()
            .map(|id| {
                let rows = wrapped_rows(section_lines(id, &palette, &glyphs), text_width);
                let rows = if id == SectionId::Home {
                    rows.max(u32::from(viewport_rows))
                } else {
                    rows
                };
                (id, rows)
            })
            .collect();
        let footer = wrapped_rows(footer_lines(current_year(), &palette, &glyphs), text_width);

        Self::stacked(width, viewport_rows, &heights, footer)
    }

    /// Stack the given section heights in order. Sections left out have no
    /// element on the page.
    #[must_use]
    pub fn stacked(
        width: u16,
        viewport_rows: u16,
        heights: &[(SectionId, u32)],
        footer_rows: u32,
    ) -> Self {
        let mut top = 0;
        let sections = heights
            .iter()
            .map(|&(id, height)| {
                let span = SectionSpan {
                    id,
                    rows: RowSpan { top, height },
                };
                top += height;
                span
            })
            .collect();
        let footer = (footer_rows > 0).then_some(RowSpan {
            top,
            height: footer_rows,
        });
        Self {
            width,
            viewport_rows,
            sections,
            footer,
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<RowSpan> {
        self.sections
            .iter()
            .find(|span| span.id == id)
            .map(|span| span.rows)
    }

    #[must_use]
    pub fn footer(&self) -> Option<RowSpan> {
        self.footer
    }

    #[must_use]
    pub fn total_rows(&self) -> u32 {
        self.footer
            .map(|footer| footer.bottom())
            .or_else(|| self.sections.last().map(|span| span.rows.bottom()))
            .unwrap_or(0)
    }

    #[must_use]
    pub fn max_scroll_rows(&self) -> u32 {
        self.total_rows()
            .saturating_sub(u32::from(self.viewport_rows))
    }
}

#[must_use]
pub fn content_width(width: u16) -> u16 {
    width.saturating_sub(HORIZONTAL_PADDING * 2).max(1)
}

fn wrapped_rows(lines: Vec<Line<'static>>, width: u16) -> u32 {
    let rows = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .line_count(width);
    u32::try_from(rows).unwrap_or(u32::MAX)
}
