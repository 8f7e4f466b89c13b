//! TUI rendering for Frontpage using ratatui.

mod app;
mod content;
mod effects;
mod input;
mod layout;
mod theme;
mod viewport;

pub use app::{Action, AppSettings, FrontpageApp};
pub use effects::{RevealEffects, apply_opacity, blend};
pub use input::{InputPump, apply_event, handle_events, key_action};
pub use layout::{HEADER_ROWS, PageLayout, RowSpan, SectionSpan};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
pub use viewport::TerminalViewport;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use frontpage_types::{SectionId, ui::MenuState};

use crate::{
    content::{BRAND, BRAND_SUFFIX, current_year, footer_lines, section_lines},
    layout::{HORIZONTAL_PADDING, content_width},
};

/// Rows of the page visible in the frame for a block at `rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisibleSlice {
    /// Frame row where the visible part starts.
    y: u16,
    /// Rows of the block scrolled off the top.
    skip: u16,
    height: u16,
}

fn visible_slice(rows: RowSpan, offset: u32, area: Rect) -> Option<VisibleSlice> {
    let view_top = offset;
    let view_bottom = offset + u32::from(area.height);
    let top = rows.top.max(view_top);
    let bottom = rows.bottom().min(view_bottom);
    if top >= bottom {
        return None;
    }
    let clamp = |value: u32| u16::try_from(value).unwrap_or(u16::MAX);
    Some(VisibleSlice {
        y: area.y.saturating_add(clamp(top - view_top)),
        skip: clamp(top - rows.top),
        height: clamp(bottom - top),
    })
}

pub fn draw(frame: &mut Frame, app: &FrontpageApp) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();

    // Clear with background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        area,
    );

    draw_sections(frame, app, area, &palette, &glyphs);
    draw_footer(frame, app, area, &palette, &glyphs);
    draw_header(frame, app, area, &palette, &glyphs);

    if app.is_narrow() && app.menu_state() == MenuState::Open {
        draw_mobile_menu(frame, area, &palette);
    }
}

fn section_background(id: SectionId, palette: &Palette) -> Color {
    match id {
        SectionId::Mission | SectionId::Philosophy => palette.bg_alt,
        _ => palette.bg,
    }
}

fn draw_sections(
    frame: &mut Frame,
    app: &FrontpageApp,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let layout = app.viewport().layout();
    let offset = app.viewport().offset_rows();
    let text_width = content_width(area.width);

    for span in layout.sections() {
        let Some(slice) = visible_slice(span.rows, offset, area) else {
            continue;
        };
        let background = section_background(span.id, palette);
        let band = Rect::new(area.x, slice.y, area.width, slice.height);
        frame.render_widget(Block::default().style(Style::default().bg(background)), band);

        let paragraph =
            Paragraph::new(section_lines(span.id, palette, glyphs)).wrap(Wrap { trim: false });
        // Shorter bodies (the hero) are centered vertically in their span.
        let body_rows = u32::try_from(paragraph.line_count(text_width)).unwrap_or(u32::MAX);
        let lead = span.rows.height.saturating_sub(body_rows) / 2;
        let skip = u32::from(slice.skip);
        let (y, skip) = if skip >= lead {
            (slice.y, skip - lead)
        } else {
            let gap = u16::try_from(lead - skip).unwrap_or(u16::MAX);
            (slice.y.saturating_add(gap), 0)
        };
        let height = slice.y.saturating_add(slice.height).saturating_sub(y);
        if height > 0 {
            let text_area = Rect::new(
                area.x.saturating_add(HORIZONTAL_PADDING),
                y,
                text_width.min(area.width),
                height,
            );
            let skip = u16::try_from(skip).unwrap_or(u16::MAX);
            frame.render_widget(paragraph.scroll((skip, 0)), text_area);
        }

        apply_opacity(
            frame.buffer_mut(),
            band,
            palette.bg,
            app.opacity(span.id),
        );
    }
}

fn draw_footer(
    frame: &mut Frame,
    app: &FrontpageApp,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let layout = app.viewport().layout();
    let Some(rows) = layout.footer() else {
        return;
    };
    let Some(slice) = visible_slice(rows, app.viewport().offset_rows(), area) else {
        return;
    };
    let band = Rect::new(area.x, slice.y, area.width, slice.height);
    let text_area = Rect::new(
        area.x.saturating_add(HORIZONTAL_PADDING),
        slice.y,
        content_width(area.width).min(area.width),
        slice.height,
    );
    frame.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.bg)),
        band,
    );
    let footer = Paragraph::new(footer_lines(current_year(), palette, glyphs))
        .wrap(Wrap { trim: false })
        .scroll((slice.skip, 0));
    frame.render_widget(footer, text_area);
}

fn draw_header(
    frame: &mut Frame,
    app: &FrontpageApp,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let header = Rect::new(area.x, area.y, area.width, HEADER_ROWS.min(area.height));
    if app.scroll_state().is_past_threshold {
        frame.render_widget(Clear, header);
        frame.render_widget(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.bg_panel)),
            header,
        );
    }
    if header.height < 2 {
        return;
    }

    let row = Rect::new(
        header.x.saturating_add(HORIZONTAL_PADDING / 2),
        header.y + 1,
        header.width.saturating_sub(HORIZONTAL_PADDING),
        1,
    );
    let brand = Line::from(vec![
        Span::styled(format!("{BRAND} "), styles::brand(palette)),
        Span::styled(BRAND_SUFFIX, styles::body(palette)),
    ]);
    let nav = if app.is_narrow() {
        let icon = match app.menu_state() {
            MenuState::Closed => glyphs.menu,
            MenuState::Open => glyphs.close,
        };
        Line::from(vec![
            Span::styled("m ", styles::key_hint(palette)),
            Span::styled(icon, styles::brand(palette)),
        ])
    } else {
        nav_line(palette)
    };
    let nav_width = u16::try_from(nav.width()).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(nav_width)]).areas(row);
    frame.render_widget(Paragraph::new(brand), left);
    frame.render_widget(Paragraph::new(nav), right);
}

fn nav_line(palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, section) in SectionId::NAVIGABLE.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{} ", index + 1),
            styles::key_hint(palette),
        ));
        spans.push(Span::styled(section.label(), styles::nav_item(palette)));
    }
    Line::from(spans)
}

fn draw_mobile_menu(frame: &mut Frame, area: Rect, palette: &Palette) {
    let items = SectionId::NAVIGABLE.len() as u16;
    let height = (items + 2).min(area.height.saturating_sub(HEADER_ROWS));
    if height == 0 {
        return;
    }
    let panel = Rect::new(area.x, area.y + HEADER_ROWS, area.width, height);
    let lines: Vec<Line<'static>> = SectionId::NAVIGABLE
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            Line::from(vec![
                Span::styled(format!("{} ", index + 1), styles::key_hint(palette)),
                Span::styled(section.label(), styles::nav_item(palette)),
            ])
        })
        .collect();

    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.bg_panel))
                .padding(Padding::new(HORIZONTAL_PADDING / 2, 0, 1, 0)),
        ),
        panel,
    );
}
