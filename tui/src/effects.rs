//! Reveal fade effects for sections entering the viewport.

use std::{collections::BTreeMap, time::Duration};

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use frontpage_types::{
    SectionId,
    ui::{EffectTimer, RevealPhase, ease_out_cubic},
};

/// Running fade-ins, one per revealed section.
#[derive(Debug, Clone, Default)]
pub struct RevealEffects {
    duration: Duration,
    fades: BTreeMap<SectionId, EffectTimer>,
}

impl RevealEffects {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            fades: BTreeMap::new(),
        }
    }

    pub fn start(&mut self, section: SectionId) {
        if self.duration.is_zero() {
            return;
        }
        self.fades.insert(section, EffectTimer::new(self.duration));
    }

    pub fn tick(&mut self, delta: Duration) {
        for timer in self.fades.values_mut() {
            timer.advance(delta);
        }
        self.fades.retain(|_, timer| !timer.is_finished());
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.fades.is_empty()
    }

    /// `phase` is `None` for sections that are never hidden.
    #[must_use]
    pub fn opacity(&self, section: SectionId, phase: Option<RevealPhase>) -> f32 {
        match phase {
            None => 1.0,
            Some(RevealPhase::Pending) => 0.0,
            Some(RevealPhase::Revealed) => self
                .fades
                .get(&section)
                .map_or(1.0, |timer| ease_out_cubic(timer.progress())),
        }
    }
}

/// Fade every cell in `area` toward `background`.
pub fn apply_opacity(buf: &mut Buffer, area: Rect, background: Color, opacity: f32) {
    if opacity >= 1.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            let fg = blend(background, cell.fg, opacity);
            let bg = blend(background, cell.bg, opacity);
            cell.set_fg(fg);
            cell.set_bg(bg);
        }
    }
}

/// Linear blend from `from` to `to`. Non-RGB colors snap at the midpoint.
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
            };
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
