//! Static page copy rendered into styled lines.

use chrono::{Datelike, Local};
use ratatui::text::{Line, Span};

use frontpage_types::SectionId;

use crate::theme::{Glyphs, Palette, styles};

pub const BRAND: &str = "BRUTE FORCE";
pub const BRAND_SUFFIX: &str = "CAPITAL";
pub const HERO_CTA: &str = "View Our Companies";

const HERO_TITLE: &str = "Building the Future,";
const HERO_SUBTITLE: &str = "One Product at a Time.";
const HERO_BODY: &str = "A holding company with a relentless focus on software, innovation, \
                         and scalable digital products.";

const MISSION_BODY: &str = "Brute Force Capital builds and backs software companies designed for \
                            long-term value creation. We operate lean, move fast, and hold a \
                            zero-fluff philosophy: make great products, find product-market fit, \
                            and scale.";

const COMPANY_BODY: &str = "Building innovative solutions that solve real problems at scale.";
const COMPANY_COUNT: usize = 3;

const PRINCIPLES: [(&str, &str); 4] = [
    (
        "Execution over ideas",
        "Ideas are cheap. Execution is everything. We focus on building, shipping, and iterating.",
    ),
    (
        "Speed as a competitive advantage",
        "Velocity compounds. We move fast, make decisions quickly, and adapt faster than the \
         competition.",
    ),
    (
        "Build simple things that solve real problems",
        "Complexity is the enemy of execution. We build elegant solutions to genuine problems.",
    ),
    (
        "Keep ownership, keep leverage, keep building",
        "We maintain control of our companies and compound value over time through ownership.",
    ),
];

const CONTACT_INTRO: &str = "For partnerships, acquisitions, or introductions, reach out here.";
const CONTACTS: [(&str, &str); 2] = [
    ("Email Nick", "Nick@bruteforcecapital.com"),
    ("Email Brennen", "Brennen@bruteforcecapital.com"),
];

const COPYRIGHT_HOLDER: &str = "Brute Force Capital. All rights reserved.";

/// Lines for one section body, padded above and below.
#[must_use]
pub fn section_lines(id: SectionId, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), Line::default()];
    match id {
        SectionId::Home => hero(&mut lines, palette, glyphs),
        SectionId::Mission => mission(&mut lines, palette),
        SectionId::Portfolio => portfolio(&mut lines, palette, glyphs),
        SectionId::Philosophy => philosophy(&mut lines, palette, glyphs),
        SectionId::Contact => contact(&mut lines, palette, glyphs),
    }
    lines.push(Line::default());
    lines.push(Line::default());
    lines
}

fn hero(lines: &mut Vec<Line<'static>>, palette: &Palette, glyphs: &Glyphs) {
    lines.push(Line::styled(HERO_TITLE, styles::heading(palette)).centered());
    lines.push(Line::styled(HERO_SUBTITLE, styles::heading(palette)).centered());
    lines.push(Line::default());
    lines.push(Line::styled(HERO_BODY, styles::body(palette)).centered());
    lines.push(Line::default());
    lines.push(
        Line::from(vec![
            Span::styled(
                format!(" {HERO_CTA} {} ", glyphs.arrow_right),
                styles::cta(palette),
            ),
            Span::styled("  Enter", styles::key_hint(palette)),
        ])
        .centered(),
    );
}

fn mission(lines: &mut Vec<Line<'static>>, palette: &Palette) {
    lines.push(Line::styled(SectionId::Mission.label(), styles::heading(palette)).centered());
    lines.push(Line::default());
    lines.push(Line::styled(MISSION_BODY, styles::body(palette)).centered());
}

fn portfolio(lines: &mut Vec<Line<'static>>, palette: &Palette, glyphs: &Glyphs) {
    lines.push(Line::styled(SectionId::Portfolio.label(), styles::heading(palette)).centered());
    for index in 1..=COMPANY_COUNT {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Company {index}"),
            styles::heading(palette),
        ));
        lines.push(Line::styled(COMPANY_BODY, styles::body(palette)));
        lines.push(Line::styled(
            format!("Learn More {}", glyphs.arrow_right),
            styles::nav_item(palette),
        ));
    }
}

fn philosophy(lines: &mut Vec<Line<'static>>, palette: &Palette, glyphs: &Glyphs) {
    lines.push(Line::styled(SectionId::Philosophy.label(), styles::heading(palette)).centered());
    for (title, description) in PRINCIPLES {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.rule), styles::heading(palette)),
            Span::styled(title, styles::heading(palette)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.rule), styles::heading(palette)),
            Span::styled(description, styles::body(palette)),
        ]));
    }
}

fn contact(lines: &mut Vec<Line<'static>>, palette: &Palette, glyphs: &Glyphs) {
    lines.push(Line::styled("Let's Talk", styles::heading(palette)));
    lines.push(Line::default());
    lines.push(Line::styled(CONTACT_INTRO, styles::body(palette)));
    for (label, address) in CONTACTS {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.mail), styles::body(palette)),
            Span::styled(label, styles::key_hint(palette)),
        ]));
        lines.push(Line::styled(format!("  {address}"), styles::heading(palette)));
    }
}

#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Footer: copyright on the left, inert links on the right.
#[must_use]
pub fn footer_lines(year: i32, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::styled(
            format!("{} {year} {COPYRIGHT_HOLDER}", glyphs.copyright),
            styles::key_hint(palette),
        ),
        Line::styled(
            format!("{}  {}  {}", glyphs.linkedin, glyphs.twitter, glyphs.mail),
            styles::body(palette),
        ),
        Line::default(),
    ]
}
