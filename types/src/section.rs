//! Page sections and the registry that maps identifiers to them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A section of the page.
///
/// Every variant corresponds to exactly one rendered element. Only sections
/// with an anchor can be navigation targets; `Mission` is observable but has
/// no identifier of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    Mission,
    Portfolio,
    Philosophy,
    Contact,
}

const ANCHOR_VALUES: &[&str] = &["home", "portfolio", "philosophy", "contact"];

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Mission,
        SectionId::Portfolio,
        SectionId::Philosophy,
        SectionId::Contact,
    ];

    /// Sections reachable from the navigation surface, in menu order.
    pub const NAVIGABLE: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Portfolio,
        SectionId::Philosophy,
        SectionId::Contact,
    ];

    /// Stable logical identifier used by navigation controls.
    #[must_use]
    pub const fn anchor(self) -> Option<&'static str> {
        match self {
            SectionId::Home => Some("home"),
            SectionId::Mission => None,
            SectionId::Portfolio => Some("portfolio"),
            SectionId::Philosophy => Some("philosophy"),
            SectionId::Contact => Some("contact"),
        }
    }

    /// Resolve an identifier to a section.
    ///
    /// Matching is exact, like an element id lookup. A single leading `#` is
    /// accepted so fragment-style links resolve the same way.
    #[must_use]
    pub fn from_anchor(raw: &str) -> Option<Self> {
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        SectionId::NAVIGABLE
            .into_iter()
            .find(|section| section.anchor() == Some(raw))
    }

    /// Human-readable label for navigation controls and headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Mission => "Our Mission",
            SectionId::Portfolio => "Portfolio",
            SectionId::Philosophy => "Philosophy",
            SectionId::Contact => "Contact",
        }
    }

    #[must_use]
    pub const fn is_navigable(self) -> bool {
        self.anchor().is_some()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor() {
            Some(anchor) => f.write_str(anchor),
            None => f.write_str("mission"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{raw}'; expected one of: {expected:?}")]
pub struct SectionParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl SectionParseError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for SectionId {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::from_anchor(s).ok_or_else(|| SectionParseError {
            raw: s.to_string(),
            expected: ANCHOR_VALUES,
        })
    }
}

/// A registered section and whether it participates in viewport reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: SectionId,
    pub observable: bool,
}

impl SectionEntry {
    #[must_use]
    pub const fn new(id: SectionId, observable: bool) -> Self {
        Self { id, observable }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("section {0} is registered more than once")]
    Duplicate(SectionId),
}

/// Ordered set of sections, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    entries: Vec<SectionEntry>,
}

impl SectionRegistry {
    pub fn new(entries: impl IntoIterator<Item = SectionEntry>) -> Result<Self, RegistryError> {
        let mut collected: Vec<SectionEntry> = Vec::new();
        for entry in entries {
            if collected.iter().any(|existing| existing.id == entry.id) {
                return Err(RegistryError::Duplicate(entry.id));
            }
            collected.push(entry);
        }
        Ok(Self { entries: collected })
    }

    /// The page as it ships: the hero is always visible, everything below it
    /// fades in.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: vec![
                SectionEntry::new(SectionId::Home, false),
                SectionEntry::new(SectionId::Mission, true),
                SectionEntry::new(SectionId::Portfolio, true),
                SectionEntry::new(SectionId::Philosophy, true),
                SectionEntry::new(SectionId::Contact, true),
            ],
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, id: SectionId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Resolve a navigation identifier against this registry.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Option<SectionId> {
        SectionId::from_anchor(identifier).filter(|id| self.contains(*id))
    }

    pub fn observable(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.observable)
            .map(|entry| entry.id)
    }

    pub fn navigable(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.entries
            .iter()
            .map(|entry| entry.id)
            .filter(|id| id.is_navigable())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
