#![forbid(unsafe_code)]

//! Read-only gallery content.
//!
//! A [`Catalog`] is loaded once per gallery instance from a static JSON
//! document and never mutated. The engine treats items as opaque beyond the
//! stable string id; the only structural check on load is id uniqueness.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Accent used when an item's faction has no configured color.
pub const DEFAULT_ACCENT: &str = "#c41e3a";

/// One content record. Identity is the `id` field; everything else is
/// display payload passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Image path or URL.
    pub image: String,
    /// Faction key, looked up in the catalog's faction table.
    pub faction: String,
    /// Short description.
    pub description: String,
    /// Display date string.
    pub date: String,
}

/// Per-faction display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Faction {
    /// Accent color, `#rrggbb`.
    pub color: String,
}

/// The full, immutable item set for one gallery instance.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// All selectable items, in authored order.
    pub artworks: Vec<Artwork>,
    /// Faction display table. Missing factions fall back to
    /// [`DEFAULT_ACCENT`].
    #[serde(default)]
    pub factions: HashMap<String, Faction>,
}

/// Errors produced while loading a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The JSON document did not match the expected shape.
    Parse(serde_json::Error),
    /// Two items share an id.
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "catalog parse error: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate item id: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl Catalog {
    /// Parse a catalog from a JSON document and verify id uniqueness.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        let mut seen = ahash::AHashSet::with_capacity(catalog.artworks.len());
        for art in &catalog.artworks {
            if !seen.insert(art.id.as_str()) {
                return Err(CatalogError::DuplicateId(art.id.clone()));
            }
        }
        Ok(catalog)
    }

    /// Number of items in the pool.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    /// Whether the pool is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Accent color for a faction, falling back to the house default.
    #[must_use]
    pub fn faction_color(&self, faction: &str) -> &str {
        self.factions
            .get(faction)
            .map_or(DEFAULT_ACCENT, |f| f.color.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "artworks": [
            {"id": "a1", "title": "Neon Core", "image": "/art/a1.webp",
             "faction": "crowns", "description": "Vertical markets", "date": "2277.03"},
            {"id": "a2", "title": "Lowline", "image": "/art/a2.webp",
             "faction": "dust_runners", "description": "Salvage yards", "date": "2277.04"}
        ],
        "factions": {
            "crowns": {"color": "#e63946"}
        }
    }"##;

    #[test]
    fn parses_and_indexes_factions() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.faction_color("crowns"), "#e63946");
        assert_eq!(catalog.faction_color("dust_runners"), DEFAULT_ACCENT);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r##"{"artworks": [
            {"id": "a1", "title": "x", "image": "x", "faction": "x", "description": "x", "date": "x"},
            {"id": "a1", "title": "y", "image": "y", "faction": "y", "description": "y", "date": "y"}
        ]}"##;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(id)) if id == "a1"
        ));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Parse(_))
        ));
    }
}
