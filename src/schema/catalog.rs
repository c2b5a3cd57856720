/// Story catalog: themes, stories, placeholders, and loading.

use rustc_hash::FxHashSet;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::template::{self, BLANK_TOKEN};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("catalog contains no themes")]
    NoThemes,
}

/// A prompt describing the word wanted for one blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Placeholder {
    pub prompt: String,
}

impl Placeholder {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// A story template: title, text segments, and one placeholder per blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    pub title: String,
    /// Narrative segments, joined with single spaces into the template.
    pub story: Vec<String>,
    pub placeholders: Vec<Placeholder>,
}

impl Story {
    /// The full template text with blanks still in place.
    pub fn template(&self) -> String {
        template::join_segments(&self.story)
    }

    /// Number of `___` tokens in the joined template.
    pub fn blank_count(&self) -> usize {
        self.template().matches(BLANK_TOKEN).count()
    }

    /// True when every blank has exactly one placeholder.
    pub fn is_balanced(&self) -> bool {
        self.blank_count() == self.placeholders.len()
    }
}

/// A named, ordered group of stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub stories: Vec<Story>,
}

/// All themes of a story library, in source-file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    themes: Vec<Theme>,
}

// Wire shapes. `themes` is a map keyed by theme name whose entry order
// must survive deserialization, so it goes through a hand-written visitor
// instead of a HashMap.

#[derive(Debug, Deserialize)]
struct RawCatalog {
    themes: OrderedThemes,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    stories: Vec<Story>,
}

#[derive(Debug)]
struct OrderedThemes(Vec<Theme>);

impl<'de> Deserialize<'de> for OrderedThemes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ThemesVisitor;

        impl<'de> Visitor<'de> for ThemesVisitor {
            type Value = OrderedThemes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of theme names to themes")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut seen = FxHashSet::default();
                let mut themes = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, raw)) = map.next_entry::<String, RawTheme>()? {
                    if !seen.insert(name.clone()) {
                        return Err(de::Error::custom(format!("duplicate theme '{}'", name)));
                    }
                    themes.push(Theme {
                        name,
                        stories: raw.stories,
                    });
                }
                Ok(OrderedThemes(themes))
            }
        }

        deserializer.deserialize_map(ThemesVisitor)
    }
}

impl Catalog {
    /// Build a catalog directly from themes (for tests and embedding).
    pub fn from_themes(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    /// Load a catalog from disk. `.ron` files are read as RON, anything
    /// else as JSON.
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|s| s.to_str()) {
            Some("ron") => Self::parse_ron(&contents)?,
            _ => Self::parse_json(&contents)?,
        };

        tracing::info!(
            path = %path.display(),
            themes = catalog.len(),
            stories = catalog.story_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn parse_json(input: &str) -> Result<Catalog, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(input)?;
        Self::from_raw(raw)
    }

    /// Parse a catalog from a RON string.
    pub fn parse_ron(input: &str) -> Result<Catalog, CatalogError> {
        let raw: RawCatalog = ron::from_str(input)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> Result<Catalog, CatalogError> {
        let themes = raw.themes.0;
        if themes.is_empty() {
            return Err(CatalogError::NoThemes);
        }
        Ok(Catalog { themes })
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Theme names in catalog order.
    pub fn theme_names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Total number of stories across all themes.
    pub fn story_count(&self) -> usize {
        self.themes.iter().map(|t| t.stories.len()).sum()
    }
}
