//! Visual style catalog for image generation.
//!
//! Maps human-facing style names to provider style identifiers. Injectable
//! so new styles can be added without touching generation code; unknown
//! names resolve to the default style rather than failing, matching the
//! studio's permissive style picker.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named visual style with its provider-side identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Human-facing style name
    pub name: String,
    /// Provider style identifier (a UUID for Leonardo-style services)
    pub provider_style_id: String,
}

/// Catalog of visual styles keyed by name.
///
/// # Examples
///
/// ```
/// use fresco_core::StyleCatalog;
///
/// let catalog = StyleCatalog::with_defaults();
/// let cartoon = catalog.resolve("simple cartoon");
/// let fallback = catalog.resolve("not a style");
/// assert_ne!(cartoon.provider_style_id, "");
/// assert_eq!(fallback.name, "default");
/// ```
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: HashMap<String, StyleProfile>,
    default_style: StyleProfile,
}

impl StyleCatalog {
    /// Create a catalog with the given default style.
    pub fn new(default_style: StyleProfile) -> Self {
        Self {
            styles: HashMap::new(),
            default_style,
        }
    }

    /// Catalog seeded with the stock styles and their provider ids.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new(StyleProfile {
            name: "default".to_string(),
            provider_style_id: "556c1ee5-ec38-42e8-955a-1e82dad0ffa1".to_string(),
        });
        catalog.insert(
            "simple cartoon",
            "b2a54a51-230b-4d4f-ad4e-8409bf58645f",
        );
        catalog.insert(
            "photorealistic",
            "5bdc3f2a-1be6-4d1c-8e77-992a30824a2c",
        );
        catalog
    }

    /// Register or replace a style.
    pub fn insert(&mut self, name: impl Into<String>, provider_style_id: impl Into<String>) {
        let name = name.into();
        self.styles.insert(
            name.clone(),
            StyleProfile {
                name,
                provider_style_id: provider_style_id.into(),
            },
        );
    }

    /// Resolve a style by name, falling back to the default for unknown
    /// names.
    pub fn resolve(&self, name: &str) -> &StyleProfile {
        self.styles.get(name).unwrap_or(&self.default_style)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
