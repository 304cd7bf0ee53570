/// Shared data structures for the application state
///
/// These types describe the static catalogs and the closed set of
/// garment categories the outfit builder works with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Garment category, one per outfit builder slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Top,
    Bottom,
    Outerwear,
}

impl Category {
    /// Slots in the order they are shown and interpolated into the tip
    pub const ALL: [Category; 3] = [Category::Top, Category::Bottom, Category::Outerwear];

    /// Heading shown above the slot
    pub fn title(self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Outerwear => "Outerwear",
        }
    }

    /// Text shown in an empty slot
    pub fn slot_prompt(self) -> &'static str {
        match self {
            Category::Top => "Select a top",
            Category::Bottom => "Select a bottom",
            Category::Outerwear => "Select outerwear",
        }
    }

    /// Phrase used by the style tip when the slot is empty
    pub fn fallback_phrase(self) -> &'static str {
        match self {
            Category::Top => "a bold top",
            Category::Bottom => "neutral pants",
            Category::Outerwear => "a standout jacket",
        }
    }
}

/// Closet filter selected in the virtual closet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Top,
    Bottom,
    Outerwear,
}

impl Filter {
    /// Options offered by the closet selector
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Top, Filter::Bottom, Filter::Outerwear];

    /// Whether an item of `category` passes this filter
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Top => category == Category::Top,
            Filter::Bottom => category == Category::Bottom,
            Filter::Outerwear => category == Category::Outerwear,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Filter::All => "All",
            Filter::Top => "Tops",
            Filter::Bottom => "Bottoms",
            Filter::Outerwear => "Outerwear",
        };
        f.write_str(label)
    }
}

/// A suggested outfit shown in "Today's Outfit Suggestions"
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitCatalogEntry {
    pub id: i64,
    /// Image path relative to the asset directory
    pub image_ref: String,
    pub label: String,
}

/// A single garment in the virtual closet
#[derive(Debug, Clone, PartialEq)]
pub struct WardrobeItem {
    pub id: i64,
    /// Image path relative to the asset directory
    pub image_ref: String,
    pub label: String,
    pub category: Category,
}

impl WardrobeItem {
    pub fn new(id: i64, image_ref: &str, label: &str, category: Category) -> Self {
        Self {
            id,
            image_ref: image_ref.to_string(),
            label: label.to_string(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        assert!(Filter::All.matches(Category::Outerwear));
        assert!(Filter::Top.matches(Category::Top));
        assert!(!Filter::Top.matches(Category::Bottom));
        assert!(!Filter::Outerwear.matches(Category::Top));
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<String> = Filter::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(labels, vec!["All", "Tops", "Bottoms", "Outerwear"]);
    }

    #[test]
    fn test_filter_deserializes_lowercase() {
        let filter: Filter = serde_json::from_str("\"outerwear\"").unwrap();
        assert_eq!(filter, Filter::Outerwear);
        assert!(serde_json::from_str::<Filter>("\"shoes\"").is_err());
    }
}
