/// Selection state of the outfit planner
///
/// Holds everything the user can change on screen: the closet filter,
/// the favorited items and the three outfit builder slots. All derived
/// data (filtered closet, style tip) is computed from this on demand.

use std::collections::BTreeSet;

use super::data::{Category, Filter, WardrobeItem};

/// The three outfit builder slots
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outfit {
    pub top: Option<WardrobeItem>,
    pub bottom: Option<WardrobeItem>,
    pub outerwear: Option<WardrobeItem>,
}

impl Outfit {
    /// Put `item` into the slot matching its category, replacing what was there
    pub fn place(&mut self, item: WardrobeItem) {
        let slot = match item.category {
            Category::Top => &mut self.top,
            Category::Bottom => &mut self.bottom,
            Category::Outerwear => &mut self.outerwear,
        };
        *slot = Some(item);
    }

    pub fn slot(&self, category: Category) -> Option<&WardrobeItem> {
        match category {
            Category::Top => self.top.as_ref(),
            Category::Bottom => self.bottom.as_ref(),
            Category::Outerwear => self.outerwear.as_ref(),
        }
    }

    /// The canned style tip for the current slots
    pub fn style_tip(&self) -> String {
        let [top, bottom, outerwear] = Category::ALL.map(|category| {
            self.slot(category)
                .map(|item| item.label.as_str())
                .unwrap_or(category.fallback_phrase())
        });

        format!("Try pairing {top} with {bottom} and {outerwear} for a balanced look.")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub active_filter: Filter,
    pub favorite_ids: BTreeSet<i64>,
    pub outfit: Outfit,
}

impl SelectionState {
    pub fn new(active_filter: Filter) -> Self {
        Self {
            active_filter,
            ..Self::default()
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
    }

    /// Flip the favorite flag of `id`.
    /// Returns true if the item is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: i64) -> bool {
        if self.favorite_ids.remove(&id) {
            false
        } else {
            self.favorite_ids.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorite_ids.contains(&id)
    }

    pub fn select_for_outfit(&mut self, item: WardrobeItem) {
        self.outfit.place(item);
    }

    /// Items of `wardrobe` passing the active filter, in catalog order
    pub fn filtered_wardrobe<'a>(&self, wardrobe: &'a [WardrobeItem]) -> Vec<&'a WardrobeItem> {
        wardrobe
            .iter()
            .filter(|item| self.active_filter.matches(item.category))
            .collect()
    }

    pub fn style_tip(&self) -> String {
        self.outfit.style_tip()
    }
}
