use super::catalog::Catalog;
use super::data::{Category, Filter, WardrobeItem};
use super::selection::SelectionState;
use crate::error::PlannerError;

/// The planner pairs the static catalogs with the user's selection.
///
/// Every id coming from the UI is checked against the wardrobe catalog
/// before the selection is touched, so favorites and outfit slots only
/// ever reference real items.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Catalog,
    selection: SelectionState,
}

impl Planner {
    pub fn new(catalog: Catalog, initial_filter: Filter) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(initial_filter),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn set_filter(&mut self, filter: Filter) {
        log::debug!("closet filter: {:?} -> {:?}", self.selection.active_filter, filter);
        self.selection.set_filter(filter);
    }

    /// Toggle a favorite. Returns whether the item is now a favorite.
    pub fn toggle_favorite(&mut self, id: i64) -> Result<bool, PlannerError> {
        if !self.catalog.contains(id) {
            return Err(PlannerError::UnknownItem(id));
        }

        let favorite = self.selection.toggle_favorite(id);
        log::debug!("item {} favorite: {}", id, favorite);
        Ok(favorite)
    }

    /// Place the item with `id` into its outfit slot. Returns the slot filled.
    pub fn select_for_outfit(&mut self, id: i64) -> Result<Category, PlannerError> {
        let item = self
            .catalog
            .wardrobe_item(id)
            .cloned()
            .ok_or(PlannerError::UnknownItem(id))?;

        let category = item.category;
        log::debug!("{} slot <- {}", category.title(), item.label);
        self.selection.select_for_outfit(item);
        Ok(category)
    }

    pub fn filtered_wardrobe(&self) -> Vec<&WardrobeItem> {
        self.selection.filtered_wardrobe(&self.catalog.wardrobe)
    }

    pub fn style_tip(&self) -> String {
        self.selection.style_tip()
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Catalog::builtin(), Filter::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_known_item() {
        let mut planner = Planner::default();
        assert!(planner.toggle_favorite(2).unwrap());
        assert!(planner.selection().is_favorite(2));
        assert!(!planner.toggle_favorite(2).unwrap());
        assert!(planner.selection().favorite_ids.is_empty());
    }

    #[test]
    fn test_toggle_unknown_item_is_rejected() {
        let mut planner = Planner::default();
        let err = planner.toggle_favorite(99).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownItem(99)));
        assert!(planner.selection().favorite_ids.is_empty());
    }

    #[test]
    fn test_select_by_id_fills_matching_slot() {
        let mut planner = Planner::default();
        assert_eq!(planner.select_for_outfit(3).unwrap(), Category::Bottom);

        let outfit = &planner.selection().outfit;
        assert_eq!(outfit.bottom.as_ref().map(|i| i.label.as_str()), Some("Black Trousers"));
        assert!(outfit.top.is_none());
        assert!(outfit.outerwear.is_none());
    }

    #[test]
    fn test_select_unknown_item_leaves_state() {
        let mut planner = Planner::default();
        planner.select_for_outfit(2).unwrap();
        let before = planner.selection().clone();

        assert!(planner.select_for_outfit(-1).is_err());
        assert_eq!(planner.selection(), &before);
    }

    #[test]
    fn test_initial_filter_and_tip() {
        let mut planner = Planner::new(Catalog::builtin(), Filter::Outerwear);
        let filtered = planner.filtered_wardrobe();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "Denim Jacket");

        planner.select_for_outfit(1).unwrap();
        planner.select_for_outfit(2).unwrap();
        planner.select_for_outfit(3).unwrap();
        assert_eq!(
            planner.style_tip(),
            "Try pairing White Tee with Black Trousers and Denim Jacket for a balanced look."
        );

        planner.set_filter(Filter::All);
        assert_eq!(planner.filtered_wardrobe().len(), 3);
    }
}
