use super::data::{Category, OutfitCatalogEntry, WardrobeItem};

/// The static catalogs the planner reads from.
/// Fixed at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub outfits: Vec<OutfitCatalogEntry>,
    pub wardrobe: Vec<WardrobeItem>,
}

impl Catalog {
    pub fn new(outfits: Vec<OutfitCatalogEntry>, wardrobe: Vec<WardrobeItem>) -> Self {
        Self { outfits, wardrobe }
    }

    /// The catalogs shipped with the application
    pub fn builtin() -> Self {
        let outfits = vec![
            outfit(1, "outfits/casual1.jpg", "Casual Day"),
            outfit(2, "outfits/business1.jpg", "Work Meeting"),
            outfit(3, "outfits/date1.jpg", "Date Night"),
        ];

        let wardrobe = vec![
            WardrobeItem::new(1, "wardrobe/jacket.jpg", "Denim Jacket", Category::Outerwear),
            WardrobeItem::new(2, "wardrobe/tee.jpg", "White Tee", Category::Top),
            WardrobeItem::new(3, "wardrobe/pants.jpg", "Black Trousers", Category::Bottom),
        ];

        Self::new(outfits, wardrobe)
    }

    /// Look up a wardrobe item by id
    pub fn wardrobe_item(&self, id: i64) -> Option<&WardrobeItem> {
        self.wardrobe.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.wardrobe_item(id).is_some()
    }
}

fn outfit(id: i64, image_ref: &str, label: &str) -> OutfitCatalogEntry {
    OutfitCatalogEntry {
        id,
        image_ref: image_ref.to_string(),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.outfits.len(), 3);
        assert_eq!(catalog.wardrobe.len(), 3);

        let labels: Vec<&str> = catalog.outfits.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Casual Day", "Work Meeting", "Date Night"]);
    }

    #[test]
    fn test_wardrobe_lookup() {
        let catalog = Catalog::builtin();
        let tee = catalog.wardrobe_item(2).unwrap();
        assert_eq!(tee.label, "White Tee");
        assert_eq!(tee.category, Category::Top);

        assert!(catalog.contains(3));
        assert!(!catalog.contains(42));
    }
}
