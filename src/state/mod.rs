/// State management module
///
/// This module handles all application state, including:
/// - Garment categories and catalog entries (data.rs)
/// - The static outfit and wardrobe catalogs (catalog.rs)
/// - Filter, favorites and outfit slots (selection.rs)
/// - Catalog-validated operations on the selection (planner.rs)
/// - Placeholder persona, weather and schedule cards (context.rs)
/// - Wardrobe photo picker (upload.rs)

pub mod catalog;
pub mod context;
pub mod data;
pub mod planner;
pub mod selection;
pub mod upload;
