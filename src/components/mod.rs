//! UI Components
//!
//! Storefront Leptos components.

mod header;
mod hero;
mod product_card;
mod product_grid;
mod about_section;
mod color_selector;
mod box_preview;
mod personalization_modal;
mod toaster;

pub use header::Header;
pub use hero::Hero;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use about_section::AboutSection;
pub use color_selector::ColorSelector;
pub use box_preview::BoxPreviewPane;
pub use personalization_modal::PersonalizationModal;
pub use toaster::Toaster;
