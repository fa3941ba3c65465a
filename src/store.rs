//! Storefront State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use chocoteja_order::{find_product, Product, ProductId};

/// Page-level state: which product is being ordered and whether the form is up
#[derive(Clone, Debug, Default, Store)]
pub struct StorefrontState {
    /// Product targeted by the personalization form
    pub selected_product: Option<ProductId>,
    /// Whether the personalization form is open
    pub order_open: bool,
}

/// Type alias for the store
pub type StorefrontStore = Store<StorefrontState>;

/// Get the storefront store from context
pub fn use_storefront_store() -> StorefrontStore {
    expect_context::<StorefrontStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Target a product and open the form for it
pub fn store_open_order(store: &StorefrontStore, id: ProductId) {
    log::debug!("[STORE] Opening order form for {}", id.as_str());
    *store.selected_product().write() = Some(id);
    *store.order_open().write() = true;
}

/// Close the form; the selected product stays until the next card click
pub fn store_close_order(store: &StorefrontStore) {
    log::debug!("[STORE] Closing order form");
    *store.order_open().write() = false;
}

/// Product the form should show, if it is open
pub fn store_open_product(store: &StorefrontStore) -> Option<&'static Product> {
    if !store.order_open().get() {
        return None;
    }
    store.selected_product().get().map(find_product)
}
