//! Chocotejas Storefront App
//!
//! Page shell: header, hero, catalog grid, about section and the order form overlay.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::Toasts;
use crate::store::{store_close_order, store_open_product, StorefrontState};
use crate::components::{AboutSection, Header, Hero, PersonalizationModal, ProductGrid, Toaster};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(StorefrontState::default());
    let toasts = Toasts::new();

    // Provide context to all children
    provide_context(store);
    provide_context(toasts);

    view! {
        <div class="min-h-screen">
            <Header />
            <Hero />

            <ProductGrid />

            <AboutSection />

            // Keyed on the open product so every opening starts a fresh draft
            {move || store_open_product(&store).map(|product| view! {
                <PersonalizationModal
                    product=product
                    on_close=move || store_close_order(&store)
                />
            })}

            <Toaster />
        </div>
    }
}
