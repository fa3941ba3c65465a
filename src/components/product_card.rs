//! Product Card Component
//!
//! One catalog entry with its price and the order button.

use leptos::prelude::*;

use chocoteja_order::Product;

use crate::store::{store_open_order, use_storefront_store};

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let store = use_storefront_store();
    let id = product.id;

    view! {
        <div class="card overflow-hidden group hover:shadow-soft transition-all duration-300 hover:scale-105 cursor-pointer">
            <div class="aspect-square overflow-hidden bg-muted">
                <img
                    src=product.image
                    alt=product.name
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                />
            </div>
            <div class="p-6">
                <h3 class="text-2xl font-bold mb-2 text-foreground">{product.name}</h3>
                <p class="text-muted-foreground mb-4">{product.description}</p>
                <p class="text-3xl font-bold bg-gradient-primary bg-clip-text text-transparent">
                    {product.price.to_string()}
                </p>
            </div>
            <div class="p-6 pt-0">
                <button
                    class="btn-primary w-full group-hover:shadow-card transition-all duration-300"
                    on:click=move |_| store_open_order(&store, id)
                >
                    "🛍 Personalizar y Pedir"
                </button>
            </div>
        </div>
    }
}
