//! Product Grid
//!
//! The catalog section, one card per product.

use leptos::prelude::*;

use chocoteja_order::catalog;

use crate::components::ProductCard;
use crate::sections::Section;

#[component]
pub fn ProductGrid() -> impl IntoView {
    view! {
        <section id=Section::Productos.id() class="py-20 px-4">
            <div class="container mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Nuestros "
                        <span class="bg-gradient-primary bg-clip-text text-transparent">"Sabores"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "Cada chocoteja es elaborada artesanalmente con ingredientes de primera calidad"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 max-w-7xl mx-auto">
                    {catalog().iter().map(|product| view! {
                        <ProductCard product=product />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
