//! About Section
//!
//! "¿Por qué elegirnos?" block with the store's three selling points.

use leptos::prelude::*;

use crate::sections::Section;

/// (icon, title, text)
const SELLING_POINTS: &[(&str, &str, &str)] = &[
    ("🎁", "Personalización Total", "Elige el color de la caja y añade tu mensaje especial"),
    ("✨", "Calidad Premium", "Ingredientes seleccionados y elaboración artesanal"),
    ("🚚", "Entrega Rápida", "Llevamos tus chocotejas frescas a tu puerta"),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::Nosotros.id() class="py-20 px-4 bg-muted/30">
            <div class="container mx-auto text-center max-w-3xl">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">"¿Por qué elegirnos?"</h2>
                <div class="grid md:grid-cols-3 gap-8 mt-12">
                    {SELLING_POINTS.iter().map(|(icon, title, text)| view! {
                        <div class="space-y-3">
                            <div class="text-4xl mb-4">{*icon}</div>
                            <h3 class="text-xl font-semibold">{*title}</h3>
                            <p class="text-muted-foreground">{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
