//! Hero Banner
//!
//! Landing section with the call to action that jumps to the catalog.

use leptos::prelude::*;

use crate::sections::{scroll_to_section, Section};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id=Section::Inicio.id()
            class="relative min-h-[85vh] flex items-center justify-center overflow-hidden bg-gradient-hero"
        >
            <div class="absolute inset-0 z-0">
                <img
                    src="assets/hero-chocotejas.jpg"
                    alt="Chocotejas artesanales en caja elegante"
                    class="w-full h-full object-cover opacity-20"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-background/60 via-background/40 to-background"></div>
            </div>

            <div class="container mx-auto px-4 z-10 text-center max-w-4xl">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 text-foreground">
                    "Chocotejas "
                    <span class="bg-gradient-primary bg-clip-text text-transparent">"Artesanales"</span>
                </h1>
                <p class="text-xl md:text-2xl mb-8 text-muted-foreground max-w-2xl mx-auto">
                    "Personaliza tu regalo perfecto con nuestros sabores únicos y un mensaje especial"
                </p>
                <button
                    class="btn-primary text-lg px-8 py-6 shadow-soft hover:shadow-card transition-all duration-300 hover:scale-105"
                    on:click=move |_| { scroll_to_section(Section::Productos); }
                >
                    "Ver Sabores"
                </button>
            </div>
        </section>
    }
}
