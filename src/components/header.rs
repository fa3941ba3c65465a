//! Header Component
//!
//! Sticky brand bar with section navigation and a collapsible mobile menu.

use leptos::prelude::*;

use crate::sections::{scroll_to_section, Section};

#[component]
pub fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    // Menu closes only when the scroll actually happened
    let go_to = move |section: Section| {
        if scroll_to_section(section) {
            set_mobile_menu_open.set(false);
        }
    };

    view! {
        <header class="sticky top-0 z-50 w-full border-b border-border/40 bg-background/95 backdrop-blur">
            <div class="container mx-auto flex h-16 items-center justify-between px-4 md:px-6">
                <div class="flex items-center gap-2">
                    <img src="assets/cacao.png" alt="Logo icon" class="h-8 w-8 rounded-full" />
                    <div class="flex flex-col">
                        <span class="text-lg font-semibold tracking-tight">"Chocolates"</span>
                        <span class="text-xs tracking-widest text-muted-foreground">"DEV"</span>
                    </div>
                </div>

                // Desktop nav
                <nav class="hidden md:flex items-center gap-8">
                    {Section::ALL.iter().map(|&section| view! {
                        <button
                            class="text-sm font-medium transition-colors hover:text-foreground/80"
                            on:click=move |_| go_to(section)
                        >
                            {section.label()}
                        </button>
                    }).collect_view()}
                </nav>

                // Mobile menu toggle
                <div class="flex items-center gap-4 md:hidden relative">
                    <button
                        class="p-2 rounded-md hover:bg-gray-100"
                        aria-label="Menú"
                        on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <div
                id="mobile-menu"
                class=move || if mobile_menu_open.get() {
                    "md:hidden overflow-hidden transition-all duration-300 max-h-96 opacity-100"
                } else {
                    "md:hidden overflow-hidden transition-all duration-300 max-h-0 opacity-0"
                }
            >
                <ul class="flex flex-col space-y-4 text-sm uppercase tracking-widest p-4">
                    {Section::ALL.iter().map(|&section| view! {
                        <li>
                            <button
                                class="block hover:text-white transition-colors"
                                on:click=move |_| go_to(section)
                            >
                                {section.label()}
                            </button>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </header>
    }
}
