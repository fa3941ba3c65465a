//! Color Selector Component
//!
//! Box color buttons. Reports the pick upward; the form decides whether one is required.

use leptos::prelude::*;

use chocoteja_order::BoxColor;

#[component]
pub fn ColorSelector(
    #[prop(into)] selected: Signal<Option<BoxColor>>,
    on_change: impl Fn(BoxColor) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <label class="text-base font-semibold">"Elige el Color de tu Caja"</label>
            <div class="grid grid-cols-3 gap-4">
                {BoxColor::ALL.iter().map(|&color| {
                    let style = color.style();
                    let is_selected = move || selected.get() == Some(color);
                    view! {
                        <button
                            type="button"
                            value=color.as_str()
                            class=move || format!(
                                "relative group flex flex-col items-center gap-3 p-4 rounded-lg border-2 transition-all duration-300 {} {}",
                                if is_selected() { "border-primary shadow-soft scale-105" } else { "border-border hover:border-primary/50" },
                                style.ring,
                            )
                            on:click=move |_| on_change(color)
                        >
                            <div class="relative">
                                <div class=format!(
                                    "w-16 h-16 rounded-full transition-transform duration-300 group-hover:scale-110 shadow-lg {}",
                                    style.background,
                                )>
                                    <Show when=is_selected>
                                        <div class="absolute inset-0 flex items-center justify-center">
                                            <div class="w-8 h-8 bg-white rounded-full flex items-center justify-center text-primary">
                                                "✓"
                                            </div>
                                        </div>
                                    </Show>
                                </div>
                            </div>
                            <span class=move || if is_selected() {
                                "text-sm font-medium text-center transition-colors text-primary"
                            } else {
                                "text-sm font-medium text-center transition-colors text-muted-foreground"
                            }>
                                {color.label()}
                            </span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
