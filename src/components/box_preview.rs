//! Box Preview Component
//!
//! Draws the gift box for the current color and note. Holds no state.

use leptos::prelude::*;

use chocoteja_order::{box_preview, BoxColor};

#[component]
pub fn BoxPreviewPane(
    #[prop(into)] color: Signal<Option<BoxColor>>,
    /// Effective message; empty hides the sticky note
    #[prop(into)] message: Signal<String>,
) -> impl IntoView {
    let preview = Memo::new(move |_| message.with(|m| box_preview(color.get(), m)));

    view! {
        <div class="card p-6 bg-gradient-to-br from-muted/30 to-background w-full h-full flex flex-col justify-center">
            <div class="text-center mb-8">
                <h3 class="text-xl font-semibold mb-2">"Vista Previa de tu Caja"</h3>
                <p class="text-base text-muted-foreground">{move || preview.get().label}</p>
            </div>

            <div class="relative aspect-square w-full max-w-md mx-auto">
                <div class="relative w-full h-full perspective-1000">
                    <div
                        class=move || preview.with(|p| format!(
                            "absolute inset-0 {} rounded-lg transform transition-all duration-500 hover:scale-105 {} shadow-2xl",
                            p.background, p.shadow,
                        ))
                        style="transform: rotateX(15deg) rotateY(-10deg); transform-style: preserve-3d;"
                    >
                        <div class="absolute inset-0 bg-gradient-to-br from-white/20 to-transparent rounded-lg"></div>
                        <div class="absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 text-8xl text-white/40">
                            "📦"
                        </div>
                        <div class="absolute inset-0 border-4 border-white/10 rounded-lg"></div>
                    </div>
                </div>

                {move || preview.get().note.map(|note| view! {
                    <div
                        class="absolute -right-4 -top-4 w-32 h-32 bg-yellow-100 shadow-lg transform rotate-12 transition-all duration-300 hover:rotate-6 hover:scale-105"
                        style="box-shadow: 0 4px 12px rgba(0,0,0,0.15);"
                    >
                        <div class="absolute top-2 left-2 right-2">
                            <p class="text-xs text-gray-700 font-handwriting leading-tight break-words">{note}</p>
                        </div>
                        <div class="absolute top-0 left-1/2 w-8 h-3 bg-yellow-200/50 transform -translate-x-1/2"></div>
                    </div>
                })}
            </div>

            {move || preview.get().prompt.map(|prompt| view! {
                <div class="text-center mt-6 text-sm text-muted-foreground">{prompt}</div>
            })}
        </div>
    }
}
