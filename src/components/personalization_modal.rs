//! Personalization Modal
//!
//! Order form for one product: quantity, box color, optional note and
//! contact data, with a live preview and total. The draft lives only as
//! long as this component; closing the modal throws it away.

use leptos::prelude::*;

use chocoteja_order::{submit, BoxColor, LogOrderSink, OrderDraft, Product, StoreConfig};

use crate::components::{BoxPreviewPane, ColorSelector};
use crate::context::use_toasts;

#[component]
pub fn PersonalizationModal(
    product: &'static Product,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let toasts = use_toasts();
    let draft = RwSignal::new(OrderDraft::new(product));

    // Derived state
    let box_color = Signal::derive(move || draft.with(|d| d.box_color()));
    let preview_message = Signal::derive(move || {
        draft.with(|d| d.effective_message().preview_text().to_string())
    });
    let total = move || draft.with(|d| d.total().to_string());
    let counter = move || draft.with(|d| d.note_counter());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = draft.try_update(|d| submit(d, &toasts, &LogOrderSink, chrono::Utc::now()));
        if let Some(Ok(_)) = result {
            on_close();
        }
    };

    let close_on_escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close();
        }
    });
    on_cleanup(move || close_on_escape.remove());

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80"
            on:click=move |ev| {
                // Backdrop only, not clicks bubbling from the dialog
                if ev.target() == ev.current_target() {
                    on_close();
                }
            }
        >
            <div
                role="dialog"
                aria-modal="true"
                class="relative w-full max-w-6xl max-h-[95vh] overflow-y-auto rounded-lg bg-white/95 backdrop-blur-sm p-6 shadow-lg"
            >
                <button
                    type="button"
                    class="absolute right-4 top-4 opacity-70 hover:opacity-100"
                    aria-label="Cerrar"
                    on:click=move |_| on_close()
                >
                    "×"
                </button>

                <div class="flex flex-col space-y-1.5">
                    <h2 class="text-3xl font-bold text-primary">"Personaliza tu Pedido"</h2>
                    <p class="text-lg text-muted-foreground">
                        {product.name} " - "
                        <span class="font-semibold text-primary">{product.price.to_string()}</span>
                    </p>
                </div>

                <form class="space-y-8 py-4" on:submit=on_submit>
                    <div class="grid lg:grid-cols-2 gap-10">
                        // Preview
                        <div class="order-2 lg:order-1 bg-secondary/20 rounded-xl p-6 flex items-center justify-center">
                            <BoxPreviewPane color=box_color message=preview_message />
                        </div>

                        // Options
                        <div class="space-y-6 order-1 lg:order-2">
                            <div class="bg-card p-4 rounded-lg border shadow-sm">
                                <label for="quantity" class="text-base font-semibold flex items-center gap-2">
                                    "🛍 Cantidad"
                                </label>
                                <input
                                    id="quantity"
                                    type="number"
                                    min="1"
                                    class="input mt-2"
                                    prop:value=move || draft.with(|d| d.quantity().to_string())
                                    on:input=move |ev| {
                                        let raw = event_target_value(&ev);
                                        draft.update(|d| d.set_quantity(&raw));
                                    }
                                />
                            </div>

                            <div class="bg-card p-4 rounded-lg border shadow-sm">
                                <ColorSelector
                                    selected=box_color
                                    on_change=move |color: BoxColor| draft.update(|d| d.set_box_color(Some(color)))
                                />
                            </div>

                            <div class="bg-card p-4 rounded-lg border shadow-sm space-y-3">
                                <div class="flex items-center space-x-3">
                                    <input
                                        id="includeNote"
                                        type="checkbox"
                                        class="w-5 h-5"
                                        prop:checked=move || draft.with(|d| d.include_note())
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            draft.update(|d| d.set_include_note(checked));
                                        }
                                    />
                                    <label
                                        for="includeNote"
                                        class="text-base font-semibold cursor-pointer flex items-center gap-2 select-none"
                                    >
                                        "✎ ¿Deseas agregar una notita especial?"
                                    </label>
                                </div>

                                <div class=move || if draft.with(|d| d.include_note()) {
                                    "grid transition-all duration-500 ease-in-out grid-rows-[1fr] opacity-100 pt-2"
                                } else {
                                    "grid transition-all duration-500 ease-in-out grid-rows-[0fr] opacity-0 pt-0"
                                }>
                                    <div class="overflow-hidden px-1">
                                        <textarea
                                            id="message"
                                            rows="4"
                                            maxlength=StoreConfig::NOTE_MAX_CHARS.to_string()
                                            placeholder="Escribe tu mensaje especial aquí... (máx. 150 caracteres)"
                                            class="textarea resize-none rounded-xl shadow-sm bg-background"
                                            prop:value=move || draft.with(|d| d.note_text().to_string())
                                            on:input=move |ev| {
                                                let text = event_target_value(&ev);
                                                draft.update(|d| d.set_note_text(&text));
                                            }
                                        ></textarea>
                                        <div class="flex justify-end mt-1">
                                            <span class=move || if counter().near_limit {
                                                "text-xs text-red-500 font-bold"
                                            } else {
                                                "text-xs text-muted-foreground"
                                            }>
                                                {move || counter().to_string()}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                            </div>

                            <div class="pt-6 border-t space-y-5">
                                <h3 class="font-semibold text-xl flex items-center gap-2 text-primary">
                                    "Datos de Contacto"
                                </h3>

                                <div class="space-y-4">
                                    <div>
                                        <label for="customerName" class="mb-1.5 block">"Nombre Completo"</label>
                                        <input
                                            id="customerName"
                                            type="text"
                                            placeholder="Juan Pérez"
                                            required
                                            class="input"
                                            prop:value=move || draft.with(|d| d.customer_name().to_string())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                draft.update(|d| d.set_customer_name(&value));
                                            }
                                        />
                                    </div>

                                    <div>
                                        <label for="customerPhone" class="mb-1.5 block">"Teléfono"</label>
                                        <input
                                            id="customerPhone"
                                            type="tel"
                                            placeholder="999 888 777"
                                            required
                                            class="input"
                                            prop:value=move || draft.with(|d| d.customer_phone().to_string())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                draft.update(|d| d.set_customer_phone(&value));
                                            }
                                        />
                                    </div>

                                    <div>
                                        <label for="customerAddress" class="mb-1.5 block">"Dirección de Entrega"</label>
                                        <textarea
                                            id="customerAddress"
                                            rows="2"
                                            placeholder="Av. Principal 123, Miraflores, Lima"
                                            required
                                            class="textarea resize-none"
                                            prop:value=move || draft.with(|d| d.customer_address().to_string())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                draft.update(|d| d.set_customer_address(&value));
                                            }
                                        ></textarea>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="pt-6 border-t bg-secondary/10 -mx-6 -mb-6 p-6 mt-4">
                        <div class="flex justify-between items-center mb-4 max-w-md ml-auto">
                            <span class="text-lg font-medium text-muted-foreground">"Total a pagar:"</span>
                            <span class="text-3xl font-bold text-primary">{total}</span>
                        </div>
                        <button
                            type="submit"
                            class="btn-primary w-full text-lg h-12 shadow-lg hover:shadow-xl transition-all"
                        >
                            "Confirmar Pedido"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
