//! Toaster Component
//!
//! Renders the toast list from context, newest at the bottom.

use leptos::prelude::*;

use crate::context::{use_toasts, ToastKind};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <ol class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm">
            <For
                each=move || toasts.list.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast rounded-lg border p-4 shadow-lg bg-white border-green-200",
                        ToastKind::Error => "toast rounded-lg border p-4 shadow-lg bg-white border-red-300",
                    };
                    let role = match toast.kind {
                        ToastKind::Success => "status",
                        ToastKind::Error => "alert",
                    };
                    view! {
                        <li class=class role=role>
                            <div class="flex items-start justify-between gap-4">
                                <div>
                                    <p class="text-sm font-semibold">{toast.title}</p>
                                    {toast.description.map(|d| view! {
                                        <p class="text-sm text-muted-foreground">{d}</p>
                                    })}
                                </div>
                                <button
                                    class="text-muted-foreground hover:text-foreground"
                                    aria-label="Cerrar"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ol>
    }
}
