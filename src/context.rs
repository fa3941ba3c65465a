//! Toast Context
//!
//! Notification signals provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use chocoteja_order::{Notifier, StoreConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One on-screen notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// App-wide toast list provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    /// Toasts currently visible, oldest first
    pub list: ReadSignal<Vec<Toast>>,
    set_list: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        let (list, set_list) = signal(Vec::<Toast>::new());
        Self {
            list,
            set_list,
            next_id: StoredValue::new(0),
        }
    }

    /// Show a toast and schedule its removal
    pub fn push(&self, kind: ToastKind, title: &str, description: Option<&str>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.set_list.update(|list| {
            list.push(Toast {
                id,
                kind,
                title: title.to_string(),
                description: description.map(str::to_string),
            })
        });

        let toasts = *self;
        spawn_local(async move {
            TimeoutFuture::new(StoreConfig::TOAST_LIFETIME_MS).await;
            toasts.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.set_list.update(|list| list.retain(|toast| toast.id != id));
    }
}

impl Notifier for Toasts {
    fn success(&self, title: &str, description: Option<&str>) {
        self.push(ToastKind::Success, title, description);
    }

    fn error(&self, title: &str) {
        self.push(ToastKind::Error, title, None);
    }
}

/// Get the toast context
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts should be provided")
}
