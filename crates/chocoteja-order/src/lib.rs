//! Chocotejas Order Rules
//!
//! Catalog, box colors, money, the order draft and its validation.
//! No UI and no I/O; the storefront supplies a [`Notifier`] and an
//! [`OrderSink`].

pub mod catalog;
pub mod color;
pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod money;
pub mod notify;
pub mod order;
pub mod preview;

mod tests;

pub use catalog::{catalog, find_product, Product, ProductId};
pub use color::{BoxColor, BoxStyle};
pub use config::StoreConfig;
pub use draft::{parse_quantity, GiftMessage, NoteCounter, OrderDraft};
pub use error::OrderError;
pub use form::submit;
pub use money::Money;
pub use notify::{LogOrderSink, Notifier, OrderSink};
pub use order::SubmittedOrder;
pub use preview::{box_preview, BoxPreview};
