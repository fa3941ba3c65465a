//! Collaborators
//!
//! The order rules talk to the outside world only through these traits.

use crate::order::SubmittedOrder;

/// User-facing notification surface (toasts)
pub trait Notifier {
    fn success(&self, title: &str, description: Option<&str>);
    fn error(&self, title: &str);
}

/// Destination for completed orders
pub trait OrderSink {
    fn record(&self, order: &SubmittedOrder);
}

/// Writes each order as a JSON `info` record through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOrderSink;

impl OrderSink for LogOrderSink {
    fn record(&self, order: &SubmittedOrder) {
        match serde_json::to_string(order) {
            Ok(json) => log::info!("Pedido realizado: {}", json),
            Err(e) => log::warn!("Pedido realizado (sin serializar: {}): {:?}", e, order),
        }
    }
}
