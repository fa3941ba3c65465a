//! Submitted Order
//!
//! Snapshot taken from a valid draft at the moment of submission.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::color::BoxColor;
use crate::draft::{GiftMessage, OrderDraft};
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedOrder {
    pub product: &'static str,
    pub box_color: BoxColor,
    pub message: GiftMessage,
    pub quantity: u32,
    pub total: Money,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub date: DateTime<Utc>,
}

impl SubmittedOrder {
    /// Returns `None` when the draft has no color; callers validate first
    pub fn from_draft(draft: &OrderDraft, date: DateTime<Utc>) -> Option<Self> {
        Some(Self {
            product: draft.product().name,
            box_color: draft.box_color()?,
            message: draft.effective_message(),
            quantity: draft.quantity(),
            total: draft.total(),
            customer_name: draft.customer_name().to_string(),
            customer_phone: draft.customer_phone().to_string(),
            customer_address: draft.customer_address().to_string(),
            date,
        })
    }
}
