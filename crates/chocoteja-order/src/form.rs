//! Personalization Form
//!
//! Ties a draft to its collaborators: validation failures go to the
//! notifier, accepted orders go to the sink and reset the draft.

use chrono::{DateTime, Utc};

use crate::draft::OrderDraft;
use crate::error::OrderError;
use crate::notify::{Notifier, OrderSink};
use crate::order::SubmittedOrder;

const SUCCESS_TITLE: &str = "¡Pedido realizado con éxito!";

fn success_description(phone: &str) -> String {
    format!("Te contactaremos al {} para confirmar tu pedido.", phone)
}

/// Validate, snapshot, record and reset in one step.
///
/// On error the draft is left untouched and the reason is shown through
/// `notifier`. On success exactly one order reaches `sink`, one success
/// notification is shown, and the draft is back to its defaults. The host
/// closes the form when this returns `Ok`.
pub fn submit(
    draft: &mut OrderDraft,
    notifier: &dyn Notifier,
    sink: &dyn OrderSink,
    now: DateTime<Utc>,
) -> Result<SubmittedOrder, OrderError> {
    if let Err(e) = draft.validate() {
        log::warn!("Order for {} rejected: {:?}", draft.product().id.as_str(), e);
        notifier.error(&e.to_string());
        return Err(e);
    }

    let order = SubmittedOrder::from_draft(draft, now).ok_or(OrderError::MissingBoxColor)?;
    sink.record(&order);
    notifier.success(SUCCESS_TITLE, Some(&success_description(&order.customer_phone)));

    draft.reset();
    Ok(order)
}
