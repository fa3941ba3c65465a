//! Order Draft
//!
//! The in-progress order for one open form session. Setters overwrite a
//! single field each; `validate` is pure and checks the fields in a fixed
//! order so the first problem the customer sees is always the same.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::catalog::Product;
use crate::color::BoxColor;
use crate::config::StoreConfig;
use crate::error::OrderError;
use crate::money::Money;

/// Message that travels with the order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiftMessage {
    /// Customer opted in; may still be empty
    Note(String),
    NoMessage,
}

impl GiftMessage {
    /// Text for the box preview; empty when there is nothing to show
    pub fn preview_text(&self) -> &str {
        match self {
            GiftMessage::Note(text) => text,
            GiftMessage::NoMessage => "",
        }
    }
}

impl fmt::Display for GiftMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GiftMessage::Note(text) => f.write_str(text),
            GiftMessage::NoMessage => f.write_str(StoreConfig::NO_MESSAGE),
        }
    }
}

impl Serialize for GiftMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Character counter under the note field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteCounter {
    pub used: usize,
    pub near_limit: bool,
}

impl fmt::Display for NoteCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} caracteres", self.used, StoreConfig::NOTE_MAX_CHARS)
    }
}

/// Read a quantity the way a number input read with integer parsing does:
/// leading whitespace, an optional sign, then as many digits as present.
/// Anything that is not a positive integer becomes 1; values past `u32::MAX`
/// are clamped to it.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    if negative {
        return 1;
    }
    let digits = rest[..digits_end].trim_start_matches('0');
    if digits.is_empty() {
        return 1;
    }
    // only digits remain, so the sole failure is overflow
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Cut `text` down to the note limit, counting characters rather than bytes
fn truncate_note(text: &str) -> String {
    text.chars().take(StoreConfig::NOTE_MAX_CHARS).collect()
}

/// All the fields of an order being filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    product: &'static Product,
    pub(crate) box_color: Option<BoxColor>,
    pub(crate) quantity: u32,
    pub(crate) include_note: bool,
    pub(crate) note_text: String,
    pub(crate) customer_name: String,
    pub(crate) customer_phone: String,
    pub(crate) customer_address: String,
}

impl OrderDraft {
    pub fn new(product: &'static Product) -> Self {
        Self {
            product,
            box_color: None,
            quantity: 1,
            include_note: false,
            note_text: String::new(),
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_address: String::new(),
        }
    }

    /// Back to defaults, same product
    pub fn reset(&mut self) {
        *self = Self::new(self.product);
    }

    // ========================
    // Setters
    // ========================

    pub fn set_box_color(&mut self, color: Option<BoxColor>) {
        self.box_color = color;
    }

    /// Parses raw input; see [`parse_quantity`]
    pub fn set_quantity(&mut self, raw: &str) {
        self.quantity = parse_quantity(raw);
    }

    pub fn set_include_note(&mut self, include: bool) {
        self.include_note = include;
    }

    /// Input past the note limit is dropped
    pub fn set_note_text(&mut self, text: &str) {
        self.note_text = truncate_note(text);
    }

    pub fn set_customer_name(&mut self, value: &str) {
        self.customer_name = value.to_string();
    }

    pub fn set_customer_phone(&mut self, value: &str) {
        self.customer_phone = value.to_string();
    }

    pub fn set_customer_address(&mut self, value: &str) {
        self.customer_address = value.to_string();
    }

    // ========================
    // Getters
    // ========================

    pub fn product(&self) -> &'static Product {
        self.product
    }

    pub fn box_color(&self) -> Option<BoxColor> {
        self.box_color
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn include_note(&self) -> bool {
        self.include_note
    }

    pub fn note_text(&self) -> &str {
        &self.note_text
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    pub fn customer_address(&self) -> &str {
        &self.customer_address
    }

    // ========================
    // Derived state
    // ========================

    pub fn total(&self) -> Money {
        self.product.price.times(self.quantity)
    }

    /// The typed note survives while the checkbox is off
    pub fn effective_message(&self) -> GiftMessage {
        if self.include_note {
            GiftMessage::Note(self.note_text.clone())
        } else {
            GiftMessage::NoMessage
        }
    }

    pub fn note_counter(&self) -> NoteCounter {
        let used = self.note_text.chars().count();
        NoteCounter {
            used,
            near_limit: used > StoreConfig::NOTE_WARN_CHARS,
        }
    }

    /// First failing rule, checked as: color, contact, note length
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.box_color.is_none() {
            return Err(OrderError::MissingBoxColor);
        }

        let contact = [&self.customer_name, &self.customer_phone, &self.customer_address];
        if contact.iter().any(|field| field.is_empty()) {
            return Err(OrderError::IncompleteContact);
        }

        let len = self.note_text.chars().count();
        if len > StoreConfig::NOTE_MAX_CHARS {
            return Err(OrderError::MessageTooLong {
                len,
                max: StoreConfig::NOTE_MAX_CHARS,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_product, ProductId};

    fn filled_draft() -> OrderDraft {
        let mut draft = OrderDraft::new(find_product(ProductId::Oreo));
        draft.set_box_color(Some(BoxColor::Rojo));
        draft.set_customer_name("Juan Pérez");
        draft.set_customer_phone("999 888 777");
        draft.set_customer_address("Av. Principal 123, Miraflores, Lima");
        draft
    }

    #[test]
    fn test_parse_quantity_accepts_positive_integers() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("  12"), 12);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("7 cajas"), 7);
        assert_eq!(parse_quantity("2.9"), 2);
    }

    #[test]
    fn test_parse_quantity_falls_back_to_one() {
        for raw in ["", "abc", "0", "-3", "-", "+", " ", "00", "-5000000000"] {
            assert_eq!(parse_quantity(raw), 1, "input {:?}", raw);
        }
    }

    #[test]
    fn test_parse_quantity_clamps_huge_values() {
        assert_eq!(parse_quantity("5000000000"), u32::MAX);
        assert_eq!(parse_quantity("99999999999999999999"), u32::MAX);
        assert_eq!(parse_quantity("0004294967295"), u32::MAX);
        assert_eq!(parse_quantity("007"), 7);
    }

    #[test]
    fn test_total_tracks_quantity() {
        let mut draft = filled_draft();
        assert_eq!(draft.total(), Money::from_units(25));
        draft.set_quantity("4");
        assert_eq!(draft.total(), Money::from_units(100));
        draft.set_quantity("nope");
        assert_eq!(draft.total(), Money::from_units(25));
    }

    #[test]
    fn test_note_text_is_truncated_on_input() {
        let mut draft = filled_draft();
        draft.set_note_text(&"a".repeat(200));
        assert_eq!(draft.note_text().chars().count(), 150);

        // multi-byte characters count once each
        draft.set_note_text(&"ñ".repeat(151));
        assert_eq!(draft.note_text().chars().count(), 150);
    }

    #[test]
    fn test_effective_message_follows_checkbox() {
        let mut draft = filled_draft();
        draft.set_note_text("Feliz cumpleaños");
        assert_eq!(draft.effective_message(), GiftMessage::NoMessage);
        assert_eq!(draft.effective_message().to_string(), "Sin mensaje");

        draft.set_include_note(true);
        assert_eq!(draft.effective_message().to_string(), "Feliz cumpleaños");

        draft.set_include_note(false);
        assert_eq!(draft.note_text(), "Feliz cumpleaños");
        assert_eq!(draft.effective_message().preview_text(), "");
    }

    #[test]
    fn test_note_counter_warns_above_140() {
        let mut draft = filled_draft();
        draft.set_note_text(&"x".repeat(140));
        assert!(!draft.note_counter().near_limit);
        draft.set_note_text(&"x".repeat(141));
        let counter = draft.note_counter();
        assert!(counter.near_limit);
        assert_eq!(counter.to_string(), "141/150 caracteres");
    }

    #[test]
    fn test_validate_requires_color_first() {
        let mut draft = OrderDraft::new(find_product(ProductId::Clasica));
        assert_eq!(draft.validate(), Err(OrderError::MissingBoxColor));
        draft.set_box_color(Some(BoxColor::Azul));
        assert_eq!(draft.validate(), Err(OrderError::IncompleteContact));
    }

    #[test]
    fn test_validate_requires_every_contact_field() {
        for blank in 0..3 {
            let mut draft = filled_draft();
            match blank {
                0 => draft.set_customer_name(""),
                1 => draft.set_customer_phone(""),
                _ => draft.set_customer_address(""),
            }
            assert_eq!(draft.validate(), Err(OrderError::IncompleteContact));
        }
    }

    #[test]
    fn test_whitespace_contact_counts_as_filled() {
        let mut draft = filled_draft();
        draft.set_customer_name(" ");
        draft.set_customer_phone(" ");
        draft.set_customer_address(" ");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_overlong_note() {
        let mut draft = filled_draft();
        draft.note_text = "x".repeat(151);
        assert_eq!(
            draft.validate(),
            Err(OrderError::MessageTooLong { len: 151, max: 150 })
        );
    }

    #[test]
    fn test_overlong_note_blocks_even_when_excluded() {
        let mut draft = filled_draft();
        draft.set_include_note(false);
        draft.note_text = "x".repeat(160);
        assert!(matches!(draft.validate(), Err(OrderError::MessageTooLong { .. })));
    }

    #[test]
    fn test_reset_keeps_product() {
        let mut draft = filled_draft();
        draft.set_quantity("5");
        draft.set_include_note(true);
        draft.reset();
        assert_eq!(draft, OrderDraft::new(find_product(ProductId::Oreo)));
    }
}
