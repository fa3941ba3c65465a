//! Submission Scenario Tests
//!
//! Full submit flows against recording collaborators.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::{TimeZone, Utc};

    use crate::{
        find_product, submit, BoxColor, GiftMessage, Money, Notifier, OrderDraft, OrderError,
        OrderSink, ProductId, SubmittedOrder,
    };

    #[derive(Default)]
    struct RecordingNotifier {
        successes: RefCell<Vec<(String, Option<String>)>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, title: &str, description: Option<&str>) {
            self.successes
                .borrow_mut()
                .push((title.to_string(), description.map(str::to_string)));
        }

        fn error(&self, title: &str) {
            self.errors.borrow_mut().push(title.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        orders: RefCell<Vec<SubmittedOrder>>,
    }

    impl OrderSink for RecordingSink {
        fn record(&self, order: &SubmittedOrder) {
            self.orders.borrow_mut().push(order.clone());
        }
    }

    fn contact_filled(id: ProductId) -> OrderDraft {
        let mut draft = OrderDraft::new(find_product(id));
        draft.set_customer_name("Ana Torres");
        draft.set_customer_phone("987 654 321");
        draft.set_customer_address("Jr. Cusco 45, Arequipa");
        draft
    }

    #[test]
    fn test_red_box_three_units_without_note() {
        let notifier = RecordingNotifier::default();
        let sink = RecordingSink::default();
        let now = Utc.with_ymd_and_hms(2024, 2, 14, 10, 30, 0).unwrap();

        let mut draft = contact_filled(ProductId::Oreo);
        draft.set_quantity("3");
        draft.set_box_color(Some(BoxColor::Rojo));
        draft.set_note_text("escrito pero no incluido");

        let order = submit(&mut draft, &notifier, &sink, now).expect("Submit failed");

        assert_eq!(order.total, Money::from_units(75));
        assert_eq!(order.total.to_string(), "S/ 75.00");
        assert_eq!(order.message, GiftMessage::NoMessage);
        assert_eq!(order.quantity, 3);
        assert_eq!(order.product, "Chocoteja Oreo");
        assert_eq!(order.date, now);

        assert_eq!(sink.orders.borrow().len(), 1);
        assert!(notifier.errors.borrow().is_empty());
        let successes = notifier.successes.borrow();
        assert_eq!(successes.len(), 1);
        assert!(successes[0].1.as_deref().unwrap().contains("987 654 321"));

        assert_eq!(draft, OrderDraft::new(find_product(ProductId::Oreo)));
    }

    #[test]
    fn test_missing_color_leaves_draft_unchanged() {
        let notifier = RecordingNotifier::default();
        let sink = RecordingSink::default();

        let mut draft = contact_filled(ProductId::FrutosSecos);
        draft.set_quantity("2");
        let before = draft.clone();

        let result = submit(&mut draft, &notifier, &sink, Utc::now());

        assert_eq!(result, Err(OrderError::MissingBoxColor));
        assert_eq!(draft, before);
        assert!(sink.orders.borrow().is_empty());
        assert_eq!(
            *notifier.errors.borrow(),
            vec!["Por favor selecciona un color de caja".to_string()]
        );
    }

    #[test]
    fn test_blank_contact_never_succeeds() {
        let notifier = RecordingNotifier::default();
        let sink = RecordingSink::default();

        let mut draft = OrderDraft::new(find_product(ProductId::Almendras));
        draft.set_box_color(Some(BoxColor::Azul));
        draft.set_customer_name("Luis");
        draft.set_customer_address("Av. Larco 200");

        let result = submit(&mut draft, &notifier, &sink, Utc::now());

        assert_eq!(result, Err(OrderError::IncompleteContact));
        assert!(sink.orders.borrow().is_empty());
        assert!(notifier.successes.borrow().is_empty());
    }

    #[test]
    fn test_included_note_is_recorded_verbatim() {
        let notifier = RecordingNotifier::default();
        let sink = RecordingSink::default();

        let mut draft = contact_filled(ProductId::Clasica);
        draft.set_box_color(Some(BoxColor::Dorado));
        draft.set_include_note(true);
        draft.set_note_text("¡Feliz aniversario!");

        let order = submit(&mut draft, &notifier, &sink, Utc::now()).expect("Submit failed");

        assert_eq!(order.message.to_string(), "¡Feliz aniversario!");
        assert_eq!(order.total.to_string(), "S/ 22.00");
    }

    #[test]
    fn test_overlong_note_is_rejected_and_kept() {
        let notifier = RecordingNotifier::default();
        let sink = RecordingSink::default();

        let mut draft = contact_filled(ProductId::Almendras);
        draft.set_box_color(Some(BoxColor::Rojo));
        draft.set_include_note(true);
        draft.note_text = "m".repeat(151);
        let before = draft.clone();

        let result = submit(&mut draft, &notifier, &sink, Utc::now());

        assert_eq!(result, Err(OrderError::MessageTooLong { len: 151, max: 150 }));
        assert_eq!(draft, before);
        assert!(sink.orders.borrow().is_empty());
        assert!(notifier.successes.borrow().is_empty());
        assert_eq!(
            *notifier.errors.borrow(),
            vec!["El mensaje no puede superar los 150 caracteres".to_string()]
        );
    }

    #[test]
    fn test_resubmit_after_fixing_error() {
        let notifier = RecordingNotifier::default();
        let sink = RecordingSink::default();

        let mut draft = contact_filled(ProductId::Oreo);
        assert!(submit(&mut draft, &notifier, &sink, Utc::now()).is_err());

        draft.set_box_color(Some(BoxColor::Azul));
        assert!(submit(&mut draft, &notifier, &sink, Utc::now()).is_ok());

        assert_eq!(notifier.errors.borrow().len(), 1);
        assert_eq!(notifier.successes.borrow().len(), 1);
        assert_eq!(sink.orders.borrow().len(), 1);
    }

    #[test]
    fn test_log_line_shape() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut draft = contact_filled(ProductId::Oreo);
        draft.set_box_color(Some(BoxColor::Rojo));
        draft.set_quantity("2");

        let order = SubmittedOrder::from_draft(&draft, now).unwrap();
        let json: serde_json::Value = serde_json::to_value(&order).unwrap();

        assert_eq!(json["product"], "Chocoteja Oreo");
        assert_eq!(json["boxColor"], "rojo");
        assert_eq!(json["message"], "Sin mensaje");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["total"], 50);
        assert_eq!(json["customerPhone"], "987 654 321");
        assert_eq!(json["date"], "2024-05-01T12:00:00Z");
    }
}
