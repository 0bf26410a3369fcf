//! Form model for creating and editing an invoice.
//!
//! Field values are kept as the raw strings typed by the user; numbers are
//! parsed only when a total is displayed or the request body is built.

use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::format_date_for_input;
use crate::shared::number_format::{format_rupiah, parse_number};
use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceDto, InvoiceItem};
use uuid::Uuid;

pub const CREATED: &str = "Invoice baru berhasil disimpan!";
pub const UPDATED: &str = "Invoice berhasil diperbarui!";
pub const CREATE_FAILED: &str = "Gagal menyimpan invoice.";
pub const UPDATE_FAILED: &str = "Gagal memperbarui invoice.";

/// One editable item row
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDraft {
    pub key: Uuid,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    /// Set after the first quantity/price edit; the total stays blank until then
    pub touched: bool,
}

impl ItemDraft {
    pub fn blank() -> Self {
        Self {
            key: Uuid::new_v4(),
            description: String::new(),
            quantity: "1".to_string(),
            unit_price: String::new(),
            touched: false,
        }
    }

    pub fn from_item(item: &InvoiceItem) -> Self {
        Self {
            key: Uuid::new_v4(),
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price.to_string(),
            touched: true,
        }
    }

    pub fn total(&self) -> f64 {
        InvoiceItem::compute_total(parse_number(&self.quantity), parse_number(&self.unit_price))
    }

    /// Value of the read-only total field
    pub fn total_display(&self) -> String {
        if self.touched {
            format_rupiah(self.total())
        } else {
            String::new()
        }
    }

    /// Item for the request body; the total is computed from the current fields.
    pub fn to_item(&self) -> InvoiceItem {
        InvoiceItem::new(
            self.description.clone(),
            parse_number(&self.quantity),
            parse_number(&self.unit_price),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceForm {
    pub client_name: String,
    pub client_phone: String,
    pub invoice_date: String,
    pub items: Vec<ItemDraft>,
}

impl InvoiceForm {
    /// Blank form with one item row, dated `today` (input format)
    pub fn new(today: String) -> Self {
        Self {
            client_name: String::new(),
            client_phone: String::new(),
            invoice_date: today,
            items: vec![ItemDraft::blank()],
        }
    }

    pub fn from_invoice(invoice: &Invoice) -> Self {
        let mut items: Vec<ItemDraft> = invoice.items.iter().map(ItemDraft::from_item).collect();
        if items.is_empty() {
            items.push(ItemDraft::blank());
        }
        Self {
            client_name: invoice.client_name.clone(),
            client_phone: invoice.phone_or_empty().to_string(),
            invoice_date: format_date_for_input(&invoice.invoice_date),
            items,
        }
    }

    pub fn add_item(&mut self) -> Uuid {
        let draft = ItemDraft::blank();
        let key = draft.key;
        self.items.push(draft);
        key
    }

    /// Remove a row. The last remaining row is never removed.
    pub fn remove_item(&mut self, key: Uuid) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|i| i.key != key);
        self.items.len() != before
    }

    pub fn item(&self, key: Uuid) -> Option<&ItemDraft> {
        self.items.iter().find(|i| i.key == key)
    }

    pub fn is_first(&self, key: Uuid) -> bool {
        self.items.first().map(|i| i.key) == Some(key)
    }

    fn item_mut(&mut self, key: Uuid) -> Option<&mut ItemDraft> {
        self.items.iter_mut().find(|i| i.key == key)
    }

    pub fn set_description(&mut self, key: Uuid, value: String) {
        if let Some(item) = self.item_mut(key) {
            item.description = value;
        }
    }

    pub fn set_quantity(&mut self, key: Uuid, value: String) {
        if let Some(item) = self.item_mut(key) {
            item.quantity = value;
            item.touched = true;
        }
    }

    pub fn set_unit_price(&mut self, key: Uuid, value: String) {
        if let Some(item) = self.item_mut(key) {
            item.unit_price = value;
            item.touched = true;
        }
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(ItemDraft::total).sum()
    }

    /// Request body, items in row order
    pub fn to_dto(&self) -> InvoiceDto {
        InvoiceDto {
            client_name: self.client_name.trim().to_string(),
            client_phone: self.client_phone.trim().to_string(),
            invoice_date: self.invoice_date.clone(),
            items: self.items.iter().map(ItemDraft::to_item).collect(),
        }
    }
}

/// What the page does once a save request has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Success notice, then back to the list after the redirect delay
    Saved { message: &'static str },
    /// Failure notice; the form keeps what was typed and the page stays
    Failed { message: &'static str },
}

impl SaveOutcome {
    pub fn from_result(edit_mode: bool, result: &Result<(), ApiError>) -> Self {
        match (result, edit_mode) {
            (Ok(()), false) => SaveOutcome::Saved { message: CREATED },
            (Ok(()), true) => SaveOutcome::Saved { message: UPDATED },
            (Err(_), false) => SaveOutcome::Failed { message: CREATE_FAILED },
            (Err(_), true) => SaveOutcome::Failed { message: UPDATE_FAILED },
        }
    }

    pub fn returns_to_list(&self) -> bool {
        matches!(self, SaveOutcome::Saved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InvoiceForm {
        let mut form = InvoiceForm::new("2024-01-05".into());
        form.client_name = "Acme".into();
        form.client_phone = "0812".into();
        let first = form.items[0].key;
        form.set_description(first, "Konsultasi".into());
        form.set_quantity(first, "2".into());
        form.set_unit_price(first, "50000".into());
        form
    }

    #[test]
    fn test_new_form_has_one_blank_row() {
        let form = InvoiceForm::new("2024-01-05".into());
        assert_eq!(form.items.len(), 1);
        assert_eq!(form.items[0].quantity, "1");
        assert_eq!(form.items[0].total_display(), "");
        assert_eq!(form.invoice_date, "2024-01-05");
    }

    #[test]
    fn test_live_total_after_edit() {
        let mut form = InvoiceForm::new(String::new());
        let key = form.items[0].key;
        form.set_unit_price(key, "12500".into());
        assert_eq!(form.item(key).unwrap().total_display(), "Rp12.500");
        form.set_quantity(key, "".into());
        assert_eq!(form.item(key).unwrap().total_display(), "Rp0");
        form.set_quantity(key, "abc".into());
        assert_eq!(form.item(key).unwrap().total_display(), "Rp0");
    }

    #[test]
    fn test_add_then_remove_restores_single_row() {
        let mut form = filled_form();
        let first_row = form.items[0].clone();

        let added = form.add_item();
        assert_eq!(form.items.len(), 2);
        assert!(!form.is_first(added));

        assert!(form.remove_item(added));
        assert_eq!(form.items.len(), 1);
        assert_eq!(form.items[0], first_row);
        assert_eq!(form.client_name, "Acme");
    }

    #[test]
    fn test_last_row_cannot_be_removed() {
        let mut form = InvoiceForm::new(String::new());
        let only = form.items[0].key;
        assert!(!form.remove_item(only));
        assert_eq!(form.items.len(), 1);
    }

    #[test]
    fn test_remove_unknown_key_is_noop() {
        let mut form = InvoiceForm::new(String::new());
        form.add_item();
        assert!(!form.remove_item(Uuid::new_v4()));
        assert_eq!(form.items.len(), 2);
    }

    #[test]
    fn test_dto_has_one_item_per_row_with_fresh_totals() {
        let mut form = filled_form();
        let second = form.add_item();
        form.set_description(second, "Laporan".into());
        form.set_unit_price(second, "30000".into());
        let third = form.add_item();
        form.set_description(third, "Revisi".into());
        form.set_quantity(third, "3".into());
        form.set_unit_price(third, "1000".into());

        // edit after the display total was shown; the body must use the new value
        form.set_quantity(second, "4".into());

        let dto = form.to_dto();
        assert_eq!(dto.items.len(), 3);
        let totals: Vec<f64> = dto.items.iter().map(|i| i.total).collect();
        assert_eq!(totals, vec![100000.0, 120000.0, 3000.0]);
        assert_eq!(dto.items[1].quantity, 4.0);
        assert_eq!(dto.items[1].description, "Laporan");
        assert_eq!(dto.total(), 223000.0);
        assert_eq!(form.total(), 223000.0);
    }

    #[test]
    fn test_building_dto_leaves_form_untouched() {
        let form = filled_form();
        let snapshot = form.clone();
        let _ = form.to_dto();
        assert_eq!(form, snapshot);
    }

    #[test]
    fn test_failed_create_keeps_form_and_stays() {
        let form = filled_form();
        let snapshot = form.clone();

        let _body = form.to_dto();
        let outcome = SaveOutcome::from_result(false, &Err(ApiError::Status(500)));

        assert_eq!(outcome, SaveOutcome::Failed { message: "Gagal menyimpan invoice." });
        assert!(!outcome.returns_to_list());
        assert_eq!(form, snapshot);
    }

    #[test]
    fn test_save_outcome_messages() {
        let network = Err(ApiError::Network("offline".into()));
        assert_eq!(
            SaveOutcome::from_result(true, &network),
            SaveOutcome::Failed { message: UPDATE_FAILED }
        );

        let created = SaveOutcome::from_result(false, &Ok(()));
        assert_eq!(created, SaveOutcome::Saved { message: CREATED });
        assert!(created.returns_to_list());
        assert_eq!(
            SaveOutcome::from_result(true, &Ok(())),
            SaveOutcome::Saved { message: UPDATED }
        );
    }

    #[test]
    fn test_from_invoice_prefills() {
        let invoice = Invoice {
            id: "1".into(),
            number: "INV-1".into(),
            client_name: "Budi".into(),
            client_phone: Some("0813".into()),
            invoice_date: "2024-02-01T00:00:00.000Z".into(),
            items: vec![InvoiceItem::new("Jasa".into(), 2.0, 1500.5)],
        };
        let form = InvoiceForm::from_invoice(&invoice);
        assert_eq!(form.client_name, "Budi");
        assert_eq!(form.client_phone, "0813");
        assert_eq!(form.invoice_date, "2024-02-01");
        assert_eq!(form.items.len(), 1);
        assert_eq!(form.items[0].quantity, "2");
        assert_eq!(form.items[0].unit_price, "1500.5");
        assert_eq!(form.items[0].total_display(), "Rp3.001");
    }

    #[test]
    fn test_from_invoice_without_items_keeps_one_row() {
        let form = InvoiceForm::from_invoice(&Invoice::default());
        assert_eq!(form.items.len(), 1);
    }
}
