use crate::shared::serde_helpers::{lenient_f64, null_as_default};
use serde::{Deserialize, Serialize};

// ============================================================================
// Item
// ============================================================================

/// One billable line of an invoice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceItem {
    #[serde(rename = "deskripsi", default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(rename = "kuantitas", default, deserialize_with = "lenient_f64")]
    pub quantity: f64,

    #[serde(rename = "harga", default, deserialize_with = "lenient_f64")]
    pub unit_price: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: f64,
}

impl InvoiceItem {
    /// Build an item whose total is derived from quantity and price.
    pub fn new(description: String, quantity: f64, unit_price: f64) -> Self {
        Self {
            description,
            quantity,
            unit_price,
            total: Self::compute_total(quantity, unit_price),
        }
    }

    /// quantity × price; a non-finite product collapses to 0.
    pub fn compute_total(quantity: f64, unit_price: f64) -> f64 {
        let total = quantity * unit_price;
        if total.is_finite() {
            total
        } else {
            0.0
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Invoice as returned by the API
///
/// The invoice total is never read from the payload: it is always the sum
/// of the item totals, see [`Invoice::total`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Invoice {
    /// `_id` only; a virtual `id` sent next to it is ignored
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(rename = "nomorInvoice", default, deserialize_with = "null_as_default")]
    pub number: String,

    #[serde(rename = "namaKlien", default, deserialize_with = "null_as_default")]
    pub client_name: String,

    #[serde(rename = "noTelepon", default)]
    pub client_phone: Option<String>,

    /// Raw date as sent by the server (`YYYY-MM-DD` or RFC 3339)
    #[serde(rename = "tanggalInvoice", default, deserialize_with = "null_as_default")]
    pub invoice_date: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Sum of the item totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.total).sum()
    }

    pub fn phone_or_empty(&self) -> &str {
        self.client_phone.as_deref().unwrap_or("")
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Request body for creating or updating an invoice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceDto {
    #[serde(rename = "namaKlien")]
    pub client_name: String,

    #[serde(rename = "noTelepon")]
    pub client_phone: String,

    #[serde(rename = "tanggalInvoice")]
    pub invoice_date: String,

    pub items: Vec<InvoiceItem>,
}

impl InvoiceDto {
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.total).sum()
    }

    /// Validate the payload before it is sent
    pub fn validate(&self) -> Result<(), String> {
        if self.client_name.trim().is_empty() {
            return Err("Nama klien wajib diisi.".into());
        }
        if self.client_phone.trim().is_empty() {
            return Err("No. telepon wajib diisi.".into());
        }
        if self.invoice_date.trim().is_empty() {
            return Err("Tanggal invoice wajib diisi.".into());
        }
        if self.items.is_empty() {
            return Err("Invoice harus memiliki minimal satu item.".into());
        }
        if let Some(pos) = self
            .items
            .iter()
            .position(|i| i.description.trim().is_empty())
        {
            return Err(format!("Deskripsi item ke-{} wajib diisi.", pos + 1));
        }
        Ok(())
    }
}

impl From<&Invoice> for InvoiceDto {
    fn from(invoice: &Invoice) -> Self {
        Self {
            client_name: invoice.client_name.clone(),
            client_phone: invoice.phone_or_empty().to_string(),
            invoice_date: invoice.invoice_date.clone(),
            items: invoice.items.clone(),
        }
    }
}
