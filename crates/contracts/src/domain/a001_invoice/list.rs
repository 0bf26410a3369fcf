use super::aggregate::Invoice;
use crate::shared::serde_helpers::{lenient_page_count, null_as_default};
use serde::{Deserialize, Serialize};

fn default_total_pages() -> u32 {
    1
}

/// Query parameters of `GET /invoices`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceListQuery {
    /// 1-based page number
    pub page: u32,
    pub search: String,
}

impl Default for InvoiceListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

/// Paginated response of `GET /invoices`
///
/// Only `data` and `totalPages` are read; any other key is ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Invoice>,

    #[serde(
        rename = "totalPages",
        default = "default_total_pages",
        deserialize_with = "lenient_page_count"
    )]
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_parses() {
        let json = r#"{
            "data": [{
                "_id": "1",
                "nomorInvoice": "INV-001",
                "namaKlien": "Acme",
                "tanggalInvoice": "2024-01-05",
                "items": [{"total": 100000}, {"total": 50000}]
            }],
            "totalPages": 3,
            "currentPage": 1
        }"#;
        let resp: InvoiceListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.total_pages, 3);
        assert_eq!(resp.data[0].total(), 150000.0);
    }

    #[test]
    fn test_list_response_defaults() {
        let resp: InvoiceListResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.total_pages, 1);
    }

    #[test]
    fn test_unread_keys_do_not_break_parsing() {
        let json = r#"{
            "data": [],
            "totalPages": 2,
            "currentPage": "1",
            "totalInvoices": "12",
            "total": null
        }"#;
        let resp: InvoiceListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total_pages, 2);
    }

    #[test]
    fn test_odd_total_pages_fall_back_to_one() {
        for json in [
            r#"{"data": [], "totalPages": null}"#,
            r#"{"data": [], "totalPages": 1.5}"#,
            r#"{"data": [], "totalPages": "x"}"#,
        ] {
            let resp: InvoiceListResponse = serde_json::from_str(json).unwrap();
            assert_eq!(resp.total_pages, 1, "{json}");
        }
        let resp: InvoiceListResponse =
            serde_json::from_str(r#"{"data": [], "totalPages": "4"}"#).unwrap();
        assert_eq!(resp.total_pages, 4);
    }

    #[test]
    fn test_default_query_starts_on_first_page() {
        let q = InvoiceListQuery::default();
        assert_eq!(q.page, 1);
        assert!(q.search.is_empty());
    }
}
