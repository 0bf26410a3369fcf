//! HTTP calls for the invoice resource
//!
//! | Operation | Request                     |
//! |-----------|-----------------------------|
//! | list      | `GET /invoices?page=&search=` |
//! | fetch one | `GET /invoices/{id}`        |
//! | create    | `POST /invoices`            |
//! | update    | `PUT /invoices/{id}`        |
//! | delete    | `DELETE /invoices/{id}`     |

use crate::config::AppConfig;
use crate::shared::api_utils::{api_url, resource_url, ApiError};
use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceDto};
use contracts::domain::a001_invoice::list::{InvoiceListQuery, InvoiceListResponse};
use gloo_net::http::{Request, Response};

const COLLECTION: &str = "/invoices";

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// Build the list URL, e.g. `/api/invoices?page=2&search=acme`
pub fn list_url(config: &AppConfig, query: &InvoiceListQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Serialize(e.to_string()))?;
    Ok(format!("{}?{}", api_url(config, COLLECTION), qs))
}

pub async fn fetch_invoices(
    config: &AppConfig,
    query: &InvoiceListQuery,
) -> Result<InvoiceListResponse, ApiError> {
    let url = list_url(config, query)?;
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    ensure_ok(&response)?;
    Ok(response.json::<InvoiceListResponse>().await?)
}

pub async fn fetch_invoice(config: &AppConfig, id: &str) -> Result<Invoice, ApiError> {
    let url = resource_url(config, COLLECTION, id);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    ensure_ok(&response)?;
    Ok(response.json::<Invoice>().await?)
}

/// Create an invoice. The created entity in the response is not needed.
pub async fn create_invoice(config: &AppConfig, dto: &InvoiceDto) -> Result<(), ApiError> {
    let url = api_url(config, COLLECTION);
    log::debug!("POST {} ({} items)", url, dto.items.len());

    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;
    ensure_ok(&response)
}

pub async fn update_invoice(config: &AppConfig, id: &str, dto: &InvoiceDto) -> Result<(), ApiError> {
    let url = resource_url(config, COLLECTION, id);
    log::debug!("PUT {} ({} items)", url, dto.items.len());

    let response = Request::put(&url)
        .json(dto)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await?;
    ensure_ok(&response)
}

pub async fn delete_invoice(config: &AppConfig, id: &str) -> Result<(), ApiError> {
    let url = resource_url(config, COLLECTION, id);
    log::debug!("DELETE {}", url);

    let response = Request::delete(&url).send().await?;
    ensure_ok(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url() {
        let config = AppConfig::default().with_api_base(Some("https://x.test/api".into()));
        let query = InvoiceListQuery {
            page: 2,
            search: "acme".into(),
        };
        assert_eq!(
            list_url(&config, &query).unwrap(),
            "https://x.test/api/invoices?page=2&search=acme"
        );
    }

    #[test]
    fn test_list_url_with_empty_search() {
        let config = AppConfig::default();
        assert_eq!(
            list_url(&config, &InvoiceListQuery::default()).unwrap(),
            "/api/invoices?page=1&search="
        );
    }
}
