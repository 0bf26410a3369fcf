pub mod state;

use self::state::{create_state, dispatch, InvoiceListAction, LoadStatus};
use crate::config::use_config;
use crate::domain::a001_invoice::api;
use crate::domain::a001_invoice::ui::print::open_print_modal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_long_date;
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon_sized;
use crate::shared::modal::use_modal;
use crate::shared::number_format::format_rupiah;
use crate::shared::request_guard::{begin_request, is_current, RequestGeneration};
use contracts::domain::a001_invoice::aggregate::Invoice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub const LIST_FAILED: &str = "Gagal memuat data.";
pub const DELETE_FAILED: &str = "Gagal menghapus invoice.";
const COLUMN_COUNT: &str = "5";

/// One table row, already formatted for display
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceRow {
    pub id: String,
    pub number: String,
    pub client_name: String,
    pub date: String,
    pub total: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.clone(),
            number: invoice.number.clone(),
            client_name: invoice.client_name.clone(),
            date: format_long_date(&invoice.invoice_date),
            total: format_rupiah(invoice.total()),
        }
    }
}

fn message_row(class: &'static str, content: AnyView) -> AnyView {
    view! {
        <tr>
            <td colspan=COLUMN_COUNT class=format!("table__message {}", class)>{content}</td>
        </tr>
    }
    .into_any()
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let config = StoredValue::new(use_config());
    let modal = use_modal();
    let state = create_state();
    let list_requests = StoredValue::new(RequestGeneration::new());
    let print_requests = StoredValue::new(RequestGeneration::new());

    let load = move || {
        let Some(token) = begin_request(list_requests) else {
            return;
        };
        let query = state.with_untracked(|s| s.query());
        dispatch(state, InvoiceListAction::FetchStarted);

        let config = config.get_value();
        spawn_local(async move {
            let result = api::fetch_invoices(&config, &query).await;
            if !is_current(list_requests, token) {
                return;
            }
            match result {
                Ok(response) => {
                    log::debug!(
                        "loaded {} invoices (page {}/{})",
                        response.data.len(),
                        query.page,
                        response.total_pages
                    );
                    dispatch(
                        state,
                        InvoiceListAction::FetchSucceeded {
                            invoices: response.data,
                            total_pages: response.total_pages,
                        },
                    );
                }
                Err(e) => {
                    log::error!("failed to load invoices: {}", e);
                    dispatch(state, InvoiceListAction::FetchFailed);
                }
            }
        });
    };

    let delete = move |id: String| {
        let config = config.get_value();
        spawn_local(async move {
            match api::delete_invoice(&config, &id).await {
                Ok(()) => {
                    log::info!("invoice {} deleted", id);
                    modal.show_success("Invoice berhasil dihapus.");
                    load();
                }
                Err(e) => {
                    log::error!("failed to delete invoice {}: {}", id, e);
                    modal.show_failure(DELETE_FAILED);
                }
            }
        });
    };

    let confirm_delete = move |row: &InvoiceRow| {
        let id = row.id.clone();
        modal.confirm_delete(row.client_name.clone(), Callback::new(move |_| delete(id.clone())));
    };

    let open_print = move |id: String| {
        open_print_modal(modal, config.get_value(), id, print_requests);
    };

    // Search: every keystroke re-arms the debouncer; only the last one fetches.
    let search_input = RwSignal::new(String::new());
    let debouncer = StoredValue::new_local(Debouncer::new(
        config.with_value(|c| c.ui.search_debounce_ms),
    ));
    Effect::new(move |prev: Option<()>| {
        let value = search_input.get();
        if prev.is_none() {
            return;
        }
        debouncer.with_value(|d| {
            d.schedule(move || {
                dispatch(state, InvoiceListAction::SearchChanged(value));
                load();
            })
        });
    });
    // a search still waiting for its quiet period must not fire once the page is gone
    on_cleanup(move || {
        let _ = debouncer.try_with_value(|d| d.cancel());
    });

    let go_to_page = move |page: u32| {
        dispatch(state, InvoiceListAction::PageRequested(page));
        load();
    };

    load();

    let placeholder = state.with_untracked(|s| s.search_field.placeholder());

    view! {
        <div class="page">
            <PageHeader title="Data Invoice" subtitle="Kelola semua data invoice Anda." />

            <div class="card search-panel">
                <Input value=search_input placeholder=placeholder />
            </div>

            <div class="card table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"No. Invoice"</th>
                            <th class="table__header-cell">"Nama Klien"</th>
                            <th class="table__header-cell">"Tanggal Invoice"</th>
                            <th class="table__header-cell">"Total Tagihan"</th>
                            <th class="table__header-cell">"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let (status, rows) = state.with(|s| {
                                (s.status, s.invoices.iter().map(InvoiceRow::from).collect::<Vec<_>>())
                            });
                            match status {
                                LoadStatus::Idle | LoadStatus::Loading => {
                                    message_row("", view! { <div class="loader"></div> }.into_any())
                                }
                                LoadStatus::Failed => {
                                    message_row("table__message--error", LIST_FAILED.into_any())
                                }
                                LoadStatus::Loaded if rows.is_empty() => {
                                    message_row("", "Tidak ada data.".into_any())
                                }
                                LoadStatus::Loaded => rows
                                    .into_iter()
                                    .map(|row| {
                                        let id_for_print = row.id.clone();
                                        let row_for_delete = row.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--strong">{row.number}</td>
                                                <td class="table__cell">{row.client_name}</td>
                                                <td class="table__cell">{row.date}</td>
                                                <td class="table__cell table__cell--strong">{row.total}</td>
                                                <td class="table__cell">
                                                    <div class="table__actions">
                                                        <button
                                                            class="icon-button icon-button--print"
                                                            title="Print Invoice"
                                                            on:click=move |_| open_print(id_for_print.clone())
                                                        >
                                                            {icon_sized("printer", 20, "")}
                                                        </button>
                                                        <button
                                                            class="icon-button icon-button--delete"
                                                            title="Hapus Invoice"
                                                            on:click=move |_| confirm_delete(&row_for_delete)
                                                        >
                                                            {icon_sized("trash-2", 20, "")}
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any(),
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                last_page=Signal::derive(move || state.with(|s| s.last_page()))
                has_prev=Signal::derive(move || state.with(|s| s.has_prev()))
                has_next=Signal::derive(move || state.with(|s| s.has_next()))
                busy=Signal::derive(move || state.with(|s| s.status == LoadStatus::Loading))
                on_page_change=Callback::new(go_to_page)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_invoice::list::InvoiceListResponse;

    #[test]
    fn test_row_from_list_response() {
        let json = r#"{
            "data": [{
                "_id": "1",
                "nomorInvoice": "INV-001",
                "namaKlien": "Acme",
                "tanggalInvoice": "2024-01-05",
                "items": [{"total": 100000}, {"total": 50000}]
            }],
            "totalPages": 1
        }"#;
        let response: InvoiceListResponse = serde_json::from_str(json).unwrap();
        let rows: Vec<InvoiceRow> = response.data.iter().map(InvoiceRow::from).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[0].number, "INV-001");
        assert_eq!(rows[0].client_name, "Acme");
        assert_eq!(rows[0].date, "05 Januari 2024");
        assert_eq!(rows[0].total, "Rp150.000");
    }

    #[test]
    fn test_row_total_is_sum_of_items() {
        let json = r#"{"_id": "2", "total": 1, "items": [{"total": 1500}, {"total": 2500}, {"total": 0}]}"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(InvoiceRow::from(&invoice).total, "Rp4.000");
    }
}
