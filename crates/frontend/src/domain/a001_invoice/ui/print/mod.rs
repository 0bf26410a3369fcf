//! Printable invoice document shown in a modal.

use crate::config::{AppConfig, BrandingConfig};
use crate::domain::a001_invoice::api;
use crate::shared::date_utils::format_long_date;
use crate::shared::icons::icon;
use crate::shared::modal::ModalService;
use crate::shared::number_format::{format_quantity, format_rupiah};
use crate::shared::request_guard::{begin_request, is_current, RequestGeneration};
use contracts::domain::a001_invoice::aggregate::Invoice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub const DETAIL_FAILED: &str = "Gagal memuat detail invoice.";

#[derive(Clone, Debug, PartialEq)]
pub struct PrintableLine {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub total: String,
}

/// Display-ready invoice; the grand total is recomputed from the items.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintableInvoice {
    pub number: String,
    pub client_name: String,
    pub client_phone: String,
    pub date: String,
    pub lines: Vec<PrintableLine>,
    pub grand_total: String,
}

impl From<&Invoice> for PrintableInvoice {
    fn from(invoice: &Invoice) -> Self {
        Self {
            number: invoice.number.clone(),
            client_name: invoice.client_name.clone(),
            client_phone: invoice.phone_or_empty().to_string(),
            date: format_long_date(&invoice.invoice_date),
            lines: invoice
                .items
                .iter()
                .map(|item| PrintableLine {
                    description: item.description.clone(),
                    quantity: format_quantity(item.quantity),
                    unit_price: format_rupiah(item.unit_price),
                    total: format_rupiah(item.total),
                })
                .collect(),
            grand_total: format_rupiah(invoice.total()),
        }
    }
}

/// Open the print modal for `id`: a loading placeholder first, then the document.
pub fn open_print_modal(
    modal: ModalService,
    config: AppConfig,
    id: String,
    requests: StoredValue<RequestGeneration>,
) {
    let Some(token) = begin_request(requests) else {
        return;
    };
    let loading = modal.show_with_class("modal--wide", || {
        view! {
            <div class="invoice-print invoice-print--loading">
                <div class="loader"></div>
            </div>
        }
        .into_any()
    });

    spawn_local(async move {
        let result = api::fetch_invoice(&config, &id).await;
        if !is_current(requests, token) || !modal.is_showing(loading) {
            return;
        }
        match result {
            Ok(invoice) => {
                let printable = PrintableInvoice::from(&invoice);
                let logo_url = config.logo_url();
                let branding = config.branding.clone();
                modal.show_with_class("modal--wide", move || {
                    view! {
                        <InvoicePrintView
                            invoice=printable.clone()
                            branding=branding.clone()
                            logo_url=logo_url.clone()
                            on_close=Callback::new(move |_| modal.hide_deferred())
                        />
                    }
                    .into_any()
                });
            }
            Err(e) => {
                log::error!("failed to load invoice {}: {}", id, e);
                modal.show_failure(DETAIL_FAILED);
            }
        }
    });
}

fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            log::error!("print failed: {:?}", e);
        }
    }
}

#[component]
pub fn InvoicePrintView(
    invoice: PrintableInvoice,
    branding: BrandingConfig,
    logo_url: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let PrintableInvoice {
        number,
        client_name,
        client_phone,
        date,
        lines,
        grand_total,
    } = invoice;

    view! {
        <div class="invoice-print">
            <div id="invoice-content" class="invoice-print__document">
                <header class="invoice-print__header">
                    <div class="invoice-print__issuer">
                        <img src=logo_url alt=format!("{} Logo", branding.app_title) class="invoice-print__logo" />
                        <div>
                            <h1 class="invoice-print__company">{branding.company_name.clone()}</h1>
                            <p class="invoice-print__muted">{branding.address.clone()}</p>
                            <p class="invoice-print__muted">{branding.contact_line.clone()}</p>
                        </div>
                    </div>
                    <div class="invoice-print__heading">
                        <h2 class="invoice-print__label">"INVOICE"</h2>
                        <p class="invoice-print__number">{number}</p>
                    </div>
                </header>

                <div class="invoice-print__parties">
                    <div>
                        <p class="invoice-print__muted">"Ditagihkan kepada:"</p>
                        <p class="invoice-print__client">{client_name}</p>
                        <p class="invoice-print__muted">{client_phone}</p>
                    </div>
                    <div class="invoice-print__date">
                        <p class="invoice-print__muted">"Tanggal:"</p>
                        <p class="invoice-print__strong">{date}</p>
                    </div>
                </div>

                <table class="invoice-print__table">
                    <thead>
                        <tr>
                            <th class="text-left">"Deskripsi"</th>
                            <th class="text-right">"Kuantitas"</th>
                            <th class="text-right">"Harga Satuan"</th>
                            <th class="text-right">"Jumlah"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {lines.into_iter().map(|line| view! {
                            <tr>
                                <td>{line.description}</td>
                                <td class="text-right">{line.quantity}</td>
                                <td class="text-right">{line.unit_price}</td>
                                <td class="text-right invoice-print__strong">{line.total}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                    <tfoot>
                        <tr>
                            <td colspan="3" class="text-right invoice-print__total-label">"TOTAL"</td>
                            <td class="text-right invoice-print__total">{grand_total}</td>
                        </tr>
                    </tfoot>
                </table>

                <div class="invoice-print__payment">
                    <h3>"Tujuan Pembayaran:"</h3>
                    <p><span class="invoice-print__key">"Bank"</span>": "{branding.bank_name.clone()}</p>
                    <p><span class="invoice-print__key">"No. Rekening"</span>": "{branding.account_number.clone()}</p>
                    <p><span class="invoice-print__key">"Atas Nama"</span>": "{branding.account_holder.clone()}</p>
                </div>

                <footer class="invoice-print__footer">
                    <p>{branding.thank_you_note.clone()}</p>
                </footer>
            </div>

            <div class="invoice-print__actions no-print">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Tutup"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| print_page()>
                    {icon("printer")}
                    " Print"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_invoice::aggregate::InvoiceItem;

    #[test]
    fn test_printable_invoice() {
        let invoice = Invoice {
            id: "1".into(),
            number: "INV-001".into(),
            client_name: "Acme".into(),
            client_phone: Some("0812".into()),
            invoice_date: "2024-01-05T00:00:00.000Z".into(),
            items: vec![
                InvoiceItem::new("Konsultasi".into(), 2.0, 50000.0),
                InvoiceItem::new("Laporan".into(), 1.0, 50000.0),
            ],
        };
        let printable = PrintableInvoice::from(&invoice);
        assert_eq!(printable.date, "05 Januari 2024");
        assert_eq!(printable.client_phone, "0812");
        assert_eq!(printable.lines.len(), 2);
        assert_eq!(printable.lines[0].quantity, "2");
        assert_eq!(printable.lines[0].unit_price, "Rp50.000");
        assert_eq!(printable.lines[0].total, "Rp100.000");
        assert_eq!(printable.grand_total, "Rp150.000");
    }

    #[test]
    fn test_grand_total_ignores_missing_phone_and_recomputes() {
        let invoice = Invoice {
            items: vec![
                InvoiceItem { total: 1000.0, ..InvoiceItem::default() },
                InvoiceItem { total: 2500.0, ..InvoiceItem::default() },
            ],
            ..Invoice::default()
        };
        let printable = PrintableInvoice::from(&invoice);
        assert_eq!(printable.client_phone, "");
        assert_eq!(printable.grand_total, "Rp3.500");
    }
}
