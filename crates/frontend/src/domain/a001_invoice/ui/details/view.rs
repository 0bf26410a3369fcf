use super::model::ItemDraft;
use super::view_model::InvoiceDetailsViewModel;
use crate::config::use_config;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon_sized;
use crate::shared::modal::use_modal;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn InvoiceDetails(id: Option<String>) -> impl IntoView {
    let vm = InvoiceDetailsViewModel::new(id, use_config(), use_modal());
    vm.load_if_needed();

    let (title, subtitle) = if vm.is_edit_mode() {
        ("Edit Invoice", "Perbarui detail invoice di bawah.")
    } else {
        ("Buat Invoice Baru", "Isi detail di bawah untuk membuat invoice.")
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <div class="page">
            <PageHeader title=title subtitle=subtitle.to_string() />

            <form class="card invoice-form" on:submit=on_submit>
                {move || vm.loading.get().then(|| view! { <div class="loader"></div> })}
                {move || vm.load_error.get().map(|message| view! {
                    <div class="form-error" role="alert">
                        {icon_sized("alert-triangle", 18, "")}
                        <span>{message}</span>
                    </div>
                })}

                <div class="invoice-form__grid">
                    <div class="form-group">
                        <label for="nama-klien">"Nama Klien"</label>
                        <input
                            type="text"
                            id="nama-klien"
                            required
                            prop:value=move || vm.form.with(|f| f.client_name.clone())
                            on:input=move |ev| vm.form.update(|f| f.client_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="no-telepon">"No. Telepon"</label>
                        <input
                            type="tel"
                            id="no-telepon"
                            prop:value=move || vm.form.with(|f| f.client_phone.clone())
                            on:input=move |ev| vm.form.update(|f| f.client_phone = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="tanggal-invoice">"Tanggal Invoice"</label>
                        <input
                            type="date"
                            id="tanggal-invoice"
                            required
                            prop:value=move || vm.form.with(|f| f.invoice_date.clone())
                            on:input=move |ev| vm.form.update(|f| f.invoice_date = event_target_value(&ev))
                        />
                    </div>
                </div>

                <h3 class="invoice-form__section-title">"Item Invoice"</h3>
                <div class="invoice-form__items">
                    <For
                        each=move || vm.form.with(|f| f.items.iter().map(|i| i.key).collect::<Vec<_>>())
                        key=|key| *key
                        let:row_key
                    >
                        <ItemRowEditor vm=vm row_key=row_key />
                    </For>
                </div>

                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| {
                        vm.form.update(|f| {
                            f.add_item();
                        });
                    }
                >
                    {icon_sized("plus", 16, "")}
                    "Tambah Item"
                </button>

                <div class="invoice-form__footer">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.submit_disabled()
                    >
                        {icon_sized("save", 16, "")}
                        {move || if vm.saving.get() { "Menyimpan..." } else { "Simpan Invoice" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// One item row. Labels are shown on the first row only; the first row has no remove button.
#[component]
fn ItemRowEditor(vm: InvoiceDetailsViewModel, row_key: Uuid) -> impl IntoView {
    let is_first = move || vm.form.with(|f| f.is_first(row_key));
    let field = move |read: fn(&ItemDraft) -> String| {
        move || vm.form.with(|f| f.item(row_key).map(read).unwrap_or_default())
    };
    let label = move |text: &'static str| {
        move || is_first().then(|| view! { <label class="item-row__label">{text}</label> })
    };

    view! {
        <div class="item-row">
            <div class="item-row__field item-row__field--description">
                {label("Deskripsi")}
                <input
                    type="text"
                    placeholder="Deskripsi item"
                    required
                    prop:value=field(|i| i.description.clone())
                    on:input=move |ev| vm.form.update(|f| f.set_description(row_key, event_target_value(&ev)))
                />
            </div>
            <div class="item-row__field">
                {label("Kuantitas")}
                <input
                    type="number"
                    min="0"
                    step="any"
                    prop:value=field(|i| i.quantity.clone())
                    on:input=move |ev| vm.form.update(|f| f.set_quantity(row_key, event_target_value(&ev)))
                />
            </div>
            <div class="item-row__field">
                {label("Harga Satuan")}
                <input
                    type="number"
                    min="0"
                    step="any"
                    placeholder="0"
                    prop:value=field(|i| i.unit_price.clone())
                    on:input=move |ev| vm.form.update(|f| f.set_unit_price(row_key, event_target_value(&ev)))
                />
            </div>
            <div class="item-row__field">
                {label("Total")}
                <input
                    type="text"
                    class="item-row__total"
                    readonly
                    tabindex="-1"
                    prop:value=field(|i| i.total_display())
                />
            </div>
            <div class="item-row__remove">
                {move || (!is_first()).then(|| view! {
                    <button
                        type="button"
                        class="icon-button icon-button--delete"
                        title="Hapus Item"
                        on:click=move |_| {
                            vm.form.update(|f| {
                                f.remove_item(row_key);
                            });
                        }
                    >
                        {icon_sized("x", 18, "")}
                    </button>
                })}
            </div>
        </div>
    }
}
