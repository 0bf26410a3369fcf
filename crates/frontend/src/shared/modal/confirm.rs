use super::ModalService;
use crate::shared::icons::icon_sized;
use leptos::prelude::*;

impl ModalService {
    /// Ask before deleting; `on_confirm` runs only from the confirm button.
    pub fn confirm_delete(&self, target_name: impl Into<String>, on_confirm: Callback<()>) {
        let target_name = target_name.into();
        let svc = *self;
        self.show(move || {
            view! {
                <ConfirmDeleteDialog
                    target_name=target_name.clone()
                    on_cancel=Callback::new(move |_| svc.hide_deferred())
                    on_confirm=on_confirm
                />
            }
            .into_any()
        });
    }
}

#[component]
pub fn ConfirmDeleteDialog(
    target_name: String,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let (pending, set_pending) = signal(false);

    view! {
        <div class="status-dialog">
            <div class="status-dialog__icon-wrap">
                {icon_sized("alert-triangle", 64, "status-dialog__icon status-dialog__icon--warning")}
            </div>
            <h3 class="status-dialog__title">"Konfirmasi Hapus"</h3>
            <p class="status-dialog__message">
                "Apakah Anda yakin ingin menghapus invoice untuk "
                <strong>{target_name}</strong>
                "?"
            </p>
            <div class="status-dialog__actions">
                <button class="button button--secondary button--block" on:click=move |_| on_cancel.run(())>
                    "Batal"
                </button>
                <button
                    class="button button--danger button--block"
                    disabled=move || pending.get()
                    on:click=move |_| {
                        set_pending.set(true);
                        on_confirm.run(());
                    }
                >
                    {move || if pending.get() { "Menghapus..." } else { "Ya, Hapus" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_delete_runs_only_from_confirm_button() {
        let owner = Owner::new();
        owner.set();

        let modal = ModalService::new();
        let deleted = Arc::new(AtomicBool::new(false));
        let on_confirm = {
            let deleted = Arc::clone(&deleted);
            Callback::new(move |_| deleted.store(true, Ordering::SeqCst))
        };

        modal.confirm_delete("Acme", on_confirm);
        assert!(modal.is_open());
        assert!(!deleted.load(Ordering::SeqCst));

        // cancel path: the dialog closes and nothing is deleted
        modal.hide();
        assert!(!modal.is_open());
        assert!(!deleted.load(Ordering::SeqCst));

        on_confirm.run(());
        assert!(deleted.load(Ordering::SeqCst));
    }

    #[test]
    fn test_new_modal_replaces_current_one() {
        let owner = Owner::new();
        owner.set();

        let modal = ModalService::new();
        let first = modal.show_failure("Gagal menghapus invoice.");
        let second = modal.show_success("Invoice berhasil dihapus.");
        assert!(!modal.is_showing(first));
        assert!(modal.is_showing(second));
    }
}
