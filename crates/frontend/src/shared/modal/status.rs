use super::{ModalId, ModalService};
use crate::shared::icons::icon_sized;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl ModalService {
    /// Notification with an icon, a title, a message and a single dismiss button.
    pub fn show_status(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        status: Status,
    ) -> ModalId {
        let title = title.into();
        let message = message.into();
        let svc = *self;
        self.show(move || {
            view! {
                <StatusDialog
                    title=title.clone()
                    message=message.clone()
                    status=status
                    on_close=Callback::new(move |_| svc.hide_deferred())
                />
            }
            .into_any()
        })
    }

    pub fn show_success(&self, message: impl Into<String>) -> ModalId {
        self.show_status("Sukses", message, Status::Success)
    }

    pub fn show_failure(&self, message: impl Into<String>) -> ModalId {
        self.show_status("Gagal", message, Status::Failure)
    }
}

#[component]
pub fn StatusDialog(
    title: String,
    message: String,
    status: Status,
    on_close: Callback<()>,
) -> impl IntoView {
    let status_icon = match status {
        Status::Success => icon_sized("check-circle", 64, "status-dialog__icon status-dialog__icon--success"),
        Status::Failure => icon_sized("x-circle", 64, "status-dialog__icon status-dialog__icon--failure"),
    };

    view! {
        <div class="status-dialog">
            <div class="status-dialog__icon-wrap">{status_icon}</div>
            <h3 class="status-dialog__title">{title}</h3>
            <p class="status-dialog__message">{message}</p>
            <button class="button button--dark button--block" on:click=move |_| on_close.run(())>
                "Tutup"
            </button>
        </div>
    }
}
