use super::model::{InvoiceForm, SaveOutcome};
use crate::config::AppConfig;
use crate::domain::a001_invoice::api;
use crate::domain::a001_invoice::ui::print::DETAIL_FAILED;
use crate::routes::{navigate, Route};
use crate::shared::date_utils::today_for_input;
use crate::shared::modal::ModalService;
use crate::shared::request_guard::{begin_request, is_current, RequestGeneration};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the invoice form
#[derive(Clone, Copy)]
pub struct InvoiceDetailsViewModel {
    pub form: RwSignal<InvoiceForm>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    edit_id: StoredValue<Option<String>>,
    requests: StoredValue<RequestGeneration>,
    config: StoredValue<AppConfig>,
    modal: ModalService,
}

impl InvoiceDetailsViewModel {
    pub fn new(id: Option<String>, config: AppConfig, modal: ModalService) -> Self {
        Self {
            form: RwSignal::new(InvoiceForm::new(today_for_input())),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            load_error: RwSignal::new(None),
            edit_id: StoredValue::new(id),
            requests: StoredValue::new(RequestGeneration::new()),
            config: StoredValue::new(config),
            modal,
        }
    }

    /// False once the page that owns this view model has been unmounted
    fn is_alive(&self) -> bool {
        self.form.try_with_untracked(|_| ()).is_some()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_id.with_value(|id| id.is_some())
    }

    /// Submit stays disabled while loading or saving, and after a failed load
    pub fn submit_disabled(&self) -> bool {
        self.loading.get() || self.saving.get() || self.load_error.with(|e| e.is_some())
    }

    /// In edit mode, fetch the invoice and pre-fill the form
    pub fn load_if_needed(&self) {
        let Some(id) = self.edit_id.get_value() else {
            return;
        };
        let Some(token) = begin_request(self.requests) else {
            return;
        };
        let vm = *self;
        let config = self.config.get_value();
        vm.loading.set(true);
        vm.load_error.set(None);

        spawn_local(async move {
            let result = api::fetch_invoice(&config, &id).await;
            if !is_current(vm.requests, token) {
                return;
            }
            vm.loading.set(false);
            match result {
                Ok(invoice) => {
                    log::debug!("loaded invoice {} for editing", invoice.number);
                    vm.form.set(InvoiceForm::from_invoice(&invoice));
                }
                Err(e) => {
                    log::error!("failed to load invoice {}: {}", id, e);
                    vm.load_error.set(Some(DETAIL_FAILED.to_string()));
                    vm.modal.show_failure(DETAIL_FAILED);
                }
            }
        });
    }

    /// Validate, send, then go back to the list.
    ///
    /// On failure the form keeps everything the user typed.
    pub fn save_command(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.form.with_untracked(|f| f.to_dto());
        if let Err(message) = dto.validate() {
            self.modal.show_failure(message);
            return;
        }

        let vm = *self;
        let config = self.config.get_value();
        let edit_id = self.edit_id.get_value();
        vm.saving.set(true);

        spawn_local(async move {
            let result = match &edit_id {
                Some(id) => api::update_invoice(&config, id, &dto).await,
                None => api::create_invoice(&config, &dto).await,
            };
            if let Err(e) = &result {
                log::error!("failed to save invoice: {}", e);
            }

            match SaveOutcome::from_result(edit_id.is_some(), &result) {
                SaveOutcome::Failed { message } => {
                    // page was left while the request was in flight
                    if vm.saving.try_set(false).is_some() {
                        return;
                    }
                    vm.modal.show_failure(message);
                }
                SaveOutcome::Saved { message } => {
                    if !vm.is_alive() {
                        return;
                    }
                    log::info!("invoice for {} saved", dto.client_name);
                    // `saving` stays set so the form cannot be submitted again before the redirect
                    let notice = vm.modal.show_success(message);
                    TimeoutFuture::new(config.ui.redirect_delay_ms).await;
                    if !vm.is_alive() {
                        return;
                    }
                    if vm.modal.is_showing(notice) {
                        vm.modal.hide();
                    }
                    navigate(&Route::List);
                }
            }
        });
    }
}
